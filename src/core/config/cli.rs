//! Command line interface for the Orca cursor demo
//!
//! Only startup inputs are exposed here. Nothing parsed from the command line
//! is consulted again once the frame loop is running.

use super::settings::{OrcaSettings, DEFAULT_FONT_PATH, TILE_SIZE};
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Orca CLI arguments
///
/// Examples:
///   orca                          # Load ./TerminusTTF.ttf, cursor at 8,8
///   orca --font ~/fonts/mono.ttf  # Use a different font file
///   orca --start 2,3              # Start the cursor on cell (2, 3)
#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(
    name = "orca",
    version,
    about = "Move and resize a grid cursor with the keyboard",
    long_about = "Orca opens a window with a single grid cursor. Arrow keys move it, W/S and A/D resize it, Escape quits."
)]
pub struct CliArgs {
    /// Font file used for the cursor glyph
    #[clap(
        long = "font",
        short = 'f',
        default_value = DEFAULT_FONT_PATH,
        help = "Font file for the cursor glyph",
        long_help = "Path to a TrueType/OpenType font used to draw the cursor glyph. Relative paths are resolved against the working directory. Startup fails if the file cannot be loaded."
    )]
    pub font: PathBuf,

    /// Grid cell the cursor starts on, as `X,Y`
    #[clap(
        long = "start",
        short = 's',
        value_parser = parse_cell,
        help = "Starting cell as X,Y"
    )]
    pub start: Option<IVec2>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            font: PathBuf::from(DEFAULT_FONT_PATH),
            start: None,
        }
    }
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Only catches mistakes that are obvious without touching the font;
    /// an unreadable or invalid font is reported by the font loader.
    pub fn validate(&self) -> Result<(), String> {
        if self.font.as_os_str().is_empty() {
            return Err("Font path is empty".to_string());
        }
        if self.font.is_dir() {
            return Err(format!(
                "Font path is a directory: {}\nPass the path of a .ttf or .otf file.",
                self.font.display()
            ));
        }
        if let Some(start) = self.start {
            if !cell_fits_in_pixels(start.x) || !cell_fits_in_pixels(start.y) {
                return Err(format!(
                    "Start cell {},{} is too far out: its pixel position does not fit in 32 bits",
                    start.x, start.y
                ));
            }
        }
        Ok(())
    }

    /// Merge the arguments over the built-in defaults
    pub fn to_settings(&self) -> OrcaSettings {
        let defaults = OrcaSettings::default();
        OrcaSettings {
            font_path: self.font.clone(),
            cursor_start: self.start.unwrap_or(defaults.cursor_start),
            ..defaults
        }
    }
}

/// Both edges of a one-cell-wide cursor at `v` must be representable in pixels
fn cell_fits_in_pixels(v: i32) -> bool {
    v.checked_mul(TILE_SIZE).is_some()
        && v.checked_add(1)
            .and_then(|edge| edge.checked_mul(TILE_SIZE))
            .is_some()
}

fn parse_cell(value: &str) -> Result<IVec2, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid X '{x}': {e}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid Y '{y}': {e}"))?;
    Ok(IVec2::new(x, y))
}
