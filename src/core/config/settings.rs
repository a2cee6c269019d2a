//! Application settings and compile-time defaults
//!
//! Everything the frame loop needs to know about sizes, timing and colors
//! lives here so the systems themselves stay free of magic numbers.

use bevy::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

/// Pixels per grid cell
pub const TILE_SIZE: i32 = 24;

/// Initial window size in logical pixels
pub const DEFAULT_WINDOW_SIZE: UVec2 = UVec2::new(800, 700);

/// Window title
pub const WINDOW_TITLE: &str = "My Window";

/// Font loaded at startup, relative to the working directory
pub const DEFAULT_FONT_PATH: &str = "TerminusTTF.ttf";

/// Cell the cursor starts on
pub const DEFAULT_CURSOR_CELL: IVec2 = IVec2::new(8, 8);

/// Glyph drawn at the cursor anchor
pub const CURSOR_GLYPH: &str = "@";

/// Fixed sleep after input handling, roughly 15 frames per second.
///
/// This is stacked on top of vsync. Use vsync or an explicit frame rate
/// limiter, never both: the sleep only pads frames, it does not limit them.
pub const FRAME_SLEEP: Duration = Duration::from_millis(66);

/// Highlight fill behind the glyph
pub const HIGHLIGHT_COLOR: Color = Color::srgba(0.2, 0.45, 0.9, 0.55);

/// Glyph color
pub const GLYPH_COLOR: Color = Color::WHITE;

/// Window clear color
pub const BACKGROUND_COLOR: Color = Color::BLACK;

/// Runtime settings for the cursor demo
///
/// Built from CLI arguments on top of the defaults above.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrcaSettings {
    pub font_path: PathBuf,
    pub window_size: UVec2,
    pub window_title: String,
    pub cursor_start: IVec2,
    pub frame_sleep: Duration,
}

impl Default for OrcaSettings {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            window_size: DEFAULT_WINDOW_SIZE,
            window_title: WINDOW_TITLE.to_string(),
            cursor_start: DEFAULT_CURSOR_CELL,
            frame_sleep: FRAME_SLEEP,
        }
    }
}
