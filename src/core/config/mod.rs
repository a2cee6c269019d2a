//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - CLI arguments parsing
//! - Application settings and defaults

pub mod cli;
pub mod settings;

// Simple, clear re-exports
pub use cli::CliArgs;
pub use settings::{
    OrcaSettings, BACKGROUND_COLOR, CURSOR_GLYPH, DEFAULT_CURSOR_CELL, DEFAULT_FONT_PATH,
    DEFAULT_WINDOW_SIZE, FRAME_SLEEP, GLYPH_COLOR, HIGHLIGHT_COLOR, TILE_SIZE, WINDOW_TITLE,
};
