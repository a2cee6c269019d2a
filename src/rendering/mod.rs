//! Rendering and Visualization
//!
//! This module contains the drawing side of the demo:
//! - Camera setup mapping window pixels onto the 2D world
//! - The grid cursor (glyph and highlight) and its per-frame update

pub mod cameras;
pub mod cursor;

// Re-export commonly used items
pub use cameras::CameraPlugin;
pub use cursor::{
    spawn_cursor, update_cursor, CursorGlyph, CursorHighlight, CursorLayout, CursorPlugin,
    GridCursor,
};
