//! Geometric Primitives and Operations

pub mod grid_rect;
pub mod pixel_space;

// Re-export commonly used items
pub use grid_rect::GridRect;
pub use pixel_space::{camera_center, pixel_to_world};
