//! Conversion from screen pixels to Bevy world space
//!
//! Grid geometry is laid out in pixels with the origin at the top-left corner
//! of the window and y growing downward. Bevy's 2D world has y growing upward,
//! so pixel coordinates are flipped on the y axis and the camera is parked at
//! the center of the initial window.

use bevy::prelude::*;

/// World position of a pixel coordinate
pub fn pixel_to_world(pixel: IVec2) -> Vec2 {
    Vec2::new(pixel.x as f32, -(pixel.y as f32))
}

/// Camera translation that puts pixel `(0, 0)` at the window's top-left corner
pub fn camera_center(window_size: UVec2) -> Vec2 {
    Vec2::new(window_size.x as f32 * 0.5, -(window_size.y as f32) * 0.5)
}
