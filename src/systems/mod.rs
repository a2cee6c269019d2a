//! Bevy Systems and Plugins
//!
//! This module contains the frame loop and plugin configuration:
//! - Ordering of the per-frame system sets
//! - Window lifecycle: resize reporting and closing
//! - Frame pacing
//! - Default plugin and logging configuration

pub mod frame_loop;
pub mod frame_pacing;
pub mod lifecycle;
pub mod plugins;

// Re-export commonly used items
pub use frame_loop::{FrameLoopPlugin, FrameLoopSet};
pub use frame_pacing::pace_frame;
pub use lifecycle::{close_window, handle_window_events};
pub use plugins::{configure_default_plugins, configure_logging};
