//! Frame pacing
//!
//! A fixed sleep after input handling. Vsync is also on, so frames are capped
//! twice; an explicit frame rate limiter must not be added on top.

use crate::core::config::OrcaSettings;
use bevy::prelude::*;

/// Block the frame for the configured sleep
pub fn pace_frame(settings: Res<OrcaSettings>) {
    std::thread::sleep(settings.frame_sleep);
}
