//! Per-frame system ordering
//!
//! One frame runs: poll input, react to window events, sleep, update the
//! cursor. Bevy's render step then clears, draws and presents. Once the loop
//! is closed only the closing systems still run.

use crate::core::state::{loop_closed, loop_running, LoopState};
use crate::io::{poll_input_events, FrameInput};
use crate::systems::{close_window, handle_window_events, pace_frame};
use bevy::prelude::*;

/// Ordered phases of a frame
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameLoopSet {
    /// Keyboard and window events become this frame's input
    Input,
    /// Close the window if the loop has been closed
    Lifecycle,
    /// Fixed sleep capping the frame rate
    Pacing,
    /// Cursor geometry and its drawables
    Cursor,
}

pub struct FrameLoopPlugin;

impl Plugin for FrameLoopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoopState>()
            .init_resource::<FrameInput>()
            .configure_sets(
                Update,
                (
                    FrameLoopSet::Input,
                    FrameLoopSet::Lifecycle,
                    FrameLoopSet::Pacing,
                    FrameLoopSet::Cursor,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (poll_input_events, handle_window_events)
                        .chain()
                        .in_set(FrameLoopSet::Input)
                        .run_if(loop_running),
                    close_window
                        .in_set(FrameLoopSet::Lifecycle)
                        .run_if(loop_closed),
                    pace_frame
                        .in_set(FrameLoopSet::Pacing)
                        .run_if(loop_running),
                ),
            );
    }
}
