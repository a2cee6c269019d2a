//! Lifecycle of the frame loop
//!
//! The loop starts `Running` and only ever moves to `Closed`, either from the
//! window's close button or from Escape.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
#[reflect(Resource)]
pub enum LoopState {
    #[default]
    Running,
    Closed,
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running)
    }
}

/// Run condition: the loop has not been closed yet
pub fn loop_running(state: Res<LoopState>) -> bool {
    state.is_running()
}

/// Run condition: a close was requested this frame or earlier
pub fn loop_closed(state: Res<LoopState>) -> bool {
    !state.is_running()
}
