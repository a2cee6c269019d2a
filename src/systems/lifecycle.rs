//! Window lifecycle systems

use crate::core::state::LoopState;
use bevy::prelude::*;
use bevy::window::{WindowCloseRequested, WindowResized};

/// Log window resizes and turn a close request into [`LoopState::Closed`]
///
/// Resizing does not relayout anything; the new size is only reported.
pub fn handle_window_events(
    mut resized: EventReader<WindowResized>,
    mut close_requested: EventReader<WindowCloseRequested>,
    mut loop_state: ResMut<LoopState>,
) {
    for event in resized.read() {
        info!("New width: {}", event.width);
        info!("New height: {}", event.height);
    }

    if close_requested.read().count() > 0 {
        info!("Window close requested");
        *loop_state = LoopState::Closed;
    }
}

/// Close every window and end the app
pub fn close_window(
    mut commands: Commands,
    windows: Query<Entity, With<Window>>,
    mut exit: EventWriter<AppExit>,
) {
    for window in &windows {
        commands.entity(window).despawn();
    }
    exit.write(AppExit::Success);
}
