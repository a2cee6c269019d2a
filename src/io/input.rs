//! Keyboard input for the frame loop
//!
//! Each frame the pending key presses are folded into a fresh [`FrameInput`]:
//! a one-frame movement/resize delta plus a close request. Nothing carries
//! over from the previous frame.

use crate::core::state::LoopState;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

/// Per-frame change applied to the cursor, each component in `-1..=1`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub struct FrameDelta {
    pub off_x: i32,
    pub off_y: i32,
    pub off_w: i32,
    pub off_h: i32,
}

impl FrameDelta {
    pub const fn new(off_x: i32, off_y: i32, off_w: i32, off_h: i32) -> Self {
        Self {
            off_x,
            off_y,
            off_w,
            off_h,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// What a single key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveX(i32),
    MoveY(i32),
    ResizeW(i32),
    ResizeH(i32),
    Close,
}

/// Map a key to its action. Keys without a binding return `None`.
pub fn key_action(key: KeyCode) -> Option<KeyAction> {
    let action = match key {
        KeyCode::ArrowUp => KeyAction::MoveY(-1),
        KeyCode::ArrowDown => KeyAction::MoveY(1),
        KeyCode::ArrowLeft => KeyAction::MoveX(-1),
        KeyCode::ArrowRight => KeyAction::MoveX(1),
        KeyCode::KeyW => KeyAction::ResizeH(-1),
        KeyCode::KeyS => KeyAction::ResizeH(1),
        KeyCode::KeyA => KeyAction::ResizeW(-1),
        KeyCode::KeyD => KeyAction::ResizeW(1),
        KeyCode::Escape => KeyAction::Close,
        _ => return None,
    };
    Some(action)
}

/// Input gathered during one poll cycle
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub delta: FrameDelta,
    pub close_requested: bool,
}

impl FrameInput {
    /// Fold a batch of key presses, in arrival order.
    ///
    /// Each press overwrites only its own axis, so when several keys touch the
    /// same axis the last one wins.
    pub fn from_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        let mut input = Self::default();
        for key in keys {
            input.apply(key);
        }
        input
    }

    pub fn apply(&mut self, key: KeyCode) {
        match key_action(key) {
            Some(KeyAction::MoveX(step)) => self.delta.off_x = step,
            Some(KeyAction::MoveY(step)) => self.delta.off_y = step,
            Some(KeyAction::ResizeW(step)) => self.delta.off_w = step,
            Some(KeyAction::ResizeH(step)) => self.delta.off_h = step,
            Some(KeyAction::Close) => self.close_requested = true,
            None => {}
        }
    }
}

/// Drain this frame's key presses into [`FrameInput`]
///
/// Escape flips the loop to [`LoopState::Closed`] right away so the rest of
/// the frame sees it.
pub fn poll_input_events(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut frame_input: ResMut<FrameInput>,
    mut loop_state: ResMut<LoopState>,
) {
    let pressed = keyboard_events
        .read()
        .filter(|event| event.state == ButtonState::Pressed)
        .map(|event| {
            info!("Received key {:?}", event.key_code);
            event.key_code
        });

    *frame_input = FrameInput::from_keys(pressed);

    if frame_input.close_requested && loop_state.is_running() {
        info!("Escape pressed, closing");
        *loop_state = LoopState::Closed;
    }
}
