pub mod input;

// Input system
pub use input::{key_action, poll_input_events, FrameDelta, FrameInput, KeyAction};
