//! Application state management.

pub mod loop_state;

pub use loop_state::{loop_closed, loop_running, LoopState};
