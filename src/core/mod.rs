//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - Frame loop state
//! - Settings and CLI handling

pub mod app;
pub mod config;
pub mod platform;
pub mod runner;
pub mod state;

// Re-export commonly used items
pub use app::create_app;
pub use config::{CliArgs, OrcaSettings};
pub use runner::run_app;
pub use state::LoopState;
