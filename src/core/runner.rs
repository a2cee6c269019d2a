//! Application runner logic

use crate::core::config::CliArgs;
use anyhow::Result;
use bevy::app::AppExit;
use tracing::info;

/// Create and run the application with the given CLI arguments.
///
/// Returns once the window has been closed.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    let mut app = crate::core::app::create_app(cli_args)?;
    info!("Starting frame loop");
    match app.run() {
        AppExit::Success => {
            info!("Window closed, exiting");
            Ok(())
        }
        AppExit::Error(code) => Err(anyhow::anyhow!("Orca exited with code {}", code)),
    }
}
