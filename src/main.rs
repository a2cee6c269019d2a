//! A grid cursor demo built with Rust and Bevy.
//!
//! Arrow keys move the cursor, W/S and A/D resize it, Escape quits.

use orca::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
