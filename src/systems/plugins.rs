//! Plugin management and configuration for the Orca demo
//!
//! Bevy's default plugins are trimmed to what one window with a text glyph
//! and a sprite needs, and logging is tuned per build profile.

use crate::core::config::OrcaSettings;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::{ExitCondition, PresentMode, WindowResolution};

/// Configure logging with performance optimization for release builds
pub fn configure_logging() -> LogPlugin {
    #[cfg(debug_assertions)]
    {
        // Debug builds: cursor moves and lifecycle details are useful
        LogPlugin {
            level: Level::INFO,
            filter: "orca=debug,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn".to_string(),
            ..default()
        }
    }

    #[cfg(not(debug_assertions))]
    {
        // Release builds: key presses and resizes only
        LogPlugin {
            level: Level::WARN,
            filter: "orca=info,bevy=warn,wgpu=error,winit=error".to_string(),
            ..default()
        }
    }
}

/// The primary window: fixed initial size, default decorations, vsync on
pub fn primary_window(settings: &OrcaSettings) -> Window {
    Window {
        title: settings.window_title.clone(),
        resolution: WindowResolution::new(
            settings.window_size.x as f32,
            settings.window_size.y as f32,
        ),
        // Vsync caps the frame rate; do not pair it with a frame limiter
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}

/// Configure default Bevy plugins for the application
pub fn configure_default_plugins(settings: &OrcaSettings) -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(primary_window(settings)),
            // Closing goes through the frame loop, see `systems::lifecycle`
            close_when_requested: false,
            exit_condition: ExitCondition::OnPrimaryClosed,
            ..default()
        })
        .set(configure_logging())
}
