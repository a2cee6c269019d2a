//! Application builder and initialization
//!
//! This module provides the main app creation function

use super::plugins::{CorePluginGroup, RenderingPluginGroup};
use crate::core::config::{CliArgs, OrcaSettings, BACKGROUND_COLOR};
use crate::systems::configure_default_plugins;
use crate::utils::FontStore;
use anyhow::Result;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Orca application.
///
/// The font is loaded before the Bevy app exists, so a missing or invalid
/// font file returns an error without ever opening a window.
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let settings = cli_args.to_settings();
    let font_store = FontStore::load_resources(&settings.font_path)?;

    let mut app = App::new();
    configure_window_plugins(&mut app, &settings);
    configure_resources(&mut app, settings, font_store);
    add_plugin_groups(&mut app);
    Ok(app)
}

/// Sets up application resources and configuration
fn configure_resources(app: &mut App, settings: OrcaSettings, font_store: FontStore) {
    app.insert_resource(settings)
        .insert_resource(font_store)
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        // Redraw every frame, even without input; pacing is ours
        .insert_resource(WinitSettings::game());
}

/// Configure window and default plugins
fn configure_window_plugins(app: &mut App, settings: &OrcaSettings) {
    app.add_plugins(configure_default_plugins(settings));
}

/// Add all plugin groups to the application
fn add_plugin_groups(app: &mut App) {
    debug!("Adding plugin groups...");
    app.add_plugins((CorePluginGroup, RenderingPluginGroup));
    debug!("All plugin groups added successfully");
}
