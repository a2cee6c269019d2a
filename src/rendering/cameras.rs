//! Camera setup
//!
//! A single 2D camera parked so that world `(0, 0)` is the top-left corner of
//! the initial window. Resizing the window does not move it.

use crate::core::config::OrcaSettings;
use crate::geometry::camera_center;
use bevy::prelude::*;

/// Marker for the main 2D camera
#[derive(Component, Debug, Default)]
pub struct MainCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands, settings: Res<OrcaSettings>) {
    let center = camera_center(settings.window_size);
    commands.spawn((
        Name::new("MainCamera"),
        MainCamera,
        Camera2d,
        Transform::from_translation(center.extend(0.0)),
    ));
    debug!("Camera centered at {:?}", center);
}
