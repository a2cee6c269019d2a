//! Plugin group definitions for the Orca application

use bevy::app::{PluginGroup, PluginGroupBuilder};

/// Plugin group for the frame loop and the resources it depends on
#[derive(Default)]
pub struct CorePluginGroup;

impl PluginGroup for CorePluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::systems::FrameLoopPlugin;
        use crate::utils::FontStorePlugin;

        PluginGroupBuilder::start::<Self>()
            .add(FontStorePlugin) // Registers the font before anything spawns
            .add(FrameLoopPlugin)
    }
}

/// Plugin group for rendering functionality
#[derive(Default)]
pub struct RenderingPluginGroup;

impl PluginGroup for RenderingPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::rendering::{CameraPlugin, CursorPlugin};

        PluginGroupBuilder::start::<Self>()
            .add(CameraPlugin)
            .add(CursorPlugin)
    }
}
