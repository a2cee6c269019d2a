//! The grid cursor: an `@` glyph over a highlight rectangle
//!
//! The cursor entity owns its [`GridRect`]; the glyph and highlight are child
//! entities whose transforms are derived from that rectangle on every update.
//! The highlight sits below the glyph so the glyph is always painted on top.

use crate::core::config::{OrcaSettings, CURSOR_GLYPH, GLYPH_COLOR, HIGHLIGHT_COLOR, TILE_SIZE};
use crate::core::state::loop_running;
use crate::geometry::{pixel_to_world, GridRect};
use crate::io::{FrameDelta, FrameInput};
use crate::systems::FrameLoopSet;
use crate::utils::FontStore;
use bevy::prelude::*;
use bevy::sprite::Anchor;

const HIGHLIGHT_Z: f32 = 0.0;
const GLYPH_Z: f32 = 1.0;

/// The movable, resizable selection indicator
#[derive(Component, Debug)]
pub struct GridCursor {
    rect: GridRect,
    glyph: Entity,
    highlight: Entity,
}

/// Marker for the cursor's text glyph
#[derive(Component, Debug, Default)]
pub struct CursorGlyph;

/// Marker for the rectangle painted behind the glyph
#[derive(Component, Debug, Default)]
pub struct CursorHighlight;

/// Pixel-space placement derived from a cursor's rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorLayout {
    /// Top-left of the glyph, at the rectangle's anchor cell
    pub glyph_position: IVec2,
    /// Top-left of the normalized bounds
    pub highlight_position: IVec2,
    pub highlight_size: IVec2,
}

impl CursorLayout {
    pub fn from_rect(rect: &GridRect) -> Self {
        Self {
            glyph_position: rect.anchor() * TILE_SIZE,
            highlight_position: rect.lower_bounds(),
            highlight_size: rect.pixel_size(),
        }
    }
}

impl GridCursor {
    pub fn rect(&self) -> GridRect {
        self.rect
    }

    pub fn layout(&self) -> CursorLayout {
        CursorLayout::from_rect(&self.rect)
    }

    /// Apply one frame's delta: move, then resize, then re-derive the layout
    pub fn update(&mut self, delta: FrameDelta) -> CursorLayout {
        self.rect.translate(delta.off_x, delta.off_y);
        self.rect.resize(delta.off_w, delta.off_h);
        self.layout()
    }
}

impl Drop for GridCursor {
    fn drop(&mut self) {
        debug!("Destroying cursor over {}", self.rect);
    }
}

/// Spawn a single-cell cursor at `cell`, drawing its glyph with `font`
pub fn spawn_cursor(commands: &mut Commands, cell: IVec2, font: Handle<Font>) -> Entity {
    let rect = GridRect::cell(cell.x, cell.y);
    let layout = CursorLayout::from_rect(&rect);

    let highlight = commands
        .spawn((
            CursorHighlight,
            Sprite {
                color: HIGHLIGHT_COLOR,
                custom_size: Some(layout.highlight_size.as_vec2()),
                anchor: Anchor::TopLeft,
                ..default()
            },
            Transform::from_translation(
                pixel_to_world(layout.highlight_position).extend(HIGHLIGHT_Z),
            ),
        ))
        .id();

    let glyph = commands
        .spawn((
            CursorGlyph,
            Text2d::new(CURSOR_GLYPH),
            TextFont {
                font,
                font_size: TILE_SIZE as f32,
                ..default()
            },
            TextColor(GLYPH_COLOR),
            Anchor::TopLeft,
            Transform::from_translation(pixel_to_world(layout.glyph_position).extend(GLYPH_Z)),
        ))
        .id();

    debug!("Spawning cursor over {}", rect);
    commands
        .spawn((
            Name::new("GridCursor"),
            GridCursor {
                rect,
                glyph,
                highlight,
            },
            Transform::default(),
            Visibility::default(),
        ))
        .add_children(&[highlight, glyph])
        .id()
}

/// Apply this frame's input to every cursor and re-place its glyph and highlight
#[allow(clippy::type_complexity)]
pub fn update_cursor(
    frame_input: Res<FrameInput>,
    mut cursors: Query<&mut GridCursor>,
    mut glyphs: Query<&mut Transform, (With<CursorGlyph>, Without<CursorHighlight>)>,
    mut highlights: Query<
        (&mut Transform, &mut Sprite),
        (With<CursorHighlight>, Without<CursorGlyph>),
    >,
) {
    for mut cursor in &mut cursors {
        let layout = cursor.update(frame_input.delta);

        if let Ok(mut transform) = glyphs.get_mut(cursor.glyph) {
            transform.translation = pixel_to_world(layout.glyph_position).extend(GLYPH_Z);
        }
        if let Ok((mut transform, mut sprite)) = highlights.get_mut(cursor.highlight) {
            transform.translation = pixel_to_world(layout.highlight_position).extend(HIGHLIGHT_Z);
            sprite.custom_size = Some(layout.highlight_size.as_vec2());
        }

        if !frame_input.delta.is_zero() {
            debug!("Cursor now over {}", cursor.rect);
        }
    }
}

/// Spawns the cursor at startup and keeps it in sync with input
pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_cursor)
            .add_systems(
                Update,
                update_cursor
                    .in_set(FrameLoopSet::Cursor)
                    .run_if(loop_running),
            );
    }
}

fn setup_cursor(
    mut commands: Commands,
    font_store: Res<FontStore>,
    settings: Res<OrcaSettings>,
) {
    spawn_cursor(&mut commands, settings.cursor_start, font_store.handle());
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i32 = TILE_SIZE;

    fn layout_after(cell: IVec2, deltas: &[FrameDelta]) -> CursorLayout {
        let mut cursor = GridCursor {
            rect: GridRect::cell(cell.x, cell.y),
            glyph: Entity::PLACEHOLDER,
            highlight: Entity::PLACEHOLDER,
        };
        let mut layout = cursor.layout();
        for delta in deltas {
            layout = cursor.update(*delta);
        }
        layout
    }

    #[test]
    fn new_cursor_puts_glyph_on_its_cell() {
        let layout = layout_after(IVec2::new(8, 8), &[]);
        assert_eq!(layout.glyph_position, IVec2::new(8 * T, 8 * T));
        assert_eq!(layout.highlight_position, IVec2::new(8 * T, 8 * T));
        assert_eq!(layout.highlight_size, IVec2::splat(T));
    }

    #[test]
    fn shrinking_past_zero_extends_highlight_left_of_glyph() {
        let layout = layout_after(IVec2::new(8, 8), &[FrameDelta::new(0, 0, -1, 0)]);
        assert_eq!(layout.glyph_position, IVec2::new(8 * T, 8 * T));
        assert_eq!(layout.highlight_position, IVec2::new(7 * T, 8 * T));
        assert_eq!(layout.highlight_size, IVec2::new(T, T));
    }

    #[test]
    fn glyph_follows_moves_after_resizes() {
        let layout = layout_after(
            IVec2::new(8, 8),
            &[
                FrameDelta::new(0, 0, 1, 1),
                FrameDelta::new(1, 0, 0, 0),
                FrameDelta::new(0, -1, 0, -1),
            ],
        );
        assert_eq!(layout.glyph_position, IVec2::new(9 * T, 7 * T));
        assert_eq!(layout.highlight_position, IVec2::new(9 * T, 7 * T));
        assert_eq!(layout.highlight_size, IVec2::new(2 * T, T));
    }
}
