//! Frame loop tests
//!
//! These drive the real Update systems in a headless `App`: no window, no
//! renderer, no font file. Events are injected directly.

use crate::core::config::{OrcaSettings, TILE_SIZE};
use crate::core::state::{loop_running, LoopState};
use crate::io::FrameInput;
use crate::rendering::{
    spawn_cursor, update_cursor, CursorGlyph, CursorHighlight, CursorPlugin, GridCursor,
};
use crate::systems::{FrameLoopPlugin, FrameLoopSet};
use crate::utils::{FontStore, FontStorePlugin};
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::{WindowCloseRequested, WindowResized};
use std::time::Duration;

const T: f32 = TILE_SIZE as f32;

fn headless_app(start: IVec2) -> App {
    let mut app = App::new();
    app.add_event::<KeyboardInput>()
        .add_event::<WindowResized>()
        .add_event::<WindowCloseRequested>()
        .insert_resource(OrcaSettings {
            frame_sleep: Duration::ZERO,
            ..default()
        })
        .add_plugins(FrameLoopPlugin)
        .add_systems(Startup, move |mut commands: Commands| {
            spawn_cursor(&mut commands, start, Handle::default());
        })
        .add_systems(
            Update,
            update_cursor
                .in_set(FrameLoopSet::Cursor)
                .run_if(loop_running),
        );
    app
}

/// The plugins used by the real app, minus the window and renderer
fn plugin_app(start: IVec2) -> App {
    let mut app = App::new();
    app.add_event::<KeyboardInput>()
        .add_event::<WindowResized>()
        .add_event::<WindowCloseRequested>()
        .init_resource::<Assets<Font>>()
        .insert_resource(OrcaSettings {
            frame_sleep: Duration::ZERO,
            cursor_start: start,
            ..default()
        })
        .insert_resource(FontStore::from_parsed(
            "TerminusTTF.ttf",
            Font {
                data: std::sync::Arc::new(Vec::new()),
            },
        ))
        .add_plugins((FontStorePlugin, FrameLoopPlugin, CursorPlugin));
    app
}

fn press(app: &mut App, key_code: KeyCode, logical_key: Key) {
    app.world_mut().send_event(KeyboardInput {
        key_code,
        logical_key,
        state: ButtonState::Pressed,
        text: None,
        repeat: false,
        window: Entity::PLACEHOLDER,
    });
}

fn glyph_translation(app: &mut App) -> Vec3 {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<CursorGlyph>>();
    query.iter(world).next().expect("cursor glyph").translation
}

fn highlight(app: &mut App) -> (Vec3, Option<Vec2>) {
    let world = app.world_mut();
    let mut query = world.query_filtered::<(&Transform, &Sprite), With<CursorHighlight>>();
    let (transform, sprite) = query.iter(world).next().expect("cursor highlight");
    (transform.translation, sprite.custom_size)
}

#[test]
fn cursor_starts_on_its_cell() {
    let mut app = headless_app(IVec2::new(8, 8));
    app.update();

    let glyph = glyph_translation(&mut app);
    assert_eq!(glyph.truncate(), Vec2::new(8.0 * T, -8.0 * T));

    let (position, size) = highlight(&mut app);
    assert_eq!(position.truncate(), Vec2::new(8.0 * T, -8.0 * T));
    assert_eq!(size, Some(Vec2::splat(T)));
    assert!(glyph.z > position.z, "glyph must draw above the highlight");
}

#[test]
fn arrow_key_moves_cursor_one_cell() {
    let mut app = headless_app(IVec2::new(8, 8));
    app.update();

    press(&mut app, KeyCode::ArrowRight, Key::ArrowRight);
    press(&mut app, KeyCode::ArrowDown, Key::ArrowDown);
    app.update();
    assert_eq!(
        glyph_translation(&mut app).truncate(),
        Vec2::new(9.0 * T, -9.0 * T)
    );

    // Input does not carry over to the next frame
    app.update();
    assert_eq!(
        glyph_translation(&mut app).truncate(),
        Vec2::new(9.0 * T, -9.0 * T)
    );
    assert_eq!(*app.world().resource::<FrameInput>(), FrameInput::default());
}

#[test]
fn shrinking_flips_highlight_without_moving_glyph() {
    let mut app = headless_app(IVec2::new(8, 8));
    app.update();

    press(&mut app, KeyCode::KeyA, Key::Character("a".into()));
    app.update();

    let world = app.world_mut();
    let rect = world
        .query::<&GridCursor>()
        .iter(world)
        .next()
        .expect("cursor")
        .rect();
    assert_eq!(rect.size(), IVec2::new(-1, 1));

    assert_eq!(
        glyph_translation(&mut app).truncate(),
        Vec2::new(8.0 * T, -8.0 * T)
    );
    let (position, size) = highlight(&mut app);
    assert_eq!(position.truncate(), Vec2::new(7.0 * T, -8.0 * T));
    assert_eq!(size, Some(Vec2::splat(T)));
}

#[test]
fn escape_closes_within_one_frame_and_skips_pending_moves() {
    let mut app = headless_app(IVec2::new(8, 8));
    app.update();

    press(&mut app, KeyCode::ArrowRight, Key::ArrowRight);
    press(&mut app, KeyCode::Escape, Key::Escape);
    press(&mut app, KeyCode::KeyD, Key::Character("d".into()));
    app.update();

    assert_eq!(*app.world().resource::<LoopState>(), LoopState::Closed);
    assert_eq!(app.should_exit(), Some(AppExit::Success));
    assert_eq!(
        glyph_translation(&mut app).truncate(),
        Vec2::new(8.0 * T, -8.0 * T)
    );
}

#[test]
fn window_close_request_closes_loop() {
    let mut app = headless_app(IVec2::new(0, 0));
    app.update();

    app.world_mut().send_event(WindowCloseRequested {
        window: Entity::PLACEHOLDER,
    });
    app.update();

    assert_eq!(*app.world().resource::<LoopState>(), LoopState::Closed);
    assert_eq!(app.should_exit(), Some(AppExit::Success));
}

#[test]
fn resize_keeps_running_and_leaves_cursor_alone() {
    let mut app = headless_app(IVec2::new(3, 4));
    app.update();

    app.world_mut().send_event(WindowResized {
        window: Entity::PLACEHOLDER,
        width: 1024.0,
        height: 768.0,
    });
    app.update();

    assert_eq!(*app.world().resource::<LoopState>(), LoopState::Running);
    assert_eq!(app.should_exit(), None);
    assert_eq!(
        glyph_translation(&mut app).truncate(),
        Vec2::new(3.0 * T, -4.0 * T)
    );
}

#[test]
fn cursor_plugin_draws_with_registered_font_and_follows_input() {
    let mut app = plugin_app(IVec2::new(2, 5));
    app.update();

    let handle = app.world().resource::<FontStore>().handle();
    assert!(app.world().resource::<Assets<Font>>().get(&handle).is_some());
    {
        let world = app.world_mut();
        let mut query = world.query_filtered::<&TextFont, With<CursorGlyph>>();
        let text_font = query.iter(world).next().expect("cursor glyph");
        assert_eq!(text_font.font, handle);
    }

    press(&mut app, KeyCode::ArrowLeft, Key::ArrowLeft);
    press(&mut app, KeyCode::KeyS, Key::Character("s".into()));
    app.update();

    assert_eq!(
        glyph_translation(&mut app).truncate(),
        Vec2::new(1.0 * T, -5.0 * T)
    );
    let (_, size) = highlight(&mut app);
    assert_eq!(size, Some(Vec2::new(T, 2.0 * T)));
}
