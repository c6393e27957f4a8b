//! Systems spawning and animating the club front.
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::events::{AttemptStarted, PlaythroughReset};
use crate::player::components::PlayerState;
use crate::player::events::InteractCommand;
use crate::roster::CharacterRoster;

use super::components::{
    Doorman, HitBox, NeonSign, NpcId, PlayerAvatar, SceneNpc, SceneRoot, WalkCycle,
};
use super::layout::{SceneLayout, SCENE_HEIGHT, SCENE_WIDTH};

// Visual constants
const BACKDROP_COLOR: Color = Color::srgb_u8(51, 51, 51);
const ENTRANCE_COLOR: Color = Color::srgb_u8(34, 34, 34);
const NEON_COLOR: Color = Color::srgb_u8(255, 0, 255);
const DOORMAN_COLOR: Color = Color::srgb_u8(51, 51, 51);
const FALLBACK_SHIRT_COLOR: Color = Color::srgb_u8(58, 110, 165);
const FALLBACK_HAIR_COLOR: Color = Color::srgb_u8(90, 56, 37);

/// Base sprite footprint before per-character scaling.
const BODY_SIZE: Vec2 = Vec2::new(80.0, 150.0);
const HAIR_SIZE: Vec2 = Vec2::new(40.0, 20.0);
const DOORMAN_SCALE: f32 = 1.2;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub fn spawn_scene(mut commands: Commands, layout: Res<SceneLayout>) {
    spawn_scene_entities(&mut commands, &layout);
}

/// Rebuilds the static scene after a fully completed night.
pub fn rebuild_scene_on_reset(
    mut resets: MessageReader<PlaythroughReset>,
    mut commands: Commands,
    layout: Res<SceneLayout>,
    roots: Query<Entity, With<SceneRoot>>,
) {
    for reset in resets.read() {
        if !reset.rebuild_scene {
            continue;
        }
        info!("Rebuilding the club front");
        for root in roots.iter() {
            commands.entity(root).despawn();
        }
        spawn_scene_entities(&mut commands, &layout);
    }
}

fn spawn_scene_entities(commands: &mut Commands, layout: &SceneLayout) {
    commands
        .spawn((
            SceneRoot,
            Transform::default(),
            Visibility::default(),
            Name::new("Club Front"),
        ))
        .with_children(|parent| {
            // Street backdrop
            parent.spawn((
                Sprite {
                    color: BACKDROP_COLOR,
                    custom_size: Some(Vec2::new(SCENE_WIDTH, SCENE_HEIGHT)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 0.0),
            ));

            // Entrance block with a neon trim behind it
            let entrance_center = layout.to_world(Vec2::new(575.0, 275.0));
            parent.spawn((
                Sprite {
                    color: NEON_COLOR,
                    custom_size: Some(Vec2::new(160.0, 258.0)),
                    ..default()
                },
                Transform::from_xyz(entrance_center.x, entrance_center.y, 0.2),
            ));
            parent.spawn((
                Sprite {
                    color: ENTRANCE_COLOR,
                    custom_size: Some(Vec2::new(150.0, 250.0)),
                    ..default()
                },
                Transform::from_xyz(entrance_center.x, entrance_center.y, 0.3),
            ));

            // Flickering club sign
            let sign = layout.to_world(Vec2::new(575.0, 370.0));
            parent.spawn((
                Text2d::new("ROSE"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(NEON_COLOR),
                NeonSign::default(),
                Transform::from_xyz(sign.x, sign.y, 0.4),
            ));

            // The doorman
            let doorman_size = BODY_SIZE * DOORMAN_SCALE;
            parent.spawn((
                Sprite {
                    color: DOORMAN_COLOR,
                    custom_size: Some(doorman_size),
                    ..default()
                },
                Transform::from_translation(anchored(layout, layout.doorman, doorman_size, 1.0)),
                Doorman,
                HitBox {
                    half_extents: doorman_size / 2.0,
                },
                Name::new("Doorman"),
            ));

            // Everyone else waiting outside
            for placement in &layout.npcs {
                let (color, scale) = npc_look(placement.id);
                let size = BODY_SIZE * scale;
                parent.spawn((
                    Sprite {
                        color,
                        custom_size: Some(size),
                        ..default()
                    },
                    Transform::from_translation(anchored(layout, placement.position, size, 1.0)),
                    SceneNpc { id: placement.id },
                    HitBox {
                        half_extents: size / 2.0,
                    },
                    Name::new(format!("NPC ({})", placement.id)),
                ));
            }
        });
}

fn npc_look(id: NpcId) -> (Color, f32) {
    match id {
        NpcId::BlondeGirl => (Color::srgb_u8(155, 89, 182), 0.9),
        NpcId::ConspiracyNut => (Color::srgb_u8(127, 140, 141), 1.0),
        NpcId::FailedDj => (Color::srgb_u8(44, 62, 80), 1.0),
        NpcId::Regular => (Color::srgb_u8(41, 128, 185), 1.0),
    }
}

/// Positions a sprite so its bottom-left corner sits on the scene anchor,
/// matching how the original stage placed its characters.
fn anchored(layout: &SceneLayout, scene_pos: Vec2, size: Vec2, z: f32) -> Vec3 {
    let world = layout.to_world(scene_pos);
    Vec3::new(world.x + size.x / 2.0, world.y + size.y / 2.0, z)
}

/// Spawns a fresh avatar for the confirmed character.
pub fn spawn_player_avatar(
    mut attempts: MessageReader<AttemptStarted>,
    mut commands: Commands,
    roster: Res<CharacterRoster>,
    layout: Res<SceneLayout>,
    existing: Query<Entity, With<PlayerAvatar>>,
) {
    for attempt in attempts.read() {
        for avatar in existing.iter() {
            commands.entity(avatar).despawn();
        }

        let profile = roster.profile(attempt.character);
        let size = BODY_SIZE * profile.scale;
        let shirt = parse_hex_color(&profile.appearance.shirt).unwrap_or(FALLBACK_SHIRT_COLOR);
        let hair = parse_hex_color(&profile.appearance.hair).unwrap_or(FALLBACK_HAIR_COLOR);
        let hair_size = HAIR_SIZE * profile.scale;
        commands
            .spawn((
                Sprite {
                    color: shirt,
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_translation(anchored(&layout, layout.spawn, size, 2.0)),
                PlayerAvatar,
                WalkCycle::default(),
                Name::new(format!("Player ({})", profile.name)),
            ))
            .with_children(|body| {
                body.spawn((
                    Sprite {
                        color: hair,
                        custom_size: Some(hair_size),
                        ..default()
                    },
                    Transform::from_xyz(0.0, (size.y - hair_size.y) / 2.0, 0.1),
                ));
            });
    }
}

/// Removes the avatar on any restart; the scene root is handled separately.
pub fn despawn_avatar_on_reset(
    mut resets: MessageReader<PlaythroughReset>,
    mut commands: Commands,
    avatars: Query<Entity, With<PlayerAvatar>>,
) {
    for _ in resets.read() {
        for avatar in avatars.iter() {
            commands.entity(avatar).despawn();
        }
    }
}

/// Mirrors the player resource onto the avatar sprite.
pub fn sync_player_avatar(
    player: Res<PlayerState>,
    layout: Res<SceneLayout>,
    mut avatars: Query<(&mut Transform, &mut Sprite), With<PlayerAvatar>>,
) {
    let Ok((mut transform, mut sprite)) = avatars.single_mut() else {
        return;
    };
    let size = sprite.custom_size.unwrap_or(BODY_SIZE);
    let target = anchored(&layout, player.position, size, transform.translation.z);
    transform.translation.x = target.x;
    transform.translation.y = target.y;
    sprite.flip_x = player.facing_left;
}

/// Leans the avatar side to side while walking, rests it when idle.
pub fn animate_walk_cycle(
    time: Res<Time>,
    player: Res<PlayerState>,
    mut avatars: Query<(&mut WalkCycle, &mut Transform), With<PlayerAvatar>>,
) {
    for (mut cycle, mut transform) in avatars.iter_mut() {
        if !player.walking {
            transform.rotation = Quat::IDENTITY;
            continue;
        }
        cycle.timer.tick(time.delta());
        if cycle.timer.just_finished() {
            cycle.lean_left = !cycle.lean_left;
        }
        let lean = if cycle.lean_left { 0.06 } else { -0.06 };
        transform.rotation = Quat::from_rotation_z(lean);
    }
}

/// Flickers the neon sign between full and half brightness.
pub fn flicker_neon_sign(time: Res<Time>, mut signs: Query<(&mut NeonSign, &mut TextColor)>) {
    for (mut sign, mut color) in signs.iter_mut() {
        sign.timer.tick(time.delta());
        if sign.timer.just_finished() {
            sign.dimmed = !sign.dimmed;
            let alpha = if sign.dimmed { 0.5 } else { 1.0 };
            color.0 = NEON_COLOR.with_alpha(alpha);
        }
    }
}

/// Converts left clicks on the doorman or an NPC into interaction commands.
/// The doorman takes priority when hit boxes overlap.
pub fn handle_scene_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    doormen: Query<(&GlobalTransform, &HitBox), With<Doorman>>,
    npcs: Query<(&GlobalTransform, &HitBox, &SceneNpc)>,
    mut interactions: MessageWriter<InteractCommand>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    for (transform, hitbox) in doormen.iter() {
        if hitbox_contains(transform, hitbox, world) {
            interactions.write(InteractCommand::Doorman);
            return;
        }
    }
    for (transform, hitbox, npc) in npcs.iter() {
        if hitbox_contains(transform, hitbox, world) {
            interactions.write(InteractCommand::Npc(npc.id));
            return;
        }
    }
}

fn hitbox_contains(transform: &GlobalTransform, hitbox: &HitBox, point: Vec2) -> bool {
    let center = transform.translation();
    (point.x - center.x).abs() <= hitbox.half_extents.x
        && (point.y - center.y).abs() <= hitbox.half_extents.y
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::srgb_u8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex_colors() {
        assert_eq!(
            parse_hex_color("#ff00ff"),
            Some(Color::srgb_u8(255, 0, 255))
        );
        assert_eq!(parse_hex_color("#000000"), Some(Color::srgb_u8(0, 0, 0)));
    }

    #[test]
    fn rejects_malformed_hex_colors() {
        assert_eq!(parse_hex_color("ff00ff"), None);
        assert_eq!(parse_hex_color("#f0f"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn anchoring_offsets_by_half_the_sprite() {
        let layout = SceneLayout::fallback();
        let pos = anchored(&layout, Vec2::new(400.0, 250.0), Vec2::new(80.0, 150.0), 1.0);
        assert_eq!(pos, Vec3::new(40.0, 75.0, 1.0));
    }
}
