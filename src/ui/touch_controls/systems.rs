// src/ui/touch_controls/systems.rs
//
// Systems spawning the touch cluster alongside the avatar and turning
// presses into movement commands.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::events::{AttemptStarted, PlaythroughReset};
use crate::player::events::MoveCommand;
use crate::player::movement::MoveDirection;

use super::components::{TouchButton, TouchControlsRoot};

const BUTTON_COLOR: Color = Color::srgba(0.2, 0.2, 0.25, 0.7);
const BUTTON_BORDER_COLOR: Color = Color::srgb(0.4, 0.4, 0.45);
const ARROW_COLOR: Color = Color::WHITE;
const BUTTON_SIZE: f32 = 44.0;

const CLUSTER: [(MoveDirection, &str, f32, f32); 4] = [
    (MoveDirection::Up, "▲", 70.0, 110.0),
    (MoveDirection::Down, "▼", 70.0, 20.0),
    (MoveDirection::Left, "◀", 20.0, 65.0),
    (MoveDirection::Right, "▶", 120.0, 65.0),
];

/// Spawns the cluster when an attempt starts; it stays up until a restart.
pub fn spawn_touch_controls(
    mut attempts: MessageReader<AttemptStarted>,
    mut commands: Commands,
    existing: Query<Entity, With<TouchControlsRoot>>,
) {
    for _ in attempts.read() {
        if !existing.is_empty() {
            continue;
        }
        commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(10.0),
                    bottom: Val::Px(10.0),
                    width: Val::Px(180.0),
                    height: Val::Px(170.0),
                    ..default()
                },
                TouchControlsRoot,
                Name::new("Touch Controls"),
            ))
            .with_children(|parent| {
                for (direction, arrow, left, bottom) in CLUSTER {
                    parent
                        .spawn((
                            Node {
                                position_type: PositionType::Absolute,
                                left: Val::Px(left),
                                bottom: Val::Px(bottom),
                                width: Val::Px(BUTTON_SIZE),
                                height: Val::Px(BUTTON_SIZE),
                                border: UiRect::all(Val::Px(1.5)),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                ..default()
                            },
                            Button,
                            Interaction::None,
                            BackgroundColor(BUTTON_COLOR),
                            BorderColor::from(BUTTON_BORDER_COLOR),
                            TouchButton { direction },
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new(arrow),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(ARROW_COLOR),
                            ));
                        });
                }
            });
    }
}

pub fn despawn_touch_controls_on_reset(
    mut resets: MessageReader<PlaythroughReset>,
    mut commands: Commands,
    roots: Query<Entity, With<TouchControlsRoot>>,
) {
    for _ in resets.read() {
        for root in roots.iter() {
            commands.entity(root).despawn();
        }
    }
}

/// One movement step per press. Only active during exploration, so taps
/// during dialogue or game over go nowhere.
#[allow(clippy::type_complexity)]
pub fn handle_touch_buttons(
    mut buttons: Query<(&Interaction, &TouchButton), (Changed<Interaction>, With<Button>)>,
    mut moves: MessageWriter<MoveCommand>,
) {
    for (interaction, button) in buttons.iter_mut() {
        if *interaction == Interaction::Pressed {
            moves.write(MoveCommand {
                direction: button.direction,
            });
        }
    }
}
