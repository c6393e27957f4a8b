// src/ui/screens/systems.rs
//
// Systems spawning and driving the menu, character-select, and game-over
// screens. Each screen lives only while its phase is active.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::events::FlowCommand;
use crate::core::{GameOverBanner, GameSession};
use crate::roster::CharacterRoster;

use super::components::{
    BackButton, CharacterButton, ConfirmButton, DescriptionText, GameOverScreen, MenuScreen,
    RestartButton, SelectScreen, SelectionState, StartButton,
};

// Visual constants
const SCREEN_COLOR: Color = Color::srgba(0.02, 0.02, 0.05, 0.96);
const TITLE_COLOR: Color = Color::srgb(1.0, 0.0, 1.0);
const TEXT_COLOR: Color = Color::WHITE;
const BUTTON_COLOR: Color = Color::srgba(0.18, 0.18, 0.22, 0.95);
const BUTTON_BORDER_COLOR: Color = Color::srgb(0.4, 0.4, 0.45);
const SELECTED_BORDER_COLOR: Color = Color::srgb(1.0, 0.0, 1.0);
const CONFIRM_READY_COLOR: Color = Color::srgb(0.1, 0.5, 0.2);
const CONFIRM_DISABLED_COLOR: Color = Color::srgba(0.18, 0.18, 0.22, 0.5);
const COMPLETED_MARK_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);

fn screen_root() -> (Node, BackgroundColor) {
    (
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            row_gap: Val::Px(18.0),
            ..default()
        },
        BackgroundColor(SCREEN_COLOR),
    )
}

fn button_node() -> (Node, BackgroundColor, BorderColor, Button, Interaction) {
    (
        Node {
            padding: UiRect::axes(Val::Px(24.0), Val::Px(10.0)),
            border: UiRect::all(Val::Px(1.5)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(BUTTON_COLOR),
        BorderColor::from(BUTTON_BORDER_COLOR),
        Button,
        Interaction::None,
    )
}

fn button_label(text: impl Into<String>) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(TEXT_COLOR),
    )
}

// --- Menu ---

pub fn spawn_menu(mut commands: Commands) {
    commands
        .spawn((screen_root(), MenuScreen, Name::new("Menu Screen")))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GET INTO ROSE"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(TITLE_COLOR),
            ));
            parent.spawn((
                Text::new("Seven hopefuls. One doorman. Two must get in."),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            parent
                .spawn((button_node(), StartButton, Name::new("Start Button")))
                .with_children(|button| {
                    button.spawn(button_label("Start"));
                });
        });
}

pub fn despawn_menu(mut commands: Commands, screens: Query<Entity, With<MenuScreen>>) {
    for screen in screens.iter() {
        commands.entity(screen).despawn();
    }
}

#[allow(clippy::type_complexity)]
pub fn handle_start_button(
    mut buttons: Query<&Interaction, (Changed<Interaction>, With<StartButton>)>,
    mut flow: MessageWriter<FlowCommand>,
) {
    for interaction in buttons.iter_mut() {
        if *interaction == Interaction::Pressed {
            flow.write(FlowCommand::StartGame);
        }
    }
}

// --- Character select ---

pub fn spawn_select_screen(
    mut commands: Commands,
    roster: Res<CharacterRoster>,
    session: Res<GameSession>,
    mut selection: ResMut<SelectionState>,
) {
    selection.picked = None;

    commands
        .spawn((screen_root(), SelectScreen, Name::new("Select Screen")))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Who's trying to get in?"),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(TITLE_COLOR),
            ));

            // Character grid
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    justify_content: JustifyContent::Center,
                    column_gap: Val::Px(10.0),
                    row_gap: Val::Px(10.0),
                    max_width: Val::Px(620.0),
                    ..default()
                })
                .with_children(|grid| {
                    for profile in roster.profiles() {
                        let label = if session.is_completed(profile.id) {
                            format!("{} ✓", profile.name)
                        } else {
                            profile.name.clone()
                        };
                        let label_color = if session.is_completed(profile.id) {
                            COMPLETED_MARK_COLOR
                        } else {
                            TEXT_COLOR
                        };
                        grid.spawn((
                            button_node(),
                            CharacterButton { id: profile.id },
                            Name::new(format!("Character Button ({})", profile.id)),
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new(label),
                                TextFont {
                                    font_size: 16.0,
                                    ..default()
                                },
                                TextColor(label_color),
                            ));
                        });
                    }
                });

            parent.spawn((
                Text::new("Pick someone to read about them."),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                DescriptionText,
            ));

            // Back / confirm row
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(16.0),
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((button_node(), BackButton, Name::new("Back Button")))
                        .with_children(|button| {
                            button.spawn(button_label("Back"));
                        });
                    row.spawn((button_node(), ConfirmButton, Name::new("Confirm Button")))
                        .with_children(|button| {
                            button.spawn(button_label("Head to the club"));
                        });
                });
        });
}

pub fn despawn_select_screen(mut commands: Commands, screens: Query<Entity, With<SelectScreen>>) {
    for screen in screens.iter() {
        commands.entity(screen).despawn();
    }
}

/// Highlights the picked character and shows their description.
#[allow(clippy::type_complexity)]
pub fn handle_character_buttons(
    mut buttons: Query<
        (&Interaction, &CharacterButton),
        (Changed<Interaction>, With<Button>),
    >,
    roster: Res<CharacterRoster>,
    mut selection: ResMut<SelectionState>,
    mut descriptions: Query<&mut Text, With<DescriptionText>>,
) {
    for (interaction, button) in buttons.iter_mut() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        selection.picked = Some(button.id);
        if let Ok(mut text) = descriptions.single_mut() {
            *text = Text::new(roster.profile(button.id).description.clone());
        }
    }
}

/// Keeps the magenta border on the picked character's button.
pub fn update_character_highlights(
    selection: Res<SelectionState>,
    mut buttons: Query<(&CharacterButton, &mut BorderColor)>,
) {
    for (button, mut border) in buttons.iter_mut() {
        let color = if selection.picked == Some(button.id) {
            SELECTED_BORDER_COLOR
        } else {
            BUTTON_BORDER_COLOR
        };
        *border = BorderColor::from(color);
    }
}

/// Greys the confirm button out until a character is picked.
pub fn update_confirm_state(
    selection: Res<SelectionState>,
    mut buttons: Query<&mut BackgroundColor, With<ConfirmButton>>,
) {
    for mut background in buttons.iter_mut() {
        background.0 = if selection.picked.is_some() {
            CONFIRM_READY_COLOR
        } else {
            CONFIRM_DISABLED_COLOR
        };
    }
}

/// Confirms the pick. With nothing picked the button is inert, so a missing
/// selection never reaches the state machine.
#[allow(clippy::type_complexity)]
pub fn handle_confirm_button(
    mut buttons: Query<&Interaction, (Changed<Interaction>, With<ConfirmButton>)>,
    selection: Res<SelectionState>,
    mut flow: MessageWriter<FlowCommand>,
) {
    for interaction in buttons.iter_mut() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(picked) = selection.picked else {
            continue;
        };
        flow.write(FlowCommand::ConfirmCharacter(picked));
    }
}

#[allow(clippy::type_complexity)]
pub fn handle_back_button(
    mut buttons: Query<&Interaction, (Changed<Interaction>, With<BackButton>)>,
    mut flow: MessageWriter<FlowCommand>,
) {
    for interaction in buttons.iter_mut() {
        if *interaction == Interaction::Pressed {
            flow.write(FlowCommand::BackToMenu);
        }
    }
}

// --- Game over ---

pub fn spawn_game_over(mut commands: Commands, banner: Res<GameOverBanner>) {
    let restart_label = if banner.night_won {
        "Start Over"
    } else {
        "Try to get in with another character?"
    };

    commands
        .spawn((screen_root(), GameOverScreen, Name::new("Game Over Screen")))
        .with_children(|parent| {
            parent.spawn((
                Text::new(banner.message.clone()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            parent
                .spawn((button_node(), RestartButton, Name::new("Restart Button")))
                .with_children(|button| {
                    button.spawn(button_label(restart_label));
                });
        });
}

pub fn despawn_game_over(mut commands: Commands, screens: Query<Entity, With<GameOverScreen>>) {
    for screen in screens.iter() {
        commands.entity(screen).despawn();
    }
}

#[allow(clippy::type_complexity)]
pub fn handle_restart_button(
    mut buttons: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
    mut flow: MessageWriter<FlowCommand>,
) {
    for interaction in buttons.iter_mut() {
        if *interaction == Interaction::Pressed {
            flow.write(FlowCommand::Restart);
        }
    }
}
