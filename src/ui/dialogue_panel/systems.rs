// src/ui/dialogue_panel/systems.rs
//
// Systems keeping the dialogue panel in sync with the active conversation.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::dialogue::engine::ActiveConversation;
use crate::dialogue::events::ChooseOption;

use super::components::{ChoiceButton, DialoguePanel};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.08, 0.08, 0.1, 0.95);
const BORDER_COLOR: Color = Color::srgb(1.0, 0.0, 1.0);
const SPEAKER_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);
const TEXT_COLOR: Color = Color::WHITE;
const BUTTON_COLOR: Color = Color::srgba(0.18, 0.18, 0.22, 0.95);
const BUTTON_BORDER_COLOR: Color = Color::srgb(0.4, 0.4, 0.45);

/// Rebuilds the panel whenever the conversation opens, advances, or closes.
pub fn sync_dialogue_panel(
    mut commands: Commands,
    conversation: Res<ActiveConversation>,
    panels: Query<(Entity, &DialoguePanel)>,
) {
    let Some(node) = conversation.current_node() else {
        for (panel, _) in panels.iter() {
            commands.entity(panel).despawn();
        }
        return;
    };

    let revision = conversation.revision();
    if let Ok((panel, state)) = panels.single() {
        if state.revision == revision {
            return;
        }
        commands.entity(panel).despawn();
    }

    let speaker = node.speaker.clone();
    let text = node.text.clone();
    let labels: Vec<String> = node
        .choices
        .iter()
        .map(|choice| choice.label.clone())
        .collect();

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(20.0),
                left: Val::Percent(10.0),
                width: Val::Percent(80.0),
                padding: UiRect::all(Val::Px(14.0)),
                border: UiRect::all(Val::Px(2.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            BorderColor::from(BORDER_COLOR),
            DialoguePanel { revision },
            Name::new("Dialogue Panel"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(speaker),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(SPEAKER_COLOR),
            ));
            parent.spawn((
                Text::new(text),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));

            for (index, label) in labels.into_iter().enumerate() {
                parent
                    .spawn((
                        Node {
                            width: Val::Percent(100.0),
                            padding: UiRect::all(Val::Px(8.0)),
                            border: UiRect::all(Val::Px(1.5)),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        Button,
                        Interaction::None,
                        BackgroundColor(BUTTON_COLOR),
                        BorderColor::from(BUTTON_BORDER_COLOR),
                        ChoiceButton { index },
                        Name::new(format!("Choice Button {}", index)),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(label),
                            TextFont {
                                font_size: 15.0,
                                ..default()
                            },
                            TextColor(TEXT_COLOR),
                        ));
                    });
            }
        });
}

/// Forwards choice button presses to the dialogue engine.
#[allow(clippy::type_complexity)]
pub fn handle_choice_buttons(
    mut buttons: Query<(&Interaction, &ChoiceButton), (Changed<Interaction>, With<Button>)>,
    mut choices: MessageWriter<ChooseOption>,
) {
    for (interaction, button) in buttons.iter_mut() {
        if *interaction == Interaction::Pressed {
            choices.write(ChooseOption {
                index: button.index,
            });
        }
    }
}
