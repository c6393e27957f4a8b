// src/ui/screens/components.rs
//
// Components and resources for the full-screen surfaces.

use bevy::prelude::*;

use crate::roster::CharacterId;

/// Root of the main menu screen.
#[derive(Component, Debug)]
pub struct MenuScreen;

#[derive(Component, Debug)]
pub struct StartButton;

/// Root of the character-select screen.
#[derive(Component, Debug)]
pub struct SelectScreen;

/// One button per playable character.
#[derive(Component, Debug, Clone, Copy)]
pub struct CharacterButton {
    pub id: CharacterId,
}

#[derive(Component, Debug)]
pub struct ConfirmButton;

#[derive(Component, Debug)]
pub struct BackButton;

/// Text node showing the highlighted character's description.
#[derive(Component, Debug)]
pub struct DescriptionText;

/// Root of the game-over screen.
#[derive(Component, Debug)]
pub struct GameOverScreen;

#[derive(Component, Debug)]
pub struct RestartButton;

/// The select-screen pick before it is confirmed. Lives entirely in the UI;
/// the session only learns about it through `FlowCommand::ConfirmCharacter`.
#[derive(Resource, Debug, Default)]
pub struct SelectionState {
    pub picked: Option<CharacterId>,
}
