// src/ui/dialogue_panel/plugin.rs
//
// DialoguePanelPlugin coordinates panel systems.

use bevy::prelude::*;

use super::systems::{handle_choice_buttons, sync_dialogue_panel};

pub struct DialoguePanelPlugin;

impl Plugin for DialoguePanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                sync_dialogue_panel,
                handle_choice_buttons.after(sync_dialogue_panel),
            ),
        );
    }
}
