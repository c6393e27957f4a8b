// src/ui/screens/plugin.rs
//
// ScreensPlugin ties each full-screen surface to its phase.

use bevy::prelude::*;

use crate::core::GamePhase;

use super::components::SelectionState;
use super::systems::{
    despawn_game_over, despawn_menu, despawn_select_screen, handle_back_button,
    handle_character_buttons, handle_confirm_button, handle_restart_button, handle_start_button,
    spawn_game_over, spawn_menu, spawn_select_screen, update_character_highlights,
    update_confirm_state,
};

pub struct ScreensPlugin;

impl Plugin for ScreensPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionState>()
            .add_systems(OnEnter(GamePhase::Menu), spawn_menu)
            .add_systems(OnExit(GamePhase::Menu), despawn_menu)
            .add_systems(OnEnter(GamePhase::CharacterSelect), spawn_select_screen)
            .add_systems(OnExit(GamePhase::CharacterSelect), despawn_select_screen)
            .add_systems(OnEnter(GamePhase::GameOver), spawn_game_over)
            .add_systems(OnExit(GamePhase::GameOver), despawn_game_over)
            .add_systems(Update, handle_start_button.run_if(in_state(GamePhase::Menu)))
            .add_systems(
                Update,
                (
                    handle_character_buttons,
                    update_character_highlights.after(handle_character_buttons),
                    update_confirm_state.after(handle_character_buttons),
                    handle_confirm_button,
                    handle_back_button,
                )
                    .run_if(in_state(GamePhase::CharacterSelect)),
            )
            .add_systems(
                Update,
                handle_restart_button.run_if(in_state(GamePhase::GameOver)),
            );
    }
}
