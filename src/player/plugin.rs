//! Player plugin wiring movement input, proximity polling, and the scripted
//! doorman approach.
use bevy::prelude::*;

use crate::core::GamePhase;

use super::components::{AutoApproach, KeyRepeat, PlayerState};
use super::events::{InteractCommand, MoveCommand};
use super::systems::{
    apply_move_commands, cancel_auto_approach, keyboard_movement_input, reset_player_on_attempt,
    settle_walk_state, tick_auto_approach,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerState>()
            .init_resource::<AutoApproach>()
            .init_resource::<KeyRepeat>()
            .add_message::<MoveCommand>()
            .add_message::<InteractCommand>()
            .add_systems(
                Update,
                (
                    keyboard_movement_input,
                    apply_move_commands.after(keyboard_movement_input),
                    tick_auto_approach.after(apply_move_commands),
                )
                    .run_if(in_state(GamePhase::Exploration)),
            )
            .add_systems(Update, (reset_player_on_attempt, settle_walk_state))
            .add_systems(OnExit(GamePhase::Exploration), cancel_auto_approach);
    }
}
