// src/ui/touch_controls/plugin.rs
//
// TouchControlsPlugin manages the on-screen movement buttons.

use bevy::prelude::*;

use crate::core::GamePhase;

use super::systems::{
    despawn_touch_controls_on_reset, handle_touch_buttons, spawn_touch_controls,
};

pub struct TouchControlsPlugin;

impl Plugin for TouchControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_touch_controls, despawn_touch_controls_on_reset),
        )
        .add_systems(
            Update,
            handle_touch_buttons.run_if(in_state(GamePhase::Exploration)),
        );
    }
}
