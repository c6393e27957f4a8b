//! Dialogue plugin wiring the script library, engine, and outcome systems.
use bevy::prelude::*;

use super::engine::{
    handle_choice_commands, handle_interact_commands, open_hint_on_attempt, ActiveConversation,
};
use super::events::{AttemptOutcome, ChooseOption};
use super::library::ScriptLibrary;
use super::outcome::resolve_attempt_outcomes;

pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScriptLibrary>()
            .init_resource::<ActiveConversation>()
            .add_message::<ChooseOption>()
            .add_message::<AttemptOutcome>()
            .add_systems(Startup, log_library)
            .add_systems(
                Update,
                (
                    open_hint_on_attempt,
                    handle_interact_commands,
                    handle_choice_commands,
                    resolve_attempt_outcomes,
                )
                    .chain(),
            );
    }
}

fn log_library(_library: Res<ScriptLibrary>) {
    info!("DialoguePlugin initialised; script library validated");
}
