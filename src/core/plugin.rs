//! CorePlugin wires the phase machine, session resource, and flow commands.
use bevy::prelude::*;

use super::events::{AttemptStarted, FlowCommand, PlaythroughReset};
use super::state::{GameOverBanner, GamePhase, GameSession};
use super::systems::handle_flow_commands;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GamePhase>()
            .init_resource::<GameSession>()
            .init_resource::<GameOverBanner>()
            .add_message::<FlowCommand>()
            .add_message::<AttemptStarted>()
            .add_message::<PlaythroughReset>()
            .add_systems(Startup, log_startup)
            .add_systems(Update, handle_flow_commands);

        #[cfg(feature = "flow_debug")]
        app.add_systems(Update, super::systems::log_phase_changes);
    }
}

fn log_startup() {
    info!("CorePlugin initialised; starting at the menu");
}
