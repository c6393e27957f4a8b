//! Systems driving menu-level phase transitions and restart semantics.
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::events::{AttemptStarted, FlowCommand, PlaythroughReset};
use super::state::{GamePhase, GameSession};

/// Consumes flow commands and advances the phase machine.
///
/// Commands arriving in a phase they do not apply to are ignored. Confirming a
/// character does not set a phase here; the dialogue engine opens the hint
/// conversation in response to `AttemptStarted` and moves to `Dialogue` itself.
pub fn handle_flow_commands(
    mut flow: MessageReader<FlowCommand>,
    phase: Res<State<GamePhase>>,
    mut next_phase: ResMut<NextState<GamePhase>>,
    mut session: ResMut<GameSession>,
    mut attempts: MessageWriter<AttemptStarted>,
    mut resets: MessageWriter<PlaythroughReset>,
) {
    for command in flow.read() {
        match (*command, *phase.get()) {
            (FlowCommand::StartGame, GamePhase::Menu) => {
                next_phase.set(GamePhase::CharacterSelect);
            }
            (FlowCommand::BackToMenu, GamePhase::CharacterSelect) => {
                next_phase.set(GamePhase::Menu);
            }
            (FlowCommand::ConfirmCharacter(character), GamePhase::CharacterSelect) => {
                session.begin_attempt(character);
                info!("Attempt started with {character}");
                attempts.write(AttemptStarted { character });
            }
            (FlowCommand::Restart, GamePhase::GameOver) => {
                let rebuild_scene = session.game_completed();
                if rebuild_scene {
                    info!("Night complete; resetting everything");
                    session.full_reset();
                } else {
                    session.reset_attempt();
                }
                resets.write(PlaythroughReset { rebuild_scene });
                next_phase.set(GamePhase::CharacterSelect);
            }
            (command, current) => {
                debug!("Ignoring {command:?} while in {current:?}");
            }
        }
    }
}

#[cfg(feature = "flow_debug")]
pub fn log_phase_changes(phase: Res<State<GamePhase>>, mut last: Local<Option<GamePhase>>) {
    let current = *phase.get();
    if *last != Some(current) {
        info!(target: "flow_debug", "Phase is now {current:?}");
        *last = Some(current);
    }
}
