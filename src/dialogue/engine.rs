//! The thin conversation engine: holds the active script and advances it.
//!
//! The engine renders nothing and resolves nothing. It owns the current node,
//! applies whatever action a picked choice carries, and relays terminal
//! actions as `AttemptOutcome` messages for the outcome systems to interpret.
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::events::AttemptStarted;
use crate::core::{GamePhase, GameSession};
use crate::player::events::InteractCommand;
use crate::roster::CharacterRoster;

use super::events::{AttemptOutcome, ChooseOption, Verdict};
use super::library::ScriptLibrary;
use super::script::{ChoiceAction, ConversationNode, ConversationScript, NodeId};

/// The conversation currently on screen, if any.
#[derive(Resource, Debug, Default)]
pub struct ActiveConversation {
    state: Option<ConversationState>,
    revision: u64,
}

#[derive(Debug)]
struct ConversationState {
    script: ConversationScript,
    current: NodeId,
}

impl ActiveConversation {
    pub fn open(&mut self, script: ConversationScript) {
        self.state = Some(ConversationState { script, current: 0 });
        self.revision += 1;
    }

    pub fn close(&mut self) {
        self.state = None;
        self.revision += 1;
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    pub fn current_node(&self) -> Option<&ConversationNode> {
        let state = self.state.as_ref()?;
        state.script.node(state.current)
    }

    /// Monotonic counter bumped on every open/advance/close; the dialogue
    /// panel uses it to know when to rebuild.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies the choice at `index` and returns the action it carried.
    /// Out-of-range picks (or picks with nothing open) return `None`.
    pub fn choose(&mut self, index: usize) -> Option<ChoiceAction> {
        let state = self.state.as_mut()?;
        let node = state.script.node(state.current)?;
        let action = node.choices.get(index)?.action.clone();

        match action {
            ChoiceAction::Goto(target) => {
                state.current = target;
                self.revision += 1;
            }
            ChoiceAction::End | ChoiceAction::Win { .. } | ChoiceAction::Lose { .. } => {
                self.close();
            }
        }

        Some(action)
    }
}

/// Opens the per-character hint right after an attempt starts.
pub fn open_hint_on_attempt(
    mut attempts: MessageReader<AttemptStarted>,
    roster: Res<CharacterRoster>,
    library: Res<ScriptLibrary>,
    mut conversation: ResMut<ActiveConversation>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    for attempt in attempts.read() {
        let name = roster.display_name(attempt.character);
        conversation.open(library.hint_script(attempt.character, name));
        next_phase.set(GamePhase::Dialogue);
    }
}

/// Opens doorman and NPC conversations in response to interaction commands.
///
/// NPC interactions deduplicate per playthrough; a repeat is a no-op.
pub fn handle_interact_commands(
    mut interactions: MessageReader<InteractCommand>,
    library: Res<ScriptLibrary>,
    mut session: ResMut<GameSession>,
    mut conversation: ResMut<ActiveConversation>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    for command in interactions.read() {
        if conversation.is_open() {
            continue;
        }
        match command {
            InteractCommand::Doorman => {
                let Some(character) = session.selected_character() else {
                    warn!("Doorman interaction without a selected character; ignoring");
                    continue;
                };
                info!("{character} steps up to the doorman");
                conversation.open(library.doorman_script(character).clone());
                next_phase.set(GamePhase::Dialogue);
            }
            InteractCommand::Npc(npc) => {
                if !session.record_npc_visit(*npc) {
                    continue;
                }
                info!("First chat with {npc}");
                conversation.open(library.npc_line(*npc).clone());
                next_phase.set(GamePhase::Dialogue);
            }
        }
    }
}

/// Applies picked choices and relays terminal actions.
pub fn handle_choice_commands(
    mut choices: MessageReader<ChooseOption>,
    mut conversation: ResMut<ActiveConversation>,
    session: Res<GameSession>,
    mut outcomes: MessageWriter<AttemptOutcome>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    for pick in choices.read() {
        let Some(action) = conversation.choose(pick.index) else {
            continue;
        };
        match action {
            ChoiceAction::Goto(_) => {}
            ChoiceAction::End => {
                next_phase.set(GamePhase::Exploration);
            }
            ChoiceAction::Win { message } => {
                let Some(character) = session.selected_character() else {
                    warn!("Winning choice without a selected character; ignoring");
                    continue;
                };
                outcomes.write(AttemptOutcome {
                    character,
                    verdict: Verdict::Entry { message },
                });
            }
            ChoiceAction::Lose { message } => {
                let Some(character) = session.selected_character() else {
                    warn!("Losing choice without a selected character; ignoring");
                    continue;
                };
                outcomes.write(AttemptOutcome {
                    character,
                    verdict: Verdict::Denied { message },
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::script::Choice;

    fn two_step_script() -> ConversationScript {
        ConversationScript::new(vec![
            ConversationNode::new(
                "Doorman",
                "first",
                vec![
                    Choice::new("onwards", ChoiceAction::Goto(1)),
                    Choice::new("leave", ChoiceAction::End),
                ],
            ),
            ConversationNode::new(
                "Doorman",
                "second",
                vec![Choice::new(
                    "finish",
                    ChoiceAction::Win {
                        message: "in".to_string(),
                    },
                )],
            ),
        ])
    }

    #[test]
    fn opening_shows_the_root_node() {
        let mut conversation = ActiveConversation::default();
        assert!(conversation.current_node().is_none());

        conversation.open(two_step_script());
        assert!(conversation.is_open());
        assert_eq!(conversation.current_node().unwrap().text, "first");
    }

    #[test]
    fn goto_advances_and_bumps_revision() {
        let mut conversation = ActiveConversation::default();
        conversation.open(two_step_script());
        let before = conversation.revision();

        let action = conversation.choose(0).unwrap();
        assert_eq!(action, ChoiceAction::Goto(1));
        assert_eq!(conversation.current_node().unwrap().text, "second");
        assert!(conversation.revision() > before);
    }

    #[test]
    fn terminal_actions_close_the_conversation() {
        let mut conversation = ActiveConversation::default();
        conversation.open(two_step_script());

        assert_eq!(conversation.choose(1), Some(ChoiceAction::End));
        assert!(!conversation.is_open());

        conversation.open(two_step_script());
        conversation.choose(0);
        let action = conversation.choose(0).unwrap();
        assert!(matches!(action, ChoiceAction::Win { .. }));
        assert!(!conversation.is_open());
    }

    #[test]
    fn out_of_range_picks_are_ignored() {
        let mut conversation = ActiveConversation::default();
        assert_eq!(conversation.choose(0), None);

        conversation.open(two_step_script());
        assert_eq!(conversation.choose(9), None);
        assert!(conversation.is_open());
    }
}
