//! Game phases and the owned session state.
use std::collections::HashSet;

use bevy::prelude::*;

use crate::roster::CharacterId;
use crate::scene::components::NpcId;

/// How many distinct characters must get past the doorman before the night is won.
pub const REQUIRED_COMPLETIONS: usize = 2;

/// Top-level mode of the game.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    CharacterSelect,
    Exploration,
    Dialogue,
    GameOver,
}

/// Session state for the current night.
///
/// Per-attempt fields (selection, NPC dedup set, auto-approach flag) are cleared
/// on every restart; the completion set survives until the night is fully won.
#[derive(Resource, Debug, Default)]
pub struct GameSession {
    selected_character: Option<CharacterId>,
    npcs_interacted: HashSet<NpcId>,
    completed_characters: Vec<CharacterId>,
    game_completed: bool,
    auto_approach_spent: bool,
}

impl GameSession {
    pub fn selected_character(&self) -> Option<CharacterId> {
        self.selected_character
    }

    /// Begins a fresh attempt with the given character.
    pub fn begin_attempt(&mut self, character: CharacterId) {
        self.selected_character = Some(character);
        self.npcs_interacted.clear();
        self.auto_approach_spent = false;
    }

    /// Records an NPC interaction. Returns false if this NPC was already seen
    /// this attempt (the interaction is then a no-op).
    pub fn record_npc_visit(&mut self, npc: NpcId) -> bool {
        self.npcs_interacted.insert(npc)
    }

    pub fn has_visited(&self, npc: NpcId) -> bool {
        self.npcs_interacted.contains(&npc)
    }

    /// Consumes the one-shot scripted-approach charge. Returns true only the
    /// first time it is called within an attempt.
    pub fn spend_auto_approach(&mut self) -> bool {
        if self.auto_approach_spent {
            return false;
        }
        self.auto_approach_spent = true;
        true
    }

    /// Adds a character to the completion set (idempotent, insertion-ordered)
    /// and flips `game_completed` once enough distinct characters are in.
    pub fn record_completion(&mut self, character: CharacterId) {
        if !self.completed_characters.contains(&character) {
            self.completed_characters.push(character);
        }
        if self.completed_characters.len() >= REQUIRED_COMPLETIONS {
            self.game_completed = true;
        }
    }

    pub fn completed_characters(&self) -> &[CharacterId] {
        &self.completed_characters
    }

    pub fn is_completed(&self, character: CharacterId) -> bool {
        self.completed_characters.contains(&character)
    }

    pub fn game_completed(&self) -> bool {
        self.game_completed
    }

    pub fn remaining_completions(&self) -> usize {
        REQUIRED_COMPLETIONS.saturating_sub(self.completed_characters.len())
    }

    pub fn clear_selection(&mut self) {
        self.selected_character = None;
    }

    /// Clears everything tied to the current attempt, keeping completions.
    pub fn reset_attempt(&mut self) {
        self.selected_character = None;
        self.npcs_interacted.clear();
        self.auto_approach_spent = false;
    }

    /// Clears the whole night, completions included.
    pub fn full_reset(&mut self) {
        self.reset_attempt();
        self.completed_characters.clear();
        self.game_completed = false;
    }
}

/// Message shown on the game-over screen, plus whether the whole night was won
/// (drives the restart button label and the restart semantics).
#[derive(Resource, Debug, Clone, Default)]
pub struct GameOverBanner {
    pub message: String,
    pub night_won: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_are_idempotent_and_ordered() {
        let mut session = GameSession::default();
        session.record_completion(CharacterId::Henke);
        session.record_completion(CharacterId::Henke);
        assert_eq!(session.completed_characters(), &[CharacterId::Henke]);
        assert!(!session.game_completed());
        assert_eq!(session.remaining_completions(), 1);

        session.record_completion(CharacterId::Mayo);
        assert_eq!(
            session.completed_characters(),
            &[CharacterId::Henke, CharacterId::Mayo]
        );
        assert!(session.game_completed());
        assert_eq!(session.remaining_completions(), 0);
    }

    #[test]
    fn npc_visits_deduplicate() {
        let mut session = GameSession::default();
        assert!(session.record_npc_visit(NpcId::ConspiracyNut));
        assert!(!session.record_npc_visit(NpcId::ConspiracyNut));
        assert!(session.has_visited(NpcId::ConspiracyNut));
        assert!(!session.has_visited(NpcId::FailedDj));
    }

    #[test]
    fn auto_approach_is_one_shot_per_attempt() {
        let mut session = GameSession::default();
        session.begin_attempt(CharacterId::Sebbe);
        assert!(session.spend_auto_approach());
        assert!(!session.spend_auto_approach());

        session.reset_attempt();
        session.begin_attempt(CharacterId::Sebbe);
        assert!(session.spend_auto_approach());
    }

    #[test]
    fn partial_reset_preserves_completions() {
        let mut session = GameSession::default();
        session.begin_attempt(CharacterId::Henke);
        session.record_npc_visit(NpcId::FailedDj);
        session.record_completion(CharacterId::Henke);

        session.reset_attempt();
        assert_eq!(session.selected_character(), None);
        assert!(!session.has_visited(NpcId::FailedDj));
        assert_eq!(session.completed_characters(), &[CharacterId::Henke]);
    }

    #[test]
    fn full_reset_clears_the_night() {
        let mut session = GameSession::default();
        session.record_completion(CharacterId::Henke);
        session.record_completion(CharacterId::Mans);
        assert!(session.game_completed());

        session.full_reset();
        assert!(session.completed_characters().is_empty());
        assert!(!session.game_completed());
        assert_eq!(session.remaining_completions(), REQUIRED_COMPLETIONS);
    }
}
