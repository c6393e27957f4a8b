//! Win/lose resolution: completion tracking and game-over banner text.
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{GameOverBanner, GamePhase, GameSession};
use crate::roster::CharacterRoster;

use super::events::{AttemptOutcome, Verdict};

/// Consumes doorman verdicts, updates the session, and moves to game over.
pub fn resolve_attempt_outcomes(
    mut outcomes: MessageReader<AttemptOutcome>,
    roster: Res<CharacterRoster>,
    mut session: ResMut<GameSession>,
    mut banner: ResMut<GameOverBanner>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    for outcome in outcomes.read() {
        let name = roster.display_name(outcome.character);
        let message = match &outcome.verdict {
            Verdict::Entry { message } => {
                session.record_completion(outcome.character);
                info!(
                    "{name} got in ({}/{} characters)",
                    session.completed_characters().len(),
                    crate::core::REQUIRED_COMPLETIONS
                );
                let text = if session.game_completed() {
                    let names: Vec<&str> = session
                        .completed_characters()
                        .iter()
                        .map(|id| roster.display_name(*id))
                        .collect();
                    victory_banner(&names)
                } else {
                    interim_banner(message, name, session.remaining_completions())
                };
                session.clear_selection();
                text
            }
            Verdict::Denied { message } => {
                info!("{name} was turned away");
                denial_banner(message.as_deref(), name)
            }
        };

        banner.message = message;
        banner.night_won = session.game_completed();
        next_phase.set(GamePhase::GameOver);
    }
}

fn victory_banner(names: &[&str]) -> String {
    format!(
        "Congratulations! You made it into Rose! 🎉\n\nCharacters who made it in: {}",
        names.join(", ")
    )
}

fn interim_banner(message: &str, name: &str, remaining: usize) -> String {
    let plural = if remaining == 1 { "" } else { "s" };
    format!(
        "{message}\n\nGreat job! You got in with {name}!\n\
         Get in with {remaining} more character{plural} to prove you're a true Rose regular!"
    )
}

fn denial_banner(message: Option<&str>, name: &str) -> String {
    let line = message
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{name} didn't make it into Rose tonight."));
    format!("{line} Better luck next time!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interim_banner_pluralises_remaining_count() {
        let one = interim_banner("Welcome to Rose! 💰", "Linkan", 1);
        assert!(one.contains("Get in with 1 more character "));
        assert!(one.contains("Welcome to Rose!"));
        assert!(one.contains("Linkan"));

        let two = interim_banner("ok", "Henke", 2);
        assert!(two.contains("2 more characters"));
    }

    #[test]
    fn victory_banner_lists_names_in_completion_order() {
        let banner = victory_banner(&["Henke", "MÅNS"]);
        assert!(banner.contains("Congratulations"));
        assert!(banner.contains("Henke, MÅNS"));
    }

    #[test]
    fn denial_banner_falls_back_to_the_generic_line() {
        let custom = denial_banner(Some("That was painful. Get lost."), "Venneman");
        assert_eq!(custom, "That was painful. Get lost. Better luck next time!");

        let generic = denial_banner(None, "Wugk");
        assert_eq!(
            generic,
            "Wugk didn't make it into Rose tonight. Better luck next time!"
        );
    }
}
