//! Core module hosting the game phase machine, session state, and flow commands.
pub mod events;
pub mod plugin;
pub mod state;
pub mod systems;

pub use plugin::CorePlugin;
pub use state::{GameOverBanner, GamePhase, GameSession, REQUIRED_COMPLETIONS};
