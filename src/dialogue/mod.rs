//! Dialogue module hosting the conversation script table, the thin dialogue
//! engine, and win/lose outcome resolution.
pub mod engine;
pub mod errors;
pub mod events;
pub mod library;
pub mod outcome;
pub mod plugin;
pub mod script;

pub use plugin::DialoguePlugin;
