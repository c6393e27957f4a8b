//! Player module - movement commands, proximity polling, and the scripted
//! doorman approach.
pub mod components;
pub mod events;
pub mod movement;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
