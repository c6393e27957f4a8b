//! Flow-level commands and notifications exchanged between modules.
use bevy::prelude::{Event, Message};

use crate::roster::CharacterId;

/// Discrete commands produced by menu-level UI input.
#[derive(Event, Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCommand {
    StartGame,
    BackToMenu,
    ConfirmCharacter(CharacterId),
    Restart,
}

/// Fired when a character is confirmed and a new attempt begins.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct AttemptStarted {
    pub character: CharacterId,
}

/// Fired on restart. `rebuild_scene` is set after a fully completed night.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct PlaythroughReset {
    pub rebuild_scene: bool,
}
