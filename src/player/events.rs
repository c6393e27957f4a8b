//! Input commands produced by keyboard, touch buttons, and scene clicks.
use bevy::prelude::{Event, Message};

use crate::scene::components::NpcId;

use super::movement::MoveDirection;

/// A single movement step request.
#[derive(Event, Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub direction: MoveDirection,
}

/// A request to interact with a scene entity, from a click or a proximity hit.
#[derive(Event, Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractCommand {
    Doorman,
    Npc(NpcId),
}
