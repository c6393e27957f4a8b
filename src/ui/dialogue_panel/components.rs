// src/ui/dialogue_panel/components.rs
//
// Components for the dialogue panel.

use bevy::prelude::*;

/// Root node of the dialogue panel. `revision` records which conversation
/// revision the panel was built from, so stale panels can be rebuilt.
#[derive(Component, Debug)]
pub struct DialoguePanel {
    pub revision: u64,
}

/// Metadata carried by each choice button.
#[derive(Component, Debug, Clone, Copy)]
pub struct ChoiceButton {
    pub index: usize,
}
