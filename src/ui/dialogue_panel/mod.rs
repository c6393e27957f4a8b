// src/ui/dialogue_panel/mod.rs
//
// Dialogue panel module mirroring the active conversation: speaker label,
// body text, and one button per choice.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::DialoguePanelPlugin;
