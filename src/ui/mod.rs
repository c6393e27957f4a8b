// src/ui/mod.rs
//
// UI module providing the screen-space surfaces of the game:
// - Menu, character-select, and game-over screens
// - The dialogue panel (speaker, line, choice buttons)
// - On-screen touch controls for movement

pub mod dialogue_panel;
pub mod screens;
pub mod touch_controls;

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            screens::ScreensPlugin,
            dialogue_panel::DialoguePanelPlugin,
            touch_controls::TouchControlsPlugin,
        ));
    }
}
