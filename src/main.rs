use bevy::prelude::*;

mod core;
mod dialogue;
mod player;
mod roster;
mod scene;
mod ui;

use crate::{
    core::CorePlugin, dialogue::DialoguePlugin, player::PlayerPlugin, roster::RosterPlugin,
    scene::ScenePlugin, ui::UiPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            CorePlugin,
            RosterPlugin,
            DialoguePlugin,
            ScenePlugin,
            PlayerPlugin,
            UiPlugin, // After DialoguePlugin so panels see the conversation opened this frame
        ))
        .run();
}
