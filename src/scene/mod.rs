//! Scene module housing the club front: backdrop, doorman, NPCs, and the
//! player avatar.
pub mod components;
pub mod layout;
pub mod plugin;
pub mod systems;

pub use plugin::ScenePlugin;
