// src/ui/screens/mod.rs
//
// Full-screen surfaces: menu, character select, and game over.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::ScreensPlugin;
