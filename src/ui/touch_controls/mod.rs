// src/ui/touch_controls/mod.rs
//
// On-screen directional buttons for play without a keyboard.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::TouchControlsPlugin;
