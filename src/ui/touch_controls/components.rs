// src/ui/touch_controls/components.rs
//
// Components for the touch control cluster.

use bevy::prelude::*;

use crate::player::movement::MoveDirection;

/// Root node holding the four directional buttons.
#[derive(Component, Debug)]
pub struct TouchControlsRoot;

/// One directional button; a press is one movement step.
#[derive(Component, Debug, Clone, Copy)]
pub struct TouchButton {
    pub direction: MoveDirection,
}
