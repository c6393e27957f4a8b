//! Scene entity markers and identifiers.
use std::fmt;

use bevy::prelude::*;
use serde::Deserialize;

/// The fixed cast of club-goers hanging around outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcId {
    BlondeGirl,
    ConspiracyNut,
    FailedDj,
    Regular,
}

impl NpcId {
    #[allow(dead_code)]
    pub const ALL: [NpcId; 4] = [
        NpcId::BlondeGirl,
        NpcId::ConspiracyNut,
        NpcId::FailedDj,
        NpcId::Regular,
    ];
}

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            NpcId::BlondeGirl => "blonde_girl",
            NpcId::ConspiracyNut => "conspiracy_nut",
            NpcId::FailedDj => "failed_dj",
            NpcId::Regular => "regular",
        };
        write!(f, "{}", id)
    }
}

/// Marker for the doorman entity.
#[derive(Component, Debug)]
pub struct Doorman;

/// Marker carried by each scene NPC.
#[derive(Component, Debug, Clone, Copy)]
pub struct SceneNpc {
    pub id: NpcId,
}

/// Marker for the player's avatar sprite.
#[derive(Component, Debug)]
pub struct PlayerAvatar;

/// Root of all static scene entities; despawned and rebuilt on a full reset.
#[derive(Component, Debug)]
pub struct SceneRoot;

/// Clickable rectangle around a scene entity, in world units.
#[derive(Component, Debug, Clone, Copy)]
pub struct HitBox {
    pub half_extents: Vec2,
}

/// Flickering neon sign state.
#[derive(Component, Debug)]
pub struct NeonSign {
    pub timer: Timer,
    pub dimmed: bool,
}

impl Default for NeonSign {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
            dimmed: false,
        }
    }
}

/// Walk animation state for the player avatar.
#[derive(Component, Debug)]
pub struct WalkCycle {
    pub timer: Timer,
    pub lean_left: bool,
}

impl Default for WalkCycle {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.2, TimerMode::Repeating),
            lean_left: false,
        }
    }
}
