//! Scene layout tunables loaded from `config/scene.toml`.
//!
//! Scene coordinates follow the original stage: x grows rightwards, y grows
//! upwards from the pavement, with the stage spanning 800x500 units.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use crate::player::movement::MovementBounds;

use super::components::NpcId;

const CONFIG_PATH: &str = "config/scene.toml";

pub const SCENE_WIDTH: f32 = 800.0;
pub const SCENE_HEIGHT: f32 = 500.0;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawSceneConfig {
    #[serde(default)]
    movement: RawMovementSection,
    #[serde(default)]
    proximity: RawProximitySection,
    #[serde(default)]
    placements: RawPlacementsSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMovementSection {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
    step: f32,
    spawn_x: f32,
    spawn_y: f32,
}

impl Default for RawMovementSection {
    fn default() -> Self {
        Self {
            min_x: 50.0,
            max_x: 700.0,
            min_y: 150.0,
            max_y: 400.0,
            step: 10.0,
            spawn_x: 50.0,
            spawn_y: 400.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawProximitySection {
    doorman: f32,
    npc: f32,
}

impl Default for RawProximitySection {
    fn default() -> Self {
        Self {
            doorman: 100.0,
            npc: 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawPlacementsSection {
    doorman: [f32; 2],
    npcs: Vec<RawNpcPlacement>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawNpcPlacement {
    id: NpcId,
    position: [f32; 2],
}

impl Default for RawPlacementsSection {
    fn default() -> Self {
        Self {
            doorman: [500.0, 150.0],
            npcs: vec![
                RawNpcPlacement {
                    id: NpcId::BlondeGirl,
                    position: [550.0, 150.0],
                },
                RawNpcPlacement {
                    id: NpcId::ConspiracyNut,
                    position: [300.0, 170.0],
                },
                RawNpcPlacement {
                    id: NpcId::FailedDj,
                    position: [150.0, 170.0],
                },
                RawNpcPlacement {
                    id: NpcId::Regular,
                    position: [650.0, 160.0],
                },
            ],
        }
    }
}

/// Where one NPC stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpcPlacement {
    pub id: NpcId,
    pub position: Vec2,
}

/// Validated layout used by movement, proximity polling, and spawning.
#[derive(Resource, Debug, Clone)]
pub struct SceneLayout {
    pub bounds: MovementBounds,
    pub step_size: f32,
    pub spawn: Vec2,
    pub doorman_threshold: f32,
    pub npc_threshold: f32,
    pub doorman: Vec2,
    pub npcs: Vec<NpcPlacement>,
}

impl SceneLayout {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawSceneConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    Self::fallback()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        RawSceneConfig::default().into()
    }

    /// Maps scene coordinates onto the world space of a centered 2D camera.
    pub fn to_world(&self, scene: Vec2) -> Vec2 {
        scene - Vec2::new(SCENE_WIDTH, SCENE_HEIGHT) / 2.0
    }
}

impl From<RawSceneConfig> for SceneLayout {
    fn from(value: RawSceneConfig) -> Self {
        let movement = value.movement;
        let min_x = movement.min_x.min(movement.max_x);
        let max_x = movement.max_x.max(movement.min_x);
        let min_y = movement.min_y.min(movement.max_y);
        let max_y = movement.max_y.max(movement.min_y);
        let bounds = MovementBounds {
            min_x,
            max_x,
            min_y,
            max_y,
        };

        let spawn = bounds.clamp(Vec2::new(movement.spawn_x, movement.spawn_y));

        let mut npcs: Vec<NpcPlacement> = Vec::new();
        for raw in value.placements.npcs {
            if npcs.iter().any(|placement| placement.id == raw.id) {
                warn!("Duplicate placement for {}; keeping the first", raw.id);
                continue;
            }
            npcs.push(NpcPlacement {
                id: raw.id,
                position: Vec2::from(raw.position),
            });
        }

        Self {
            bounds,
            step_size: movement.step.max(1.0),
            spawn,
            doorman_threshold: value.proximity.doorman.max(0.0),
            npc_threshold: value.proximity.npc.max(0.0),
            doorman: Vec2::from(value.placements.doorman),
            npcs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matches_the_stage() {
        let layout = SceneLayout::fallback();
        assert_eq!(layout.bounds.min_x, 50.0);
        assert_eq!(layout.bounds.max_x, 700.0);
        assert_eq!(layout.bounds.min_y, 150.0);
        assert_eq!(layout.bounds.max_y, 400.0);
        assert_eq!(layout.step_size, 10.0);
        assert_eq!(layout.spawn, Vec2::new(50.0, 400.0));
        assert_eq!(layout.doorman_threshold, 100.0);
        assert_eq!(layout.npc_threshold, 60.0);
        assert_eq!(layout.doorman, Vec2::new(500.0, 150.0));
        assert_eq!(layout.npcs.len(), NpcId::ALL.len());
    }

    #[test]
    fn normalisation_repairs_bad_values() {
        let raw = RawSceneConfig {
            movement: RawMovementSection {
                min_x: 700.0,
                max_x: 50.0,
                min_y: 400.0,
                max_y: 150.0,
                step: -3.0,
                spawn_x: 9999.0,
                spawn_y: -9999.0,
            },
            ..Default::default()
        };
        let layout = SceneLayout::from(raw);
        assert!(layout.bounds.min_x <= layout.bounds.max_x);
        assert!(layout.bounds.min_y <= layout.bounds.max_y);
        assert!(layout.step_size >= 1.0);
        assert!(layout.bounds.contains(layout.spawn));
    }

    #[test]
    fn duplicate_placements_keep_the_first() {
        let raw = RawSceneConfig {
            placements: RawPlacementsSection {
                doorman: [500.0, 150.0],
                npcs: vec![
                    RawNpcPlacement {
                        id: NpcId::Regular,
                        position: [650.0, 160.0],
                    },
                    RawNpcPlacement {
                        id: NpcId::Regular,
                        position: [10.0, 10.0],
                    },
                ],
            },
            ..Default::default()
        };
        let layout = SceneLayout::from(raw);
        assert_eq!(layout.npcs.len(), 1);
        assert_eq!(layout.npcs[0].position, Vec2::new(650.0, 160.0));
    }

    #[test]
    fn world_mapping_centers_the_stage() {
        let layout = SceneLayout::fallback();
        let center = layout.to_world(Vec2::new(400.0, 250.0));
        assert_eq!(center, Vec2::ZERO);
    }
}
