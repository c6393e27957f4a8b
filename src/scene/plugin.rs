//! ScenePlugin coordinates the club front, the avatar, and scene clicks.
use bevy::prelude::*;

use crate::core::GamePhase;

use super::layout::SceneLayout;
use super::systems::{
    animate_walk_cycle, despawn_avatar_on_reset, flicker_neon_sign, handle_scene_clicks,
    rebuild_scene_on_reset, spawn_camera, spawn_player_avatar, spawn_scene, sync_player_avatar,
};

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        let layout = SceneLayout::load_or_default();
        info!(
            "Scene layout: walkable x {:.0}..{:.0}, y {:.0}..{:.0}, {} NPCs outside",
            layout.bounds.min_x,
            layout.bounds.max_x,
            layout.bounds.min_y,
            layout.bounds.max_y,
            layout.npcs.len()
        );

        app.insert_resource(layout)
            .add_systems(Startup, (spawn_camera, spawn_scene))
            .add_systems(
                Update,
                (
                    spawn_player_avatar,
                    despawn_avatar_on_reset,
                    rebuild_scene_on_reset,
                    sync_player_avatar.after(spawn_player_avatar),
                    animate_walk_cycle.after(sync_player_avatar),
                    flicker_neon_sign,
                ),
            )
            .add_systems(
                Update,
                handle_scene_clicks.run_if(in_state(GamePhase::Exploration)),
            );
    }
}
