//! RosterPlugin loads the playable character registry.
use bevy::prelude::*;

use super::data::CharacterRoster;

pub struct RosterPlugin;

impl Plugin for RosterPlugin {
    fn build(&self, app: &mut App) {
        let roster = CharacterRoster::default();
        info!("Roster loaded with {} playable characters", roster.profiles().len());
        app.insert_resource(roster);
    }
}
