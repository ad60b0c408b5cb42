//! Core domain: app shell around the locomotion sandbox.

mod systems;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, systems::setup_scene)
            .add_systems(Update, systems::handle_scene_reload);
    }
}
