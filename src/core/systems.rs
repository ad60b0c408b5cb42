//! Core domain: camera, lighting, and the scene-reload command.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{
    LocomotionInput, LocomotionState, LocomotionTuning, PLAYER_SPAWN, Player,
};

pub(crate) fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 12.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(6.0, 12.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Reset the sandbox: teleport the player back to spawn and reinitialize the
/// controller. External to the locomotion contract.
pub(crate) fn handle_scene_reload(
    tuning: Res<LocomotionTuning>,
    mut input: ResMut<LocomotionInput>,
    mut query: Query<(&mut Transform, &mut LinearVelocity, &mut LocomotionState), With<Player>>,
) {
    if !input.reload {
        return;
    }
    input.reload = false;

    for (mut transform, mut velocity, mut state) in &mut query {
        *transform = Transform::from_translation(PLAYER_SPAWN);
        velocity.0 = Vec3::ZERO;
        *state = LocomotionState::new(tuning.base_speed);
    }
    info!("Scene reloaded");
}
