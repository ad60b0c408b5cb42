//! Locomotion domain: player and test-arena spawning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{
    AnimationSignals, GameLayer, Ground, LocomotionState, LocomotionTuning, Player,
};

pub(crate) const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const PLAYER_RADIUS: f32 = 0.35;
/// Cylinder section of the capsule; total height is this plus two radii.
const PLAYER_LENGTH: f32 = 1.1;

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Player,
        LocomotionState::new(tuning.base_speed),
        AnimationSignals::default(),
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_LENGTH))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::from_translation(PLAYER_SPAWN),
        (
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The pipeline integrates gravity itself
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}

pub(crate) fn spawn_test_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Ground slab
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(40.0, 1.0, 40.0))),
        MeshMaterial3d(materials.add(ground_color)),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(40.0, 1.0, 40.0),
        ground_layers,
    ));

    // Low platform for jump practice
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(4.0, 0.5, 4.0))),
        MeshMaterial3d(materials.add(platform_color)),
        Transform::from_xyz(-6.0, 1.25, -4.0),
        RigidBody::Static,
        Collider::cuboid(4.0, 0.5, 4.0),
        ground_layers,
    ));

    // High platform, reachable with a double jump
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(4.0, 0.5, 4.0))),
        MeshMaterial3d(materials.add(platform_color)),
        Transform::from_xyz(6.0, 2.75, -6.0),
        RigidBody::Static,
        Collider::cuboid(4.0, 0.5, 4.0),
        ground_layers,
    ));
}
