//! Locomotion domain: realized-motion feedback and ground detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{GameLayer, LocomotionState, Player, pipeline};

/// Reach of the downward ground probe below the feet.
const GROUND_PROBE_DISTANCE: f32 = 0.1;

/// Read back what the mover actually did last tick: realized velocity from
/// the physics body and a grounded flag from a short downward ray cast.
/// Runs before the pipeline so a landing resets the aerial resources before
/// this tick's jump/dash requests are judged.
pub(crate) fn observe_realized_motion(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &LinearVelocity, &mut LocomotionState), With<Player>>,
) {
    // Only ground surfaces count; other players or props do not.
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, velocity, mut state) in &mut query {
        let half_height = match collider.shape_scaled().as_capsule() {
            Some(capsule) => capsule.half_height() + capsule.radius,
            None => 0.9,
        };

        let ray_origin = transform.translation - Vec3::Y * half_height;
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir3::NEG_Y,
            GROUND_PROBE_DISTANCE,
            true,
            &ground_filter,
        );

        let was_grounded = state.grounded;
        pipeline::apply_move_result(&mut state, velocity.0, hit.is_some());
        if state.grounded != was_grounded {
            debug!(
                "grounded: {} -> {}, aerial resources dj={} dash={}",
                was_grounded, state.grounded, state.double_jump_available, state.air_dash_available
            );
        }
    }
}
