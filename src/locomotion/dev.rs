//! Locomotion domain: dev-only state readout.

use bevy::prelude::*;

use crate::locomotion::{LocomotionState, Player};

/// Once-a-second dump of the live controller state.
pub(crate) fn log_locomotion_state(
    time: Res<Time>,
    mut elapsed: Local<f32>,
    query: Query<&LocomotionState, With<Player>>,
) {
    *elapsed += time.delta_secs();
    if *elapsed < 1.0 {
        return;
    }
    *elapsed = 0.0;

    for state in &query {
        debug!(
            "speed={:.2} regime={:?} grounded={} mode={:?} dj={} dash={} forward={:.2?}",
            state.current_speed,
            state.speed_regime,
            state.grounded,
            state.control_mode,
            state.double_jump_available,
            state.air_dash_available,
            state.forward
        );
    }
}
