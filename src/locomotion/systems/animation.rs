//! Locomotion domain: animation collaborator signals.

use bevy::prelude::*;

use crate::locomotion::{AnimationSignals, LocomotionState, LocomotionTuning, Player};

/// Refresh the per-frame surface read by the animation layer. Variable rate,
/// reads realized state only; the consumer owns parameter binding.
pub(crate) fn update_animation_signals(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&LocomotionState, &mut AnimationSignals), With<Player>>,
) {
    // Validation guarantees ceiling > base.
    let span = tuning.sprint_ceiling - tuning.base_speed;

    for (state, mut signals) in &mut query {
        signals.is_moving = state.is_moving;
        signals.speed_signal = ((state.current_speed - tuning.base_speed) / span).clamp(0.0, 1.0);
    }
}
