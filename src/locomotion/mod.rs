//! Locomotion domain: the per-tick character movement state machine.
//!
//! One logical tick per `FixedUpdate`: realized-motion feedback, speed
//! governor, aerial resources, direction blending, vertical integration,
//! control mode, then the collision-aware move. Variable-rate systems only
//! read realized state (animation signals, cosmetic effects).

mod bootstrap;
mod components;
pub mod config;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod pipeline;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    AnimationSignals, ControlMode, GameLayer, Ground, JumpKind, LocomotionState, Player,
    SpeedRegime,
};
pub use events::{
    AirDashPerformedEvent, JumpPerformedEvent, SprintDisengagedEvent, SprintEngagedEvent,
};
pub use resources::{LocomotionInput, LocomotionTuning};

pub(crate) use bootstrap::PLAYER_SPAWN;

use bevy::prelude::*;

use crate::locomotion::systems::{
    advance_locomotion, observe_realized_motion, play_locomotion_effects, sample_input,
    update_animation_signals, update_facing,
};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionInput>()
            .add_message::<SprintEngagedEvent>()
            .add_message::<SprintDisengagedEvent>()
            .add_message::<JumpPerformedEvent>()
            .add_message::<AirDashPerformedEvent>()
            .add_systems(
                Startup,
                (
                    config::load_locomotion_tuning,
                    bootstrap::spawn_player,
                    bootstrap::spawn_test_arena,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (sample_input, update_animation_signals, play_locomotion_effects),
            )
            .add_systems(
                FixedUpdate,
                (observe_realized_motion, advance_locomotion, update_facing).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::log_locomotion_state);
    }
}
