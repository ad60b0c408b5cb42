//! Locomotion domain: the fixed-tick pipeline and facing systems.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::locomotion::events::{
    AirDashPerformedEvent, JumpPerformedEvent, SprintDisengagedEvent, SprintEngagedEvent,
};
use crate::locomotion::pipeline::{self, StepEvent};
use crate::locomotion::{LocomotionInput, LocomotionState, LocomotionTuning, Player};

/// Run one fixed tick of the locomotion pipeline and hand the resulting
/// displacement to the collision-aware mover as a velocity. The mover
/// integrates over the same dt, so this requests exactly `displacement`,
/// clipped by whatever it collides with.
pub(crate) fn advance_locomotion(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    mut input: ResMut<LocomotionInput>,
    mut query: Query<(&mut LocomotionState, &mut LinearVelocity), With<Player>>,
    mut sprint_engaged: MessageWriter<SprintEngagedEvent>,
    mut sprint_disengaged: MessageWriter<SprintDisengagedEvent>,
    mut jumps: MessageWriter<JumpPerformedEvent>,
    mut dashes: MessageWriter<AirDashPerformedEvent>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let mut events = Vec::new();
    for (mut state, mut velocity) in &mut query {
        let displacement = pipeline::step(&mut state, &tuning, &input, dt, &mut events);
        velocity.0 = displacement / dt;
    }
    for event in events.drain(..) {
        match event {
            StepEvent::SprintEngaged => {
                sprint_engaged.write(SprintEngagedEvent);
            }
            StepEvent::SprintDisengaged => {
                sprint_disengaged.write(SprintDisengagedEvent);
            }
            StepEvent::Jumped(kind) => {
                jumps.write(JumpPerformedEvent { kind });
            }
            StepEvent::AirDashed => {
                dashes.write(AirDashPerformedEvent);
            }
        }
    }
    input.clear_edges();
}

/// Rotate the model to the smoothed facing vector.
pub(crate) fn update_facing(mut query: Query<(&LocomotionState, &mut Transform), With<Player>>) {
    for (state, mut transform) in &mut query {
        if state.forward.length_squared() > 0.0 {
            transform.look_to(state.forward, Vec3::Y);
        }
    }
}
