//! Locomotion domain: cosmetic-effect listeners.
//!
//! The core only emits events; this is the presentation-side stand-in that a
//! particle/trail layer would replace.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::locomotion::events::{
    AirDashPerformedEvent, JumpPerformedEvent, SprintDisengagedEvent, SprintEngagedEvent,
};

pub(crate) fn play_locomotion_effects(
    mut sprint_engaged: MessageReader<SprintEngagedEvent>,
    mut sprint_disengaged: MessageReader<SprintDisengagedEvent>,
    mut jumps: MessageReader<JumpPerformedEvent>,
    mut dashes: MessageReader<AirDashPerformedEvent>,
) {
    for _ in sprint_engaged.read() {
        debug!("sprint trail on");
    }
    for _ in sprint_disengaged.read() {
        debug!("sprint trail off");
    }
    for event in jumps.read() {
        debug!("jump puff: {:?}", event.kind);
    }
    for _ in dashes.read() {
        debug!("air dash streak");
    }
}
