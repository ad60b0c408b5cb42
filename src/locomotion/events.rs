//! Locomotion domain: discrete events for the presentation layer.

use bevy::ecs::message::Message;

use crate::locomotion::JumpKind;

/// Speed regime crossed into Elevated.
#[derive(Debug)]
pub struct SprintEngagedEvent;

impl Message for SprintEngagedEvent {}

/// Speed regime dropped back to Normal.
#[derive(Debug)]
pub struct SprintDisengagedEvent;

impl Message for SprintDisengagedEvent {}

#[derive(Debug)]
pub struct JumpPerformedEvent {
    pub kind: JumpKind,
}

impl Message for JumpPerformedEvent {}

#[derive(Debug)]
pub struct AirDashPerformedEvent;

impl Message for AirDashPerformedEvent {}
