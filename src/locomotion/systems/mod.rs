//! Locomotion domain: system modules for the fixed tick and frame phases.

pub(crate) mod animation;
pub(crate) mod effects;
pub(crate) mod grounding;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use animation::update_animation_signals;
pub(crate) use effects::play_locomotion_effects;
pub(crate) use grounding::observe_realized_motion;
pub(crate) use input::sample_input;
pub(crate) use locomotion::{advance_locomotion, update_facing};
