//! Locomotion domain: tuning and buffered input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tuning knobs for the locomotion state machine. Loaded from
/// `assets/data/locomotion.ron` at startup and validated before the first
/// tick runs.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct LocomotionTuning {
    /// Floor for `current_speed`; plain walking speed.
    pub base_speed: f32,
    /// Sustained sprint target, also the Normal/Elevated regime threshold.
    pub sprint_ceiling: f32,
    /// Speed snapped to on a sprint edge.
    pub boost_speed: f32,
    /// Sprint edges are honored while below `sprint_ceiling + sprint_margin`.
    pub sprint_margin: f32,
    pub acceleration: f32,
    pub normal_deceleration: f32,
    pub boost_deceleration: f32,
    /// Turn responsiveness above base speed, in `[0, 1]`. 0 freezes heading,
    /// 1 tracks input immediately.
    pub directional_influence: f32,
    pub jump_force: f32,
    pub gravity: f32,
    /// Boosted jumps with lateral input get clamped down to this speed.
    pub jump_speed_clamp: f32,
    pub air_dash_speed: f32,
    pub air_dash_duration: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            base_speed: 5.0,
            sprint_ceiling: 8.0,
            boost_speed: 11.0,
            sprint_margin: 5.0,
            acceleration: 6.0,
            normal_deceleration: 4.0,
            boost_deceleration: 10.0,
            directional_influence: 0.08,
            jump_force: 7.5,
            gravity: 20.0,
            jump_speed_clamp: 8.0,
            air_dash_speed: 18.0,
            air_dash_duration: 0.2,
        }
    }
}

/// Buffered input for the next fixed tick. Edge flags latch between ticks
/// (last write wins, one human input source) and are cleared once the tick
/// consumes them.
#[derive(Resource, Debug, Default)]
pub struct LocomotionInput {
    /// Horizontal plane direction: x is world +X, y is world +Z.
    pub direction: Vec2,
    pub move_active: bool,
    pub move_started: bool,
    pub move_canceled: bool,
    pub jump: bool,
    pub sprint: bool,
    pub dash: bool,
    pub reload: bool,
}

impl LocomotionInput {
    /// Drop edge flags after a fixed tick consumed them. Held state
    /// (`direction`, `move_active`) persists; `reload` belongs to the core
    /// domain and is cleared by its own consumer.
    pub fn clear_edges(&mut self) {
        self.move_started = false;
        self.move_canceled = false;
        self.jump = false;
        self.sprint = false;
        self.dash = false;
    }
}
