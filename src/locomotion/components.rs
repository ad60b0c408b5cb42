//! Locomotion domain: components and physics layers.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Discrete speed bucket, recomputed from `current_speed` every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedRegime {
    #[default]
    Normal,
    Elevated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    #[default]
    Standard,
    AirDash,
}

/// Which jump the aerial resource tracker granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Standard,
    Double,
}

/// Per-character locomotion state, mutated once per fixed tick.
#[derive(Component, Debug, Clone)]
pub struct LocomotionState {
    /// Scalar speed target, never below the tuned base speed.
    pub current_speed: f32,
    pub speed_regime: SpeedRegime,
    /// Displacement handed to the mover last tick.
    pub move_direction: Vec3,
    /// Smoothed facing reference. Normalized, y is always zero.
    pub forward: Vec3,
    /// Edge-triggered from move start/cancel, independent of magnitude.
    pub is_moving: bool,
    /// What the mover reported after the previous tick.
    pub grounded: bool,
    pub double_jump_available: bool,
    pub air_dash_available: bool,
    pub control_mode: ControlMode,
    /// Time spent in the current non-standard mode.
    pub mode_elapsed: f32,
    /// Captured horizontal direction while air dashing.
    pub dash_direction: Vec3,
    /// Vertical velocity carried across ticks (jump impulse, gravity).
    pub vertical_velocity: f32,
    /// Velocity the mover actually achieved last tick.
    pub realized_velocity: Vec3,
}

impl LocomotionState {
    pub fn new(base_speed: f32) -> Self {
        Self {
            current_speed: base_speed,
            speed_regime: SpeedRegime::Normal,
            move_direction: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            is_moving: false,
            grounded: true,
            double_jump_available: true,
            air_dash_available: true,
            control_mode: ControlMode::Standard,
            mode_elapsed: 0.0,
            dash_direction: Vec3::ZERO,
            vertical_velocity: 0.0,
            realized_velocity: Vec3::ZERO,
        }
    }
}

/// Read-only surface for the animation layer, refreshed every frame.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AnimationSignals {
    pub is_moving: bool,
    /// `(current_speed - base) / (ceiling - base)`, clamped to `[0, 1]`.
    pub speed_signal: f32,
}
