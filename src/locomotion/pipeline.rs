//! Locomotion domain: the fixed-tick state machine.
//!
//! Pure functions over [`LocomotionState`]; the systems in
//! `systems/locomotion.rs` and `systems/grounding.rs` are thin ECS glue
//! around these.

use bevy::prelude::*;

use crate::locomotion::{
    ControlMode, JumpKind, LocomotionInput, LocomotionState, LocomotionTuning, SpeedRegime,
};

/// Squared horizontal speeds below this count as standing still.
const VELOCITY_EPSILON: f32 = 1.0e-6;

/// Outcome of a jump request against the aerial resource tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JumpGrant {
    Granted(JumpKind),
    Denied,
}

/// Discrete happenings of one fixed tick, forwarded as messages by the glue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepEvent {
    SprintEngaged,
    SprintDisengaged,
    Jumped(JumpKind),
    AirDashed,
}

/// Advance the controller by one fixed tick and return the displacement to
/// hand to the collision-aware mover.
pub(crate) fn step(
    state: &mut LocomotionState,
    tuning: &LocomotionTuning,
    input: &LocomotionInput,
    dt: f32,
    events: &mut Vec<StepEvent>,
) -> Vec3 {
    if input.move_started || input.move_canceled {
        state.is_moving = input.move_active;
    }

    // An air dash owns the whole step while it lasts.
    if state.control_mode == ControlMode::Standard && input.dash {
        if let Some(direction) = try_consume_air_dash(state, input) {
            state.control_mode = ControlMode::AirDash;
            state.dash_direction = direction;
            state.mode_elapsed = 0.0;
            state.vertical_velocity = 0.0;
            events.push(StepEvent::AirDashed);
        }
    }
    if state.control_mode == ControlMode::AirDash {
        state.mode_elapsed += dt;
        let displacement = state.dash_direction * tuning.air_dash_speed * dt;
        if state.mode_elapsed >= tuning.air_dash_duration {
            state.control_mode = ControlMode::Standard;
            state.mode_elapsed = 0.0;
        }
        state.move_direction = displacement;
        return displacement;
    }

    let horizontal_velocity =
        Vec3::new(state.realized_velocity.x, 0.0, state.realized_velocity.z);
    let velocity_non_zero = horizontal_velocity.length_squared() > VELOCITY_EPSILON;
    govern_speed(state, tuning, input, velocity_non_zero, dt, events);

    let mut jumped = false;
    if input.jump {
        if let JumpGrant::Granted(kind) = try_consume_jump(state) {
            state.vertical_velocity = tuning.jump_force;
            // A boosted jump with lateral steering would launch absurdly far.
            if state.current_speed > tuning.jump_speed_clamp && input.direction != Vec2::ZERO {
                state.current_speed = tuning.jump_speed_clamp;
                update_regime(state, tuning, events);
            }
            events.push(StepEvent::Jumped(kind));
            jumped = true;
        }
    }
    if !jumped && !state.grounded {
        state.vertical_velocity -= tuning.gravity * dt;
    }

    let horizontal = resolve_direction(state, tuning, input, dt);
    state.move_direction = Vec3::new(horizontal.x, state.vertical_velocity * dt, horizontal.z);
    state.move_direction
}

/// Speed governor: relax `current_speed` toward its targets and recompute the
/// regime. Above-ceiling decay is applied before idle decay; both may fire in
/// the same tick. The sprint snap is a step discontinuity, not a ramp.
pub(crate) fn govern_speed(
    state: &mut LocomotionState,
    tuning: &LocomotionTuning,
    input: &LocomotionInput,
    velocity_non_zero: bool,
    dt: f32,
    events: &mut Vec<StepEvent>,
) {
    if velocity_non_zero {
        if state.current_speed > tuning.sprint_ceiling {
            state.current_speed = (state.current_speed - tuning.boost_deceleration * dt)
                .max(tuning.sprint_ceiling);
        } else if state.current_speed < tuning.sprint_ceiling {
            state.current_speed =
                (state.current_speed + tuning.acceleration * dt).min(tuning.sprint_ceiling);
        }
    }
    if !input.move_active {
        if state.current_speed >= tuning.sprint_ceiling {
            state.current_speed -= tuning.boost_deceleration * dt;
        } else if state.current_speed > tuning.base_speed {
            state.current_speed -= tuning.normal_deceleration * dt;
        }
    }
    if input.sprint
        && state.grounded
        && velocity_non_zero
        && state.current_speed < tuning.sprint_ceiling + tuning.sprint_margin
    {
        state.current_speed = tuning.boost_speed;
    }
    state.current_speed = state.current_speed.max(tuning.base_speed);
    update_regime(state, tuning, events);
}

fn update_regime(state: &mut LocomotionState, tuning: &LocomotionTuning, events: &mut Vec<StepEvent>) {
    let regime = if state.current_speed > tuning.sprint_ceiling {
        SpeedRegime::Elevated
    } else {
        SpeedRegime::Normal
    };
    if regime != state.speed_regime {
        events.push(match regime {
            SpeedRegime::Elevated => StepEvent::SprintEngaged,
            SpeedRegime::Normal => StepEvent::SprintDisengaged,
        });
        state.speed_regime = regime;
    }
}

/// Aerial resource tracker, jump side. A grounded jump always succeeds and
/// leaves the double jump untouched; airborne, the double jump is granted
/// exactly once per airborne spell.
pub(crate) fn try_consume_jump(state: &mut LocomotionState) -> JumpGrant {
    if state.grounded {
        JumpGrant::Granted(JumpKind::Standard)
    } else if state.double_jump_available {
        state.double_jump_available = false;
        JumpGrant::Granted(JumpKind::Double)
    } else {
        JumpGrant::Denied
    }
}

/// Aerial resource tracker, dash side. Captures the horizontal dash
/// direction: input direction while moving, current facing otherwise.
pub(crate) fn try_consume_air_dash(
    state: &mut LocomotionState,
    input: &LocomotionInput,
) -> Option<Vec3> {
    if state.grounded || !state.air_dash_available {
        return None;
    }
    let input3 = Vec3::new(input.direction.x, 0.0, input.direction.y);
    let direction = if state.is_moving {
        input3.try_normalize().unwrap_or(state.forward)
    } else {
        state.forward
    };
    // Dash direction stays horizontal; `forward` keeps it non-zero.
    let direction = Vec3::new(direction.x, 0.0, direction.z).try_normalize()?;
    state.air_dash_available = false;
    Some(direction)
}

/// Direction resolver. Direct control at or below base speed; above it the
/// heading spherically interpolates from `forward` toward the input, so
/// momentum resists sharp turns. Zero input short-circuits the blend.
pub(crate) fn resolve_direction(
    state: &LocomotionState,
    tuning: &LocomotionTuning,
    input: &LocomotionInput,
    dt: f32,
) -> Vec3 {
    let input3 = Vec3::new(input.direction.x, 0.0, input.direction.y);
    if state.current_speed <= tuning.base_speed {
        return input3 * state.current_speed * dt;
    }
    let Some(input_dir) = input3.try_normalize() else {
        return Vec3::ZERO;
    };
    let heading = slerp_dir(state.forward, input_dir, tuning.directional_influence);
    heading * state.current_speed * dt
}

/// Arc-wise blend between two horizontal unit directions. `t = 0` keeps
/// `from`, `t = 1` snaps to `to`; antipodal inputs rotate about +Y.
pub(crate) fn slerp_dir(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    let Some(from) = from.try_normalize() else {
        return to;
    };
    let Some(to) = to.try_normalize() else {
        return from;
    };
    let dot = from.dot(to).clamp(-1.0, 1.0);
    if dot > 1.0 - 1.0e-6 {
        return to;
    }
    if dot < -1.0 + 1.0e-6 {
        return Quat::from_rotation_y(std::f32::consts::PI * t) * from;
    }
    let theta = dot.acos();
    let sin_theta = theta.sin();
    let blended = from * (((1.0 - t) * theta).sin() / sin_theta)
        + to * ((t * theta).sin() / sin_theta);
    blended.normalize_or(to)
}

/// Feed the mover's realized velocity and grounded flag back into the state.
/// Landing resets the aerial resources; realized horizontal velocity drives
/// the facing vector, keeping the previous facing when still.
pub(crate) fn apply_move_result(state: &mut LocomotionState, velocity: Vec3, grounded: bool) {
    state.realized_velocity = velocity;
    let was_grounded = state.grounded;
    state.grounded = grounded;
    if grounded && !was_grounded {
        state.double_jump_available = true;
        state.air_dash_available = true;
    }
    // The mover snapped us against the ground; stop accumulating fall speed.
    if grounded && state.vertical_velocity < 0.0 {
        state.vertical_velocity = 0.0;
    }
    if let Some(heading) = Vec3::new(velocity.x, 0.0, velocity.z).try_normalize() {
        state.forward = heading;
    }
}
