//! Locomotion domain: unit tests for the fixed-tick state machine.

use bevy::prelude::*;

use super::config::validate_tuning;
use super::pipeline::{self, JumpGrant, StepEvent};
use super::{
    ControlMode, JumpKind, LocomotionInput, LocomotionState, LocomotionTuning, SpeedRegime,
};

const DT: f32 = 1.0 / 60.0;

fn tuning() -> LocomotionTuning {
    // base 5, ceiling 8, boost 11, margin 5
    LocomotionTuning::default()
}

fn input_moving(direction: Vec2) -> LocomotionInput {
    LocomotionInput {
        direction,
        move_active: true,
        move_started: true,
        ..default()
    }
}

#[test]
fn test_speed_floor_holds_under_any_input() {
    let tuning = tuning();
    let idle = LocomotionInput::default();
    let moving = input_moving(Vec2::new(0.0, -1.0));

    for moving_input in [false, true] {
        for velocity_non_zero in [false, true] {
            let mut state = LocomotionState::new(tuning.base_speed);
            let input = if moving_input { &moving } else { &idle };
            for _ in 0..600 {
                let mut events = Vec::new();
                pipeline::govern_speed(&mut state, &tuning, input, velocity_non_zero, DT, &mut events);
                assert!(
                    state.current_speed >= tuning.base_speed,
                    "speed fell below base: {}",
                    state.current_speed
                );
            }
        }
    }
}

#[test]
fn test_speed_relaxes_to_base_when_idle() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.current_speed = tuning.boost_speed;
    state.speed_regime = SpeedRegime::Elevated;
    let idle = LocomotionInput::default();

    let mut events = Vec::new();
    let mut previous = state.current_speed;
    for _ in 0..600 {
        pipeline::govern_speed(&mut state, &tuning, &idle, false, DT, &mut events);
        assert!(state.current_speed <= previous);
        previous = state.current_speed;
    }
    assert_eq!(state.current_speed, tuning.base_speed);
    assert_eq!(state.speed_regime, SpeedRegime::Normal);
    assert!(events.contains(&StepEvent::SprintDisengaged));
}

#[test]
fn test_moving_accelerates_to_sprint_ceiling() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    let input = input_moving(Vec2::new(0.0, -1.0));

    for _ in 0..120 {
        let mut events = Vec::new();
        pipeline::govern_speed(&mut state, &tuning, &input, true, DT, &mut events);
        assert!(state.current_speed <= tuning.sprint_ceiling);
    }
    assert_eq!(state.current_speed, tuning.sprint_ceiling);
    // The regime only turns Elevated above the ceiling, never at it.
    assert_eq!(state.speed_regime, SpeedRegime::Normal);
}

#[test]
fn test_sprint_edge_snaps_to_boost_same_tick() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.realized_velocity = Vec3::new(0.0, 0.0, -5.0);
    let mut input = input_moving(Vec2::new(0.0, -1.0));
    input.sprint = true;

    let mut events = Vec::new();
    let displacement = pipeline::step(&mut state, &tuning, &input, DT, &mut events);

    assert_eq!(state.current_speed, tuning.boost_speed);
    assert_eq!(state.speed_regime, SpeedRegime::Elevated);
    assert!(events.contains(&StepEvent::SprintEngaged));
    let expected = Vec3::NEG_Z * tuning.boost_speed * DT;
    assert!((displacement - expected).length() < 1.0e-5);
}

#[test]
fn test_sprint_edge_denied_while_airborne() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.grounded = false;
    state.realized_velocity = Vec3::new(0.0, 0.0, -5.0);
    let mut input = input_moving(Vec2::new(0.0, -1.0));
    input.sprint = true;

    let mut events = Vec::new();
    pipeline::step(&mut state, &tuning, &input, DT, &mut events);
    assert!(state.current_speed < tuning.boost_speed);
    assert!(!events.contains(&StepEvent::SprintEngaged));
}

#[test]
fn test_sprint_edge_denied_above_margin() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.current_speed = tuning.sprint_ceiling + tuning.sprint_margin + 1.0;
    state.speed_regime = SpeedRegime::Elevated;
    let mut input = input_moving(Vec2::new(0.0, -1.0));
    input.sprint = true;

    let mut events = Vec::new();
    pipeline::govern_speed(&mut state, &tuning, &input, true, DT, &mut events);
    assert_ne!(state.current_speed, tuning.boost_speed);
}

#[test]
fn test_grounded_jump_then_gravity() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    let mut input = input_moving(Vec2::new(0.0, -1.0));
    input.jump = true;

    let mut events = Vec::new();
    pipeline::step(&mut state, &tuning, &input, DT, &mut events);
    assert_eq!(state.vertical_velocity, tuning.jump_force);
    assert!(events.contains(&StepEvent::Jumped(JumpKind::Standard)));
    // A grounded jump never spends the double jump.
    assert!(state.double_jump_available);

    // Leave the ground, no further jump input: gravity accumulates per tick.
    pipeline::apply_move_result(&mut state, Vec3::new(0.0, tuning.jump_force, 0.0), false);
    input.jump = false;
    for tick in 1..=10 {
        pipeline::step(&mut state, &tuning, &input, DT, &mut events);
        let expected = tuning.jump_force - tuning.gravity * DT * tick as f32;
        assert!((state.vertical_velocity - expected).abs() < 1.0e-4);
    }
}

#[test]
fn test_boosted_jump_clamps_speed_with_lateral_input() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.current_speed = tuning.boost_speed;
    state.speed_regime = SpeedRegime::Elevated;
    state.realized_velocity = Vec3::new(0.0, 0.0, -11.0);
    let mut input = input_moving(Vec2::new(1.0, 0.0));
    input.jump = true;

    let mut events = Vec::new();
    pipeline::step(&mut state, &tuning, &input, DT, &mut events);
    assert_eq!(state.vertical_velocity, tuning.jump_force);
    assert_eq!(state.current_speed, tuning.jump_speed_clamp);
    assert!(events.contains(&StepEvent::Jumped(JumpKind::Standard)));
    assert!(events.contains(&StepEvent::SprintDisengaged));
}

#[test]
fn test_double_jump_granted_exactly_once() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.grounded = false;

    assert_eq!(
        pipeline::try_consume_jump(&mut state),
        JumpGrant::Granted(JumpKind::Double)
    );
    assert!(!state.double_jump_available);
    assert_eq!(pipeline::try_consume_jump(&mut state), JumpGrant::Denied);

    // Landing restores it.
    pipeline::apply_move_result(&mut state, Vec3::ZERO, true);
    assert!(state.double_jump_available);
    assert!(state.air_dash_available);
}

#[test]
fn test_denied_jump_still_accumulates_gravity() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.grounded = false;
    state.double_jump_available = false;
    state.vertical_velocity = 2.0;
    let mut input = LocomotionInput::default();
    input.jump = true;

    let mut events = Vec::new();
    pipeline::step(&mut state, &tuning, &input, DT, &mut events);
    assert!((state.vertical_velocity - (2.0 - tuning.gravity * DT)).abs() < 1.0e-5);
    assert!(!events.iter().any(|e| matches!(e, StepEvent::Jumped(_))));
}

#[test]
fn test_air_dash_overrides_pipeline_for_duration() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.grounded = false;
    state.vertical_velocity = -3.0;
    let mut input = input_moving(Vec2::new(1.0, 0.0));
    input.dash = true;

    let mut events = Vec::new();
    let expected = Vec3::X * tuning.air_dash_speed * DT;
    let displacement = pipeline::step(&mut state, &tuning, &input, DT, &mut events);

    assert_eq!(state.control_mode, ControlMode::AirDash);
    assert!((displacement - expected).length() < 1.0e-5);
    assert!(events.contains(&StepEvent::AirDashed));
    assert!(!state.air_dash_available);
    // Dash entry locks out vertical motion.
    assert_eq!(state.vertical_velocity, 0.0);

    // The dash runs to its timer regardless of further input.
    input.dash = false;
    input.direction = Vec2::new(0.0, 1.0);
    let mut dash_ticks = 1;
    while state.control_mode == ControlMode::AirDash {
        let d = pipeline::step(&mut state, &tuning, &input, DT, &mut events);
        assert!((d - expected).length() < 1.0e-5);
        dash_ticks += 1;
        assert!(dash_ticks < 100, "dash never expired");
    }
    assert!(((dash_ticks as f32) * DT - tuning.air_dash_duration).abs() <= DT);
    assert_eq!(state.mode_elapsed, 0.0);
}

#[test]
fn test_air_dash_granted_once_per_airborne_spell() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.grounded = false;
    state.is_moving = true;
    let input = input_moving(Vec2::new(1.0, 0.0));

    assert!(pipeline::try_consume_air_dash(&mut state, &input).is_some());
    assert!(pipeline::try_consume_air_dash(&mut state, &input).is_none());

    pipeline::apply_move_result(&mut state, Vec3::ZERO, true);
    state.grounded = false;
    assert!(pipeline::try_consume_air_dash(&mut state, &input).is_some());
}

#[test]
fn test_air_dash_denied_while_grounded() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    let input = input_moving(Vec2::new(1.0, 0.0));
    assert!(pipeline::try_consume_air_dash(&mut state, &input).is_none());
    assert!(state.air_dash_available);
}

#[test]
fn test_air_dash_uses_facing_when_not_moving() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.grounded = false;
    state.is_moving = false;
    state.forward = Vec3::X;
    let input = LocomotionInput::default();

    let direction = pipeline::try_consume_air_dash(&mut state, &input);
    assert_eq!(direction, Some(Vec3::X));
}

#[test]
fn test_directional_influence_boundaries() {
    let mut tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.current_speed = tuning.sprint_ceiling;
    state.forward = Vec3::NEG_Z;
    let input = input_moving(Vec2::new(1.0, 0.0));

    tuning.directional_influence = 0.0;
    let frozen = pipeline::resolve_direction(&state, &tuning, &input, DT);
    assert!((frozen.normalize() - Vec3::NEG_Z).length() < 1.0e-5);

    tuning.directional_influence = 1.0;
    let snapped = pipeline::resolve_direction(&state, &tuning, &input, DT);
    assert!((snapped.normalize() - Vec3::X).length() < 1.0e-5);
}

#[test]
fn test_direct_control_at_base_speed() {
    let tuning = tuning();
    let state = LocomotionState::new(tuning.base_speed);

    let input = input_moving(Vec2::new(1.0, 0.0));
    let movement = pipeline::resolve_direction(&state, &tuning, &input, DT);
    assert!((movement - Vec3::X * tuning.base_speed * DT).length() < 1.0e-6);

    // Analog magnitude passes straight through below the ceiling.
    let half = input_moving(Vec2::new(0.5, 0.0));
    let movement = pipeline::resolve_direction(&state, &tuning, &half, DT);
    assert!((movement - Vec3::X * 0.5 * tuning.base_speed * DT).length() < 1.0e-6);
}

#[test]
fn test_zero_input_short_circuits_blending() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    state.current_speed = 10.0;
    state.forward = Vec3::X;
    let input = LocomotionInput::default();

    let movement = pipeline::resolve_direction(&state, &tuning, &input, DT);
    assert_eq!(movement, Vec3::ZERO);
    assert!(movement.is_finite());
    assert_eq!(state.forward, Vec3::X);
}

#[test]
fn test_slerp_dir_midpoint_is_unit_and_symmetric() {
    let mid = pipeline::slerp_dir(Vec3::X, Vec3::NEG_Z, 0.5);
    assert!((mid.length() - 1.0).abs() < 1.0e-5);
    assert!((mid.dot(Vec3::X) - mid.dot(Vec3::NEG_Z)).abs() < 1.0e-5);
}

#[test]
fn test_slerp_dir_handles_opposite_directions() {
    let half_turn = pipeline::slerp_dir(Vec3::X, Vec3::NEG_X, 0.5);
    assert!(half_turn.is_finite());
    assert!((half_turn.length() - 1.0).abs() < 1.0e-4);
    // Halfway through a reversal the heading is perpendicular.
    assert!(half_turn.dot(Vec3::X).abs() < 1.0e-4);
}

#[test]
fn test_forward_follows_realized_velocity() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);

    pipeline::apply_move_result(&mut state, Vec3::new(3.0, -2.0, 0.0), false);
    assert!((state.forward - Vec3::X).length() < 1.0e-6);

    // Zero velocity keeps the last facing.
    pipeline::apply_move_result(&mut state, Vec3::ZERO, false);
    assert!((state.forward - Vec3::X).length() < 1.0e-6);
}

#[test]
fn test_grounded_contact_zeroes_fall_speed_only() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);

    state.grounded = false;
    state.vertical_velocity = -5.0;
    pipeline::apply_move_result(&mut state, Vec3::ZERO, true);
    assert_eq!(state.vertical_velocity, 0.0);

    // Upward velocity survives ground contact (jump launch tick).
    state.vertical_velocity = 3.0;
    pipeline::apply_move_result(&mut state, Vec3::ZERO, true);
    assert_eq!(state.vertical_velocity, 3.0);
}

#[test]
fn test_move_edges_drive_is_moving() {
    let tuning = tuning();
    let mut state = LocomotionState::new(tuning.base_speed);
    let mut events = Vec::new();

    let input = input_moving(Vec2::new(1.0, 0.0));
    pipeline::step(&mut state, &tuning, &input, DT, &mut events);
    assert!(state.is_moving);

    let canceled = LocomotionInput {
        move_canceled: true,
        ..default()
    };
    pipeline::step(&mut state, &tuning, &canceled, DT, &mut events);
    assert!(!state.is_moving);
}

#[test]
fn test_default_tuning_validates() {
    assert!(validate_tuning(&LocomotionTuning::default()).is_empty());
}

#[test]
fn test_tuning_rejects_bad_values() {
    let mut t = LocomotionTuning::default();
    t.base_speed = -1.0;
    assert!(!validate_tuning(&t).is_empty());

    let mut t = LocomotionTuning::default();
    t.air_dash_duration = 0.0;
    assert!(!validate_tuning(&t).is_empty());

    let mut t = LocomotionTuning::default();
    t.directional_influence = 1.5;
    assert!(!validate_tuning(&t).is_empty());

    let mut t = LocomotionTuning::default();
    t.boost_speed = t.sprint_ceiling;
    assert!(!validate_tuning(&t).is_empty());

    let mut t = LocomotionTuning::default();
    t.gravity = f32::NAN;
    assert!(!validate_tuning(&t).is_empty());
}
