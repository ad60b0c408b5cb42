//! Locomotion domain: keyboard sampling into the buffered input snapshot.

use bevy::prelude::*;

use crate::locomotion::LocomotionInput;

/// Sample the keyboard once per frame. Edges latch until the next fixed tick
/// consumes them; if several arrive between ticks the last write wins.
pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<LocomotionInput>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // The camera looks down -Z, so W maps to -Z.
    let mut z = 0.0;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        z += 1.0;
    }

    let direction = Vec2::new(x, z).clamp_length_max(1.0);
    let was_active = input.move_active;
    input.direction = direction;
    input.move_active = direction != Vec2::ZERO;
    if input.move_active && !was_active {
        input.move_started = true;
    }
    if !input.move_active && was_active {
        input.move_canceled = true;
    }

    if keyboard.just_pressed(KeyCode::Space) {
        input.jump = true;
    }
    if keyboard.just_pressed(KeyCode::ShiftLeft) {
        input.sprint = true;
    }
    if keyboard.just_pressed(KeyCode::KeyJ) || keyboard.just_pressed(KeyCode::KeyE) {
        input.dash = true;
    }
    if keyboard.just_released(KeyCode::KeyR) {
        input.reload = true;
    }
}
