//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp];
const DASH_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Raw axis: no smoothing, opposite keys cancel out
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis = x;
    input.jump_just_pressed = keyboard.any_just_pressed(JUMP_KEYS);
    input.jump_just_released = keyboard.any_just_released(JUMP_KEYS);
    input.dash_just_pressed = keyboard.any_just_pressed(DASH_KEYS);
}
