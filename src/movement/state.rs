//! Movement domain: mutable per-character movement state.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal axis value. `None` for zero input so
    /// callers keep the previous facing.
    pub fn from_axis(axis: f32) -> Option<Facing> {
        if axis > 0.0 {
            Some(Facing::Right)
        } else if axis < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

/// Presentation-level state. Physics never branches on it except for `Dead`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterState {
    #[default]
    Idle,
    Walking,
    Jumping,
    Dead,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    pub velocity: Vec2,
    pub facing: Facing,
    pub character: CharacterState,
    /// Axis value latched by the last frame update, consumed by physics ticks.
    pub horizontal_input: f32,
    /// Seconds since last grounded, kept within [0, 2 * coyote_time].
    pub falling_time: f32,

    // Jump
    pub jump_pressed: bool,
    pub jump_holding: bool,
    /// True from launch until landing.
    pub jump_duration: bool,
    pub high_jump: bool,
    pub jump_holding_time: f32,
    pub jump_velocity: f32,
    pub apex_height_multiplier: f32,

    // Dash
    pub dashing: bool,
    pub dash_pressed: bool,
    pub dash_time: f32,
    pub dash_cooldown_remaining: f32,
}

impl MovementState {
    /// Fresh spawn state. The apex multiplier starts at the low-jump value so
    /// the first tap produces a short hop.
    pub fn new(low_jump_multiplier: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            facing: Facing::default(),
            character: CharacterState::Idle,
            horizontal_input: 0.0,
            falling_time: 0.0,
            jump_pressed: false,
            jump_holding: false,
            jump_duration: false,
            high_jump: false,
            jump_holding_time: 0.0,
            jump_velocity: 0.0,
            apex_height_multiplier: low_jump_multiplier,
            dashing: false,
            dash_pressed: false,
            dash_time: 0.0,
            dash_cooldown_remaining: 0.0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.character == CharacterState::Dead
    }
}
