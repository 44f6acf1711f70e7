//! Movement domain: the player movement state machine.
//!
//! The controller is split across two entry points that mirror a host
//! engine's callbacks:
//! - [`PlayerController::advance_frame`] runs once per rendered frame. It
//!   samples input edges and advances every timer.
//! - [`PlayerController::advance_physics`] runs once per fixed tick. It
//!   integrates walk, jump and dash into a velocity for the rigid body.

use bevy::prelude::*;

use crate::config::ConfigError;
use crate::movement::config::MovementConfig;
use crate::movement::state::{CharacterState, Facing, MovementState};

/// Below this horizontal speed with no input the character snaps to rest.
pub const REST_SPEED_EPSILON: f32 = 0.005;

/// Raw input for one frame.
pub trait InputSource {
    /// Horizontal axis in [-1, 1].
    fn horizontal_axis(&self) -> f32;
    fn jump_just_pressed(&self) -> bool;
    fn jump_just_released(&self) -> bool;
    fn dash_just_pressed(&self) -> bool;
}

/// Answers whether the character currently stands on ground.
pub trait GroundSensor {
    fn is_grounded(&self) -> bool;
}

/// Rigid body that integrates the controller's velocity.
pub trait VelocitySink {
    fn set_velocity(&mut self, velocity: Vec2);
}

/// What happened when the player touched something hostile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The player was dashing: the hostile object should be removed.
    HostileDestroyed,
    /// The player was not dashing and is now dead.
    PlayerKilled,
    /// The player was already dead.
    Ignored,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    config: MovementConfig,
    state: MovementState,
}

impl PlayerController {
    /// Build a controller at rest. Invalid tuning is rejected here so the
    /// per-tick math never divides by zero.
    pub fn new(config: MovementConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = MovementState::new(config.low_jump_multiplier);
        state.jump_velocity = config.base_jump_velocity() * state.apex_height_multiplier;
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn character_state(&self) -> CharacterState {
        self.state.character
    }

    pub fn is_dashing(&self) -> bool {
        self.state.dashing
    }

    /// Fill ratio of the dash cooldown bar: 0 right after a dash, 1 when ready.
    pub fn dash_cooldown_ratio(&self) -> f32 {
        let t = (self.state.dash_cooldown_remaining / self.config.dash_cooldown).clamp(0.0, 1.0);
        1.0 - t
    }

    pub fn dash_cooldown_visible(&self) -> bool {
        self.state.dash_cooldown_remaining > 0.0
    }

    /// Per-frame input sampling and timer bookkeeping.
    pub fn advance_frame(&mut self, input: &impl InputSource, ground: &impl GroundSensor, dt: f32) {
        if self.state.is_dead() {
            return;
        }

        let grounded = ground.is_grounded();
        let config = &self.config;
        let state = &mut self.state;

        state.horizontal_input = input.horizontal_axis().clamp(-1.0, 1.0);
        state.jump_velocity = config.base_jump_velocity() * state.apex_height_multiplier;

        state.falling_time = if grounded {
            0.0
        } else {
            state.falling_time + dt
        };
        state.falling_time = state.falling_time.clamp(0.0, 2.0 * config.coyote_time);

        // Coyote time: a press shortly after leaving a ledge still counts.
        if input.jump_just_pressed()
            && state.falling_time <= config.coyote_time
            && !state.jump_duration
            && !state.dashing
        {
            state.jump_pressed = true;
            state.jump_holding = true;
        }

        if input.jump_just_released() {
            state.jump_holding = false;
        }

        if state.jump_holding && !grounded {
            state.jump_holding_time += dt;
        }

        if input.dash_just_pressed() && state.dash_cooldown_remaining <= 0.0 {
            state.dash_pressed = true;
            state.dash_cooldown_remaining = config.dash_cooldown;
        }

        state.dash_cooldown_remaining = (state.dash_cooldown_remaining - dt).max(0.0);

        state.dash_time = if state.dashing {
            state.dash_time + dt
        } else {
            0.0
        };
    }

    /// One fixed physics tick. Returns the velocity that was handed to `body`.
    pub fn advance_physics(
        &mut self,
        ground: &impl GroundSensor,
        body: &mut impl VelocitySink,
        dt: f32,
    ) -> Vec2 {
        if self.state.is_dead() {
            self.state.velocity = Vec2::ZERO;
        } else {
            let grounded = ground.is_grounded();

            // A dash owns both axes for its whole duration.
            if !self.state.dashing {
                self.walk_update(dt);
                self.jump_update(grounded, dt);
            }
            self.dash_update();

            if !grounded && self.state.jump_duration && !self.state.dashing {
                self.state.character = CharacterState::Jumping;
            }
        }

        body.set_velocity(self.state.velocity);
        self.state.velocity
    }

    /// Resolve an overlap with a hostile object. A dash is a kill window.
    pub fn resolve_hostile_contact(&mut self) -> ContactOutcome {
        if self.state.is_dead() {
            ContactOutcome::Ignored
        } else if self.state.dashing {
            debug!("Dash kill");
            ContactOutcome::HostileDestroyed
        } else {
            self.state.character = CharacterState::Dead;
            self.state.velocity = Vec2::ZERO;
            self.state.dashing = false;
            self.state.dash_pressed = false;
            self.state.jump_pressed = false;
            debug!("Player killed by hostile contact");
            ContactOutcome::PlayerKilled
        }
    }

    fn walk_update(&mut self, dt: f32) {
        let input = self.state.horizontal_input;
        let max_speed = self.config.max_speed;
        let velocity = &mut self.state.velocity;

        if input != 0.0 {
            // Turning around snaps the current speed to the new direction.
            if input.signum() != velocity.x.signum() {
                velocity.x = -velocity.x;
            }
            velocity.x += input * self.config.acceleration() * dt;
            velocity.x = velocity.x.clamp(-max_speed, max_speed);

            self.state.character = CharacterState::Walking;
            if let Some(facing) = Facing::from_axis(input) {
                self.state.facing = facing;
            }
        } else if velocity.x.abs() > REST_SPEED_EPSILON {
            // Stops at zero instead of overshooting past it.
            let step = self.config.deceleration() * dt;
            velocity.x = if velocity.x > 0.0 {
                (velocity.x - step).max(0.0)
            } else {
                (velocity.x + step).min(0.0)
            };
        } else {
            velocity.x = 0.0;
            self.state.character = CharacterState::Idle;
        }
    }

    fn jump_update(&mut self, grounded: bool, dt: f32) {
        let config = &self.config;
        let state = &mut self.state;

        // Holding long enough turns a short hop into a full jump.
        if !state.high_jump
            && state.jump_duration
            && state.jump_holding_time >= config.jump_holding_threshold
        {
            state.jump_pressed = true;
            state.high_jump = true;
            state.apex_height_multiplier = config.high_jump_multiplier;
            state.jump_velocity = config.base_jump_velocity() * state.apex_height_multiplier;
            debug!("High jump: relaunch at {}", state.jump_velocity);
        }

        if grounded && state.velocity.y < 0.0 {
            state.velocity.y = 0.0;
            state.jump_duration = false;
            state.high_jump = false;
            state.jump_holding_time = 0.0;
            state.apex_height_multiplier = config.low_jump_multiplier;
            debug!("Landed");
        } else if state.jump_pressed {
            state.velocity.y = state.jump_velocity;
            state.jump_duration = true;
            state.jump_pressed = false;
            debug!(
                "Jump launch: velocity={}, falling_time={}",
                state.jump_velocity, state.falling_time
            );
        } else if !grounded {
            state.velocity.y += 0.5 * config.base_gravity() * dt;
        }

        state.velocity.y = state.velocity.y.max(config.terminal_speed);
    }

    fn dash_update(&mut self) {
        let dash_velocity = self.state.facing.unit() * self.config.dash_speed;
        let state = &mut self.state;

        if state.dash_pressed {
            state.velocity = dash_velocity;
            state.dashing = true;
            state.dash_pressed = false;
            debug!("Dash start: facing={:?}", state.facing);
        } else if state.dashing && state.dash_time >= self.config.dash_duration {
            state.velocity = Vec2::ZERO;
            state.dashing = false;
            debug!("Dash end after {}s", state.dash_time);
        } else if state.dashing {
            state.velocity = dash_velocity;
        }
    }
}
