//! Movement domain: immutable tuning for the player controller.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, require_non_negative, require_positive};

/// Player movement tuning. World units are pixels, times are seconds.
///
/// Only the timing/shape parameters are stored; the rates the controller
/// integrates with (acceleration, gravity, jump velocity) are derived so that
/// designers tune "how long" and "how high" rather than raw forces.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfig {
    pub max_speed: f32,
    /// Seconds to reach `max_speed` from rest.
    pub acceleration_time: f32,
    /// Seconds to stop from `max_speed` with no input.
    pub deceleration_time: f32,
    /// Height reached by a full (high) jump.
    pub apex_height: f32,
    /// Seconds to reach `apex_height`.
    pub apex_time: f32,
    /// Lower bound on vertical velocity. Negative.
    pub terminal_speed: f32,
    /// Grace window after leaving a ledge during which a jump still launches.
    pub coyote_time: f32,
    /// Distance below the body center where the ground probe box sits.
    pub ground_check_offset: f32,
    /// Kept narrower than the body so a wall beside the feet does not read
    /// as ground.
    pub ground_check_half_extents: Vec2,
    /// Airborne hold time after which a short hop escalates into a high jump.
    pub jump_holding_threshold: f32,
    /// Apex multiplier of a tap jump.
    pub low_jump_multiplier: f32,
    /// Apex multiplier once a jump escalates.
    pub high_jump_multiplier: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    /// Measured from the dash press, not from the end of the dash.
    pub dash_cooldown: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 160.0,
            acceleration_time: 0.5,
            deceleration_time: 0.25,
            apex_height: 112.0,
            apex_time: 0.5,
            terminal_speed: -640.0,
            coyote_time: 0.1,
            ground_check_offset: 17.6,
            ground_check_half_extents: Vec2::new(10.0, 3.2),
            jump_holding_threshold: 0.12,
            low_jump_multiplier: 0.7,
            high_jump_multiplier: 1.0,
            dash_speed: 480.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
        }
    }
}

impl MovementConfig {
    /// Horizontal acceleration while input is held.
    pub fn acceleration(&self) -> f32 {
        self.max_speed / self.acceleration_time
    }

    /// Horizontal deceleration once input is released.
    pub fn deceleration(&self) -> f32 {
        self.max_speed / self.deceleration_time
    }

    /// Gravity that makes a full jump peak at `apex_height` after `apex_time`.
    pub fn base_gravity(&self) -> f32 {
        -2.0 * self.apex_height / (self.apex_time * self.apex_time)
    }

    /// Launch velocity of a full jump, before the apex multiplier.
    pub fn base_jump_velocity(&self) -> f32 {
        2.0 * self.apex_height / self.apex_time
    }

    /// Upper bound on |velocity.y| outside of a dash.
    pub fn max_vertical_speed(&self) -> f32 {
        let launch = self.base_jump_velocity()
            * self.low_jump_multiplier.max(self.high_jump_multiplier);
        self.terminal_speed.abs().max(launch)
    }

    /// Check every precondition the controller divides or clamps by.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("max_speed", self.max_speed)?;
        require_positive("acceleration_time", self.acceleration_time)?;
        require_positive("deceleration_time", self.deceleration_time)?;
        require_positive("apex_height", self.apex_height)?;
        require_positive("apex_time", self.apex_time)?;
        if !(self.terminal_speed.is_finite() && self.terminal_speed < 0.0) {
            return Err(ConfigError::TerminalSpeedNotNegative(self.terminal_speed));
        }
        require_non_negative("coyote_time", self.coyote_time)?;
        require_non_negative("ground_check_offset", self.ground_check_offset)?;
        require_positive(
            "ground_check_half_extents.x",
            self.ground_check_half_extents.x,
        )?;
        require_positive(
            "ground_check_half_extents.y",
            self.ground_check_half_extents.y,
        )?;
        require_non_negative("jump_holding_threshold", self.jump_holding_threshold)?;
        require_positive("low_jump_multiplier", self.low_jump_multiplier)?;
        require_positive("high_jump_multiplier", self.high_jump_multiplier)?;
        require_non_negative("dash_speed", self.dash_speed)?;
        require_positive("dash_duration", self.dash_duration)?;
        require_positive("dash_cooldown", self.dash_cooldown)
    }

    /// The probe must be strictly narrower than the body it hangs under,
    /// otherwise it overlaps any wall the body touches.
    pub fn check_probe_fits(&self, body_size: Vec2) -> Result<(), ConfigError> {
        let probe_width = self.ground_check_half_extents.x * 2.0;
        if probe_width < body_size.x {
            Ok(())
        } else {
            Err(ConfigError::ProbeTooWide {
                probe_width,
                body_width: body_size.x,
            })
        }
    }
}
