//! Movement domain: engine-free driver for the player controller.
//!
//! Bevy drives [`PlayerController`] from `Update` and `FixedUpdate`. This
//! module does the same without an engine so the controller can be stepped
//! from tests, replays or a custom loop.

use bevy::prelude::*;

use crate::config::{ConfigError, require_positive};
use crate::movement::config::MovementConfig;
use crate::movement::controller::{GroundSensor, InputSource, PlayerController, VelocitySink};

/// Longest frame the accumulator will absorb. Anything longer is treated as a
/// hitch and truncated so one slow frame cannot queue hundreds of ticks.
pub const MAX_FRAME_DELTA: f32 = 0.25;

/// One frame of input as plain data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub horizontal: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
}

impl FrameInput {
    pub fn axis(horizontal: f32) -> Self {
        Self {
            horizontal,
            ..default()
        }
    }

    pub fn jump() -> Self {
        Self {
            jump_just_pressed: true,
            ..default()
        }
    }

    pub fn release_jump() -> Self {
        Self {
            jump_just_released: true,
            ..default()
        }
    }

    pub fn dash() -> Self {
        Self {
            dash_just_pressed: true,
            ..default()
        }
    }
}

impl InputSource for FrameInput {
    fn horizontal_axis(&self) -> f32 {
        self.horizontal
    }

    fn jump_just_pressed(&self) -> bool {
        self.jump_just_pressed
    }

    fn jump_just_released(&self) -> bool {
        self.jump_just_released
    }

    fn dash_just_pressed(&self) -> bool {
        self.dash_just_pressed
    }
}

/// A fixed answer, for flat test worlds.
impl GroundSensor for bool {
    fn is_grounded(&self) -> bool {
        *self
    }
}

/// The last velocity written, for drivers without a physics engine.
impl VelocitySink for Vec2 {
    fn set_velocity(&mut self, velocity: Vec2) {
        *self = velocity;
    }
}

/// A controller plus the three collaborators it needs each tick.
#[derive(Debug)]
pub struct Simulation<I, G, B> {
    controller: PlayerController,
    input: I,
    ground: G,
    body: B,
    fixed_dt: f32,
    accumulator: f32,
    frames: u64,
    ticks: u64,
}

impl<I, G, B> Simulation<I, G, B>
where
    I: InputSource,
    G: GroundSensor,
    B: VelocitySink,
{
    pub fn new(
        config: MovementConfig,
        input: I,
        ground: G,
        body: B,
        fixed_dt: f32,
    ) -> Result<Self, ConfigError> {
        require_positive("fixed_dt", fixed_dt)?;
        Ok(Self {
            controller: PlayerController::new(config)?,
            input,
            ground,
            body,
            fixed_dt,
            accumulator: 0.0,
            frames: 0,
            ticks: 0,
        })
    }

    /// Variable-length frame: input sampling and timers.
    pub fn advance_frame(&mut self, dt: f32) {
        self.controller.advance_frame(&self.input, &self.ground, dt);
        self.frames += 1;
    }

    /// One physics tick of length `dt`.
    pub fn advance_physics(&mut self, dt: f32) -> Vec2 {
        self.ticks += 1;
        self.controller.advance_physics(&self.ground, &mut self.body, dt)
    }

    /// Advance wall-clock time by `frame_dt`, running as many fixed ticks as
    /// have accumulated and then the frame update. Physics runs first, the
    /// same order Bevy uses for `FixedUpdate` and `Update`. Returns the number
    /// of ticks run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = frame_dt.clamp(0.0, MAX_FRAME_DELTA);
        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            self.advance_physics(self.fixed_dt);
            steps += 1;
        }

        self.advance_frame(frame_dt);
        steps
    }

    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlayerController {
        &mut self.controller
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn ground_mut(&mut self) -> &mut G {
        &mut self.ground
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
