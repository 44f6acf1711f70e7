//! Movement domain: input resource and messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::controller::InputSource;

/// Keyboard state sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
}

impl InputSource for MovementInput {
    fn horizontal_axis(&self) -> f32 {
        self.axis
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

/// Fired once when the player dies to a hostile contact.
#[derive(Debug)]
pub struct PlayerDiedEvent {
    pub player: Entity,
    pub killer: Entity,
}

impl Message for PlayerDiedEvent {}

/// Fired when a dash removes a hostile.
#[derive(Debug)]
pub struct HostileDashedEvent {
    pub player: Entity,
    pub hostile: Entity,
}

impl Message for HostileDashedEvent {}
