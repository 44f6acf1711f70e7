//! Movement domain: player controller, its engine-free driver and the Bevy
//! systems that feed it input, ground probes and physics ticks.

mod components;
mod config;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod simulation;
mod state;
pub(crate) mod systems;


pub use components::{GameLayer, Ground, Hostile, Player};
pub use config::MovementConfig;
pub use controller::{
    ContactOutcome, GroundSensor, InputSource, PlayerController, REST_SPEED_EPSILON,
    VelocitySink,
};
pub use resources::{HostileDashedEvent, MovementInput, PlayerDiedEvent};
pub use simulation::{FrameInput, MAX_FRAME_DELTA, Simulation};
pub use state::{CharacterState, Facing, MovementState};

use avian2d::prelude::PhysicsSystems;
use bevy::prelude::*;

use crate::movement::systems::{
    advance_player_frame, advance_player_physics, log_character_state, read_input,
    resolve_hostile_contacts,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementConfig>()
            .init_resource::<MovementInput>()
            .add_message::<PlayerDiedEvent>()
            .add_message::<HostileDashedEvent>()
            .add_systems(
                Update,
                (read_input, advance_player_frame, log_character_state).chain(),
            )
            .add_systems(FixedUpdate, advance_player_physics)
            // Contacts are judged on the tick that produced them, while the
            // dash that caused them is still active.
            .add_systems(
                FixedPostUpdate,
                resolve_hostile_contacts.after(PhysicsSystems::StepSimulation),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_ground_probe);
    }
}
