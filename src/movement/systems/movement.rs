//! Movement domain: frame and fixed-tick drivers for the player controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::collisions::GroundProbe;
use crate::movement::{CharacterState, MovementInput, Player, PlayerController, VelocitySink};

impl VelocitySink for LinearVelocity {
    fn set_velocity(&mut self, velocity: Vec2) {
        self.0 = velocity;
    }
}

/// Runs in `Update`: input edges and timers.
pub(crate) fn advance_player_frame(
    time: Res<Time>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut PlayerController), With<Player>>,
) {
    let dt = time.delta_secs();

    for (transform, mut controller) in &mut query {
        let probe = GroundProbe::new(
            &spatial_query,
            transform.translation.truncate(),
            controller.config(),
        );
        controller.advance_frame(&*input, &probe, dt);
    }
}

/// Runs in `FixedUpdate`, so `Time` is the fixed clock here.
pub(crate) fn advance_player_physics(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut PlayerController, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (transform, mut controller, mut velocity) in &mut query {
        let probe = GroundProbe::new(
            &spatial_query,
            transform.translation.truncate(),
            controller.config(),
        );
        controller.advance_physics(&probe, &mut *velocity, dt);
    }
}

/// Logs character state changes for the player.
pub(crate) fn log_character_state(
    query: Query<&PlayerController, (With<Player>, Changed<PlayerController>)>,
    mut last: Local<Option<CharacterState>>,
) {
    let Ok(controller) = query.single() else {
        return;
    };

    let current = controller.character_state();
    if *last != Some(current) {
        debug!("Character state: {:?} -> {:?}", *last, current);
        *last = Some(current);
    }
}
