//! Movement domain: ground probing and hostile contact resolution.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    ContactOutcome, GameLayer, GroundSensor, Hostile, HostileDashedEvent, MovementConfig, Player,
    PlayerController, PlayerDiedEvent,
};

/// Box overlap test against the ground layer, placed
/// `ground_check_offset` below the body center.
pub(crate) struct GroundProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    origin: Vec2,
    shape: Collider,
}

impl<'a, 'w, 's> GroundProbe<'a, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        body_position: Vec2,
        config: &MovementConfig,
    ) -> Self {
        let area = probe_rect(body_position, config);
        Self {
            spatial_query,
            origin: area.center(),
            shape: Collider::rectangle(area.width(), area.height()),
        }
    }
}

impl GroundSensor for GroundProbe<'_, '_, '_> {
    fn is_grounded(&self) -> bool {
        // Filter to only hit Ground layer entities (not enemies or the player)
        let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
        !self
            .spatial_query
            .shape_intersections(&self.shape, self.origin, 0.0, &ground_filter)
            .is_empty()
    }
}

/// Center of the ground probe box for a body at `body_position`.
pub(crate) fn probe_origin(body_position: Vec2, config: &MovementConfig) -> Vec2 {
    body_position - Vec2::new(0.0, config.ground_check_offset)
}

/// World-space area the ground probe covers.
pub(crate) fn probe_rect(body_position: Vec2, config: &MovementConfig) -> Rect {
    Rect::from_center_half_size(
        probe_origin(body_position, config),
        config.ground_check_half_extents,
    )
}

pub(crate) fn resolve_hostile_contacts(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut died_events: MessageWriter<PlayerDiedEvent>,
    mut dashed_events: MessageWriter<HostileDashedEvent>,
    mut player_query: Query<(&mut PlayerController, &mut LinearVelocity), With<Player>>,
    hostile_query: Query<(), With<Hostile>>,
) {
    let mut removed: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player, hostile) in pairs {
            if removed.contains(&hostile) || !hostile_query.contains(hostile) {
                continue;
            }
            let Ok((mut controller, mut velocity)) = player_query.get_mut(player) else {
                continue;
            };

            match controller.resolve_hostile_contact() {
                ContactOutcome::HostileDestroyed => {
                    commands.entity(hostile).despawn();
                    removed.push(hostile);
                    dashed_events.write(HostileDashedEvent { player, hostile });
                    info!("Dash destroyed hostile {:?}", hostile);
                }
                ContactOutcome::PlayerKilled => {
                    velocity.0 = Vec2::ZERO;
                    died_events.write(PlayerDiedEvent {
                        player,
                        killer: hostile,
                    });
                    info!("Player {:?} killed by {:?}", player, hostile);
                }
                ContactOutcome::Ignored => {}
            }
        }
    }
}
