//! Enemy domain: sensor raycasts and movement.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::enemy::Enemy;
use crate::movement::GameLayer;

fn sensor_hit(spatial_query: &SpatialQuery, origin: Vec2, direction: Dir2, length: f32) -> bool {
    // Only the player layer, so the enemy never senses itself or the ground
    let player_filter = SpatialQueryFilter::from_mask(GameLayer::Player);
    spatial_query
        .cast_ray(origin, direction, length, true, &player_filter)
        .is_some()
}

pub(crate) fn sense_and_chase(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Enemy, &mut LinearVelocity)>,
) {
    for (transform, enemy, mut velocity) in &mut query {
        let origin = transform.translation.truncate();
        let hit_left = sensor_hit(&spatial_query, origin, Dir2::NEG_X, enemy.raycast_length);
        let hit_right = sensor_hit(&spatial_query, origin, Dir2::X, enemy.raycast_length);

        velocity.0 = enemy.chase_velocity(hit_left, hit_right);
    }
}

#[cfg(feature = "dev-tools")]
pub(crate) fn draw_sensor_rays(mut gizmos: Gizmos, query: Query<(&Transform, &Enemy)>) {
    for (transform, enemy) in &query {
        let origin = transform.translation.truncate();
        gizmos.line_2d(
            origin,
            origin + Vec2::NEG_X * enemy.raycast_length,
            Color::srgb(0.9, 0.2, 0.2),
        );
        gizmos.line_2d(
            origin,
            origin + Vec2::X * enemy.raycast_length,
            Color::srgb(0.2, 0.9, 0.2),
        );
    }
}
