//! Movement domain: debug-only gizmos for the ground probe.

use bevy::prelude::*;

use crate::movement::systems::collisions::probe_rect;
use crate::movement::{Player, PlayerController};

const PROBE_COLOR: Color = Color::srgb(1.0, 0.9, 0.1);
const DASH_PROBE_COLOR: Color = Color::srgb(0.2, 0.9, 1.0);

pub(crate) fn draw_ground_probe(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &PlayerController), With<Player>>,
) {
    for (transform, controller) in &query {
        let area = probe_rect(transform.translation.truncate(), controller.config());
        let color = if controller.is_dashing() {
            DASH_PROBE_COLOR
        } else {
            PROBE_COLOR
        };

        gizmos.rect_2d(
            Isometry2d::from_translation(area.center()),
            area.size(),
            color,
        );
    }
}
