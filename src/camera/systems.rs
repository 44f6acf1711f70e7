//! Camera domain: camera spawn and per-frame follow.

use bevy::prelude::*;

use crate::camera::{
    CameraBounds, CameraTarget, CameraTuning, FollowCamera, LevelBounds, follow_step,
};

pub(crate) fn setup_camera(mut commands: Commands, tuning: Res<CameraTuning>) {
    commands.spawn((
        Camera2d,
        FollowCamera {
            follow_intensity: tuning.follow_intensity,
        },
    ));
}

pub(crate) fn follow_target(
    time: Res<Time>,
    level: Option<Res<LevelBounds>>,
    target_query: Query<&Transform, (With<CameraTarget>, Without<FollowCamera>)>,
    mut camera_query: Query<(&mut Transform, &FollowCamera, &Projection)>,
) {
    let Ok(target) = target_query.single() else {
        return;
    };
    let dt = time.delta_secs();
    let target_position = target.translation.truncate();

    for (mut transform, follow, projection) in &mut camera_query {
        let clamped = match (&level, projection) {
            (Some(level), Projection::Orthographic(ortho)) => {
                CameraBounds::new(level.0, ortho.area.half_size()).clamp(target_position)
            }
            // No level yet: follow unbounded
            _ => target_position,
        };

        // Only x/y move; the camera keeps its depth
        let next = follow_step(
            transform.translation.truncate(),
            clamped,
            follow.follow_intensity,
            dt,
        );
        transform.translation.x = next.x;
        transform.translation.y = next.y;
    }
}
