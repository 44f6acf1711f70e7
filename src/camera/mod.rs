//! Camera domain: a follow camera kept inside the level bounds.

mod systems;


use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::camera::systems::{follow_target, setup_camera};
use crate::config::{ConfigError, require_non_negative};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    /// How quickly the camera closes the gap to its target, per second.
    pub follow_intensity: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_intensity: 4.0,
        }
    }
}

impl CameraTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("camera.follow_intensity", self.follow_intensity)
    }
}

#[derive(Component, Debug, Clone)]
pub struct FollowCamera {
    pub follow_intensity: f32,
}

/// Entity the follow camera tracks.
#[derive(Component, Debug)]
pub struct CameraTarget;

/// World-space rectangle covered by the level tiles.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LevelBounds(pub Rect);

/// Range of camera centers that keeps the view inside the level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl CameraBounds {
    /// Shrink the level rectangle by half the visible extents.
    pub fn new(level: Rect, viewport_half_size: Vec2) -> Self {
        Self {
            min: level.min + viewport_half_size,
            max: level.max - viewport_half_size,
        }
    }

    /// Clamp a target position into the bounds. When the level is smaller
    /// than the view on an axis, `min > max` and the lower bound wins.
    pub fn clamp(&self, target: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(target.x, self.min.x, self.max.x),
            clamp_axis(target.y, self.min.y, self.max.y),
        )
    }
}

// f32::clamp panics when min > max
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Exponential ease toward `target`. The lerp factor is capped at 1 so a long
/// frame snaps to the target instead of overshooting.
pub fn follow_step(position: Vec2, target: Vec2, follow_intensity: f32, dt: f32) -> Vec2 {
    position.lerp(target, (follow_intensity * dt).clamp(0.0, 1.0))
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_target);
    }
}
