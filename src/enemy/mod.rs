//! Enemy domain: raycast sensing and chase toward the sensed side.

mod systems;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, require_non_negative, require_positive};
use crate::enemy::systems::sense_and_chase;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Chase speed (units/s).
    pub speed: f32,
    /// Reach of each sensor ray.
    pub raycast_length: f32,
    /// Collider size of a spawned enemy.
    pub size: Vec2,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: 64.0,
            raycast_length: 160.0,
            size: Vec2::new(28.0, 28.0),
        }
    }
}

impl EnemyTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("enemy.speed", self.speed)?;
        require_positive("enemy.raycast_length", self.raycast_length)?;
        require_positive("enemy.size.x", self.size.x)?;
        require_positive("enemy.size.y", self.size.y)
    }
}

/// A sensing enemy. Each frame it looks left and right along a ray.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub speed: f32,
    pub raycast_length: f32,
}

impl Enemy {
    pub fn from_tuning(tuning: &EnemyTuning) -> Self {
        Self {
            speed: tuning.speed,
            raycast_length: tuning.raycast_length,
        }
    }

    /// Velocity for this frame given which sensor rays hit the player.
    pub fn chase_velocity(&self, hit_left: bool, hit_right: bool) -> Vec2 {
        chase_direction(hit_left, hit_right) * self.speed
    }
}

/// Direction to move given which sensor rays hit. The left ray wins when
/// both hit; no hit means stay in place.
pub fn chase_direction(hit_left: bool, hit_right: bool) -> Vec2 {
    if hit_left {
        Vec2::NEG_X
    } else if hit_right {
        Vec2::X
    } else {
        Vec2::ZERO
    }
}

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .add_systems(Update, sense_and_chase);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, systems::draw_sensor_rays);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chase_direction() {
        assert_eq!(chase_direction(false, false), Vec2::ZERO);
        assert_eq!(chase_direction(true, false), Vec2::NEG_X);
        assert_eq!(chase_direction(false, true), Vec2::X);
    }

    #[test]
    fn test_left_sensor_wins_when_both_hit() {
        assert_eq!(chase_direction(true, true), Vec2::NEG_X);
    }

    #[test]
    fn test_chase_velocity_uses_constant_speed() {
        let enemy = Enemy::from_tuning(&EnemyTuning {
            speed: 3.0,
            ..default()
        });
        assert_eq!(enemy.chase_velocity(false, true), Vec2::new(3.0, 0.0));
        assert_eq!(enemy.chase_velocity(false, false), Vec2::ZERO);
    }

    #[test]
    fn test_tuning_rejects_zero_ray() {
        let tuning = EnemyTuning {
            raycast_length: 0.0,
            ..default()
        };
        assert!(tuning.validate().is_err());
        assert!(EnemyTuning::default().validate().is_ok());
    }
}
