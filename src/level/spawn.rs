//! Level domain: spawning ground, player and enemies from a tile level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::{CameraTarget, LevelBounds};
use crate::enemy::{Enemy, EnemyTuning};
use crate::level::{TEST_ROOM, TILE_SIZE, TileLevel};
use crate::movement::{GameLayer, Ground, Hostile, MovementConfig, Player, PlayerController};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 32.0);

pub(crate) fn spawn_level(
    mut commands: Commands,
    movement: Res<MovementConfig>,
    enemy_tuning: Res<EnemyTuning>,
) {
    let level = match TileLevel::parse(TEST_ROOM, TILE_SIZE, Vec2::ZERO) {
        Ok(level) => level,
        Err(e) => {
            error!("Failed to parse test room: {}", e);
            return;
        }
    };

    if let Some(bounds) = level.world_bounds() {
        commands.insert_resource(LevelBounds(bounds));
    }

    spawn_ground(&mut commands, &level);

    let controller = movement
        .check_probe_fits(PLAYER_SIZE)
        .and_then(|()| PlayerController::new(movement.clone()));
    match controller {
        Ok(controller) => {
            spawn_player(&mut commands, controller, level.cell_center(level.player_spawn));
        }
        Err(e) => error!("Player not spawned, invalid movement config: {}", e),
    }

    for cell in &level.enemies {
        spawn_enemy(&mut commands, &enemy_tuning, level.cell_center(*cell));
    }

    info!(
        "Spawned level: {} ground tiles, {} enemies, player at {:?}",
        level.ground.len(),
        level.enemies.len(),
        level.player_spawn
    );
}

fn spawn_ground(commands: &mut Commands, level: &TileLevel) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);

    for cell in &level.ground {
        let center = level.cell_center(*cell);
        commands.spawn((
            Ground,
            Sprite {
                color: ground_color,
                custom_size: Some(Vec2::splat(level.tile_size)),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(level.tile_size, level.tile_size),
            ground_layers,
        ));
    }
}

fn spawn_player(commands: &mut Commands, controller: PlayerController, position: Vec2) {
    commands.spawn((
        // Identity & Movement
        (Player, CameraTarget, controller),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The controller integrates its own gravity
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Enemy]),
        ),
    ));
}

fn spawn_enemy(commands: &mut Commands, tuning: &EnemyTuning, position: Vec2) {
    commands.spawn((
        (Enemy::from_tuning(tuning), Hostile),
        Sprite {
            color: Color::srgb(0.85, 0.25, 0.25),
            custom_size: Some(tuning.size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 1.0),
        (
            RigidBody::Kinematic,
            Collider::rectangle(tuning.size.x, tuning.size.y),
            LinearVelocity::default(),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player]),
        ),
    ));
}
