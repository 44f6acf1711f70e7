//! Level domain: tests for tile parsing and bounds.

use bevy::prelude::{IVec2, Rect, Vec2};

use super::spawn::PLAYER_SIZE;
use super::{LevelError, TEST_ROOM, TILE_SIZE, TileLevel};
use crate::movement::MovementConfig;
use crate::movement::systems::collisions::{probe_origin, probe_rect};

#[test]
fn test_parse_places_last_row_at_zero() {
    let level = TileLevel::parse(&["..E", "P..", "###"], 1.0, Vec2::ZERO).unwrap();
    assert_eq!(level.player_spawn, IVec2::new(0, 1));
    assert_eq!(level.enemies, vec![IVec2::new(2, 2)]);
    assert_eq!(
        level.ground,
        vec![IVec2::new(0, 0), IVec2::new(1, 0), IVec2::new(2, 0)]
    );
}

#[test]
fn test_cell_bounds_ignore_empty_space() {
    let level = TileLevel::parse(
        &["......", "..P...", "..##..", "......", ".#...."],
        1.0,
        Vec2::ZERO,
    )
    .unwrap();

    // Tiles at (1,0), (2,2), (3,2); max is exclusive
    assert_eq!(
        level.cell_bounds(),
        Some((IVec2::new(1, 0), IVec2::new(4, 3)))
    );
}

#[test]
fn test_world_bounds_scale_and_offset() {
    let level = TileLevel::parse(&["P.", "##"], 32.0, Vec2::new(-10.0, 5.0)).unwrap();
    assert_eq!(
        level.world_bounds(),
        Some(Rect::new(-10.0, 5.0, 54.0, 37.0))
    );
}

#[test]
fn test_level_without_tiles_has_no_bounds() {
    let level = TileLevel::parse(&["P"], 1.0, Vec2::ZERO).unwrap();
    assert_eq!(level.cell_bounds(), None);
    assert_eq!(level.world_bounds(), None);
}

#[test]
fn test_cell_center() {
    let level = TileLevel::parse(&["P"], 32.0, Vec2::ZERO).unwrap();
    assert_eq!(level.cell_center(IVec2::new(2, 1)), Vec2::new(80.0, 48.0));
}

#[test]
fn test_unknown_tile_is_rejected() {
    let err = TileLevel::parse(&["P?"], 1.0, Vec2::ZERO).unwrap_err();
    assert_eq!(
        err,
        LevelError::UnknownTile {
            character: '?',
            column: 1,
            row: 0
        }
    );
}

#[test]
fn test_player_spawn_is_required_and_unique() {
    assert_eq!(
        TileLevel::parse(&["###"], 1.0, Vec2::ZERO).unwrap_err(),
        LevelError::MissingPlayerSpawn
    );
    assert_eq!(
        TileLevel::parse(&["P.P"], 1.0, Vec2::ZERO).unwrap_err(),
        LevelError::DuplicatePlayerSpawn
    );
}

#[test]
fn test_test_room_parses() {
    let level = TileLevel::parse(TEST_ROOM, TILE_SIZE, Vec2::ZERO).unwrap();
    let (min, max) = level.cell_bounds().unwrap();
    assert_eq!(min, IVec2::ZERO);
    assert_eq!(max, IVec2::new(52, 13));
    assert_eq!(level.enemies.len(), 2);
}

// -----------------------------------------------------------------------------
// Ground probe placement in the test room
// -----------------------------------------------------------------------------

fn test_room() -> TileLevel {
    TileLevel::parse(TEST_ROOM, TILE_SIZE, Vec2::ZERO).unwrap()
}

fn tile_rect(level: &TileLevel, cell: IVec2) -> Rect {
    Rect::from_center_size(level.cell_center(cell), Vec2::splat(level.tile_size))
}

#[test]
fn test_ground_check_sits_below_body_center() {
    let config = MovementConfig::default();
    let origin = probe_origin(Vec2::new(44.0, 48.0), &config);
    assert_eq!(origin, Vec2::new(44.0, 48.0 - config.ground_check_offset));

    let area = probe_rect(Vec2::new(44.0, 48.0), &config);
    assert_eq!(area.center(), origin);
    assert_eq!(area.size(), config.ground_check_half_extents * 2.0);
}

#[test]
fn test_ground_check_reaches_floor_when_standing() {
    let level = test_room();
    let config = MovementConfig::default();
    // Feet resting on top of floor tile (3, 0)
    let body = Vec2::new(level.cell_center(IVec2::new(3, 0)).x, TILE_SIZE + PLAYER_SIZE.y / 2.0);

    let floor = tile_rect(&level, IVec2::new(3, 0));
    assert!(!probe_rect(body, &config).intersect(floor).is_empty());
}

#[test]
fn test_ground_check_clears_wall_beside_airborne_body() {
    let level = test_room();
    let config = MovementConfig::default();
    let left_wall = tile_rect(&level, IVec2::new(0, 6));
    let right_wall = tile_rect(&level, IVec2::new(51, 6));
    let height = left_wall.center().y;

    // Body flush against each wall, well above the floor
    let left_body = Vec2::new(left_wall.max.x + PLAYER_SIZE.x / 2.0, height);
    let right_body = Vec2::new(right_wall.min.x - PLAYER_SIZE.x / 2.0, height);

    let left_probe = probe_rect(left_body, &config);
    let right_probe = probe_rect(right_body, &config);
    assert!(left_probe.min.x > left_wall.max.x);
    assert!(right_probe.max.x < right_wall.min.x);
    for cell in &level.ground {
        let tile = tile_rect(&level, *cell);
        assert!(left_probe.intersect(tile).is_empty(), "left probe hits {cell:?}");
        assert!(right_probe.intersect(tile).is_empty(), "right probe hits {cell:?}");
    }
}
