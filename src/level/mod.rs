//! Level domain: character-grid tile levels, their bounds and spawning.

mod spawn;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use thiserror::Error;

use crate::level::spawn::spawn_level;

/// Built-in test room. `#` ground tile, `P` player spawn, `E` enemy, `.` empty.
/// Row 0 is the top of the level.
pub const TEST_ROOM: &[&str] = &[
    "#..................................................#",
    "#..................................................#",
    "#..................................................#",
    "#.....................................#####........#",
    "#..................................................#",
    "#.........................######...................#",
    "#..................................................#",
    "#...............#####..............................#",
    "#..................................................#",
    "#.......#####...............................E......#",
    "#..........................................#####...#",
    "#..P.................E.............................#",
    "####################################################",
];

pub const TILE_SIZE: f32 = 32.0;

/// Errors that can occur when parsing a tile level.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("Unknown tile '{character}' at column {column}, row {row}")]
    UnknownTile {
        character: char,
        column: usize,
        row: usize,
    },

    #[error("Level has no player spawn")]
    MissingPlayerSpawn,

    #[error("Level has more than one player spawn")]
    DuplicatePlayerSpawn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLevel {
    pub tile_size: f32,
    /// World position of cell (0, 0)'s lower-left corner.
    pub origin: Vec2,
    pub ground: Vec<IVec2>,
    pub player_spawn: IVec2,
    pub enemies: Vec<IVec2>,
}

impl TileLevel {
    /// Parse character rows into cells. Cell y grows upward, so the last row
    /// is y = 0.
    pub fn parse(rows: &[&str], tile_size: f32, origin: Vec2) -> Result<Self, LevelError> {
        let mut ground = Vec::new();
        let mut enemies = Vec::new();
        let mut player_spawn = None;

        for (row, line) in rows.iter().enumerate() {
            let y = (rows.len() - 1 - row) as i32;
            for (column, character) in line.chars().enumerate() {
                let cell = IVec2::new(column as i32, y);
                match character {
                    '#' => ground.push(cell),
                    'E' => enemies.push(cell),
                    'P' => {
                        if player_spawn.replace(cell).is_some() {
                            return Err(LevelError::DuplicatePlayerSpawn);
                        }
                    }
                    '.' | ' ' => {}
                    _ => {
                        return Err(LevelError::UnknownTile {
                            character,
                            column,
                            row,
                        });
                    }
                }
            }
        }

        Ok(Self {
            tile_size,
            origin,
            ground,
            player_spawn: player_spawn.ok_or(LevelError::MissingPlayerSpawn)?,
            enemies,
        })
    }

    /// Tight cell bounds of the ground tiles: min inclusive, max exclusive.
    /// Empty space around the tiles does not count.
    pub fn cell_bounds(&self) -> Option<(IVec2, IVec2)> {
        let first = *self.ground.first()?;
        let (min, max) = self
            .ground
            .iter()
            .fold((first, first), |(min, max), cell| (min.min(*cell), max.max(*cell)));
        Some((min, max + IVec2::ONE))
    }

    /// World rectangle covered by the ground tiles.
    pub fn world_bounds(&self) -> Option<Rect> {
        let (min, max) = self.cell_bounds()?;
        Some(Rect::from_corners(
            self.origin + min.as_vec2() * self.tile_size,
            self.origin + max.as_vec2() * self.tile_size,
        ))
    }

    /// World position of a cell's center.
    pub fn cell_center(&self, cell: IVec2) -> Vec2 {
        self.origin + (cell.as_vec2() + Vec2::splat(0.5)) * self.tile_size
    }
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level);
    }
}
