//! Tile map loaded from a plain-text grid
//!
//! One character per cell: `"` is land, `x` (when enabled) drops a gem in the
//! middle of an otherwise empty cell, anything else is empty.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PICKUP_RANGE, TILE_SIZE};
use crate::error::LevelLoadError;

const LAND_CHAR: char = '"';
const GEM_CHAR: char = 'x';

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Land,
}

impl Tile {
    pub fn is_solid(self) -> bool {
        self == Tile::Land
    }
}

/// A gem sitting at the centre of a cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    /// Row-major, `width * height` cells
    tiles: Vec<Tile>,
    pub collectibles: Vec<Collectible>,
}

impl TileMap {
    /// Parse a level from text. Gems are only spawned when `collectibles` is set;
    /// otherwise `x` cells are plain empty space.
    pub fn parse(text: &str, collectibles: bool) -> Result<Self, LevelLoadError> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        // A trailing newline at end of file is not a row
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let Some(first) = lines.first() else {
            return Err(LevelLoadError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(LevelLoadError::Empty);
        }
        let height = lines.len();

        let mut tiles = Vec::with_capacity(width * height);
        let mut gems = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LevelLoadError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let tile = match ch {
                    LAND_CHAR => Tile::Land,
                    GEM_CHAR if collectibles => {
                        gems.push(Collectible {
                            pos: Vec2::new(
                                x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
                                y as f32 * TILE_SIZE + TILE_SIZE / 2.0,
                            ),
                        });
                        Tile::Empty
                    }
                    _ => Tile::Empty,
                };
                tiles.push(tile);
            }
        }

        log::debug!(
            "Parsed level {}x{} with {} gems",
            width,
            height,
            gems.len()
        );

        Ok(Self {
            width,
            height,
            tiles,
            collectibles: gems,
        })
    }

    /// Read and parse a level file
    pub fn load(path: impl AsRef<Path>, collectibles: bool) -> Result<Self, LevelLoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LevelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&text, collectibles)?;
        log::info!(
            "Loaded level {} ({}x{} tiles)",
            path.display(),
            map.width,
            map.height
        );
        Ok(map)
    }

    /// Tile at a cell, `None` outside the grid
    pub fn tile(&self, col: i64, row: i64) -> Option<Tile> {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return None;
        }
        self.tiles.get(row as usize * self.width + col as usize).copied()
    }

    /// Solid at a given pixel position?
    ///
    /// Anything above the top edge is solid. Cells outside the grid otherwise
    /// count as open space.
    pub fn is_solid(&self, px: f32, py: f32) -> bool {
        if py < 0.0 {
            return true;
        }
        let col = (px / TILE_SIZE).floor() as i64;
        let row = (py / TILE_SIZE).floor() as i64;
        self.tile(col, row).is_some_and(Tile::is_solid)
    }

    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * TILE_SIZE
    }

    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * TILE_SIZE
    }

    /// Iterate solid cells as (col, row)
    pub fn solid_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_solid())
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    /// Remove every gem within the pickup box around (x, y); returns how many
    pub fn collect_near(&mut self, x: f32, y: f32) -> usize {
        let before = self.collectibles.len();
        self.collectibles
            .retain(|c| !((c.pos.x - x).abs() < PICKUP_RANGE && (c.pos.y - y).abs() < PICKUP_RANGE));
        before - self.collectibles.len()
    }
}
