use log::trace;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::{FallState, KeyColor, LevelError, Tile, Vec2};

/// The board: a fixed-size, row-major array of tiles.
///
/// Row 0 is the top row and gravity pulls toward larger `y`. Every cell always
/// holds exactly one tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    bounds: BoundsOriginRoot,
    cells: Vec<Tile>,
}

impl Grid {
    /// Builds a grid from rows of descriptor codes.
    pub fn from_codes(rows: &[Vec<i32>]) -> Result<Self, LevelError> {
        let Some(first) = rows.first() else {
            return Err(LevelError::EmptyLevel);
        };
        let width = first.len();
        if width == 0 {
            return Err(LevelError::EmptyLevel);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LevelError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &code) in row.iter().enumerate() {
                let tile = Tile::from_code(code).ok_or(LevelError::UnknownTileCode { code, x, y })?;
                cells.push(tile);
            }
        }

        Ok(Grid {
            bounds: BoundsOriginRoot::new(width as i32, rows.len() as i32),
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.bounds.extent.x
    }

    pub fn height(&self) -> i32 {
        self.bounds.extent.y
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: Vec2) -> Option<Tile> {
        if !self.contains(&pos) {
            return None;
        }
        Some(self[&pos])
    }

    pub fn is_air(&self, pos: Vec2) -> bool {
        self.get(pos).is_some_and(Tile::is_air)
    }

    pub fn is_box(&self, pos: Vec2) -> bool {
        self.get(pos).is_some_and(Tile::is_box)
    }

    /// `Falling` when the cell above `pos` is empty space, otherwise `Resting`.
    pub fn top_neighbor_fall_state(&self, pos: Vec2) -> FallState {
        self.get(pos.above())
            .map(Tile::top_neighbor_fall_state)
            .unwrap_or(FallState::Resting)
    }

    /// Clears every lock of the given color. Returns how many were removed.
    pub fn remove_all_of_lock_color(&mut self, color: KeyColor) -> usize {
        let mut removed = 0;
        for cell in self.cells.iter_mut() {
            if cell.is_lock(color) {
                *cell = Tile::Air;
                removed += 1;
            }
        }
        removed
    }

    /// One gravity pass. Returns the number of tiles that dropped a row.
    ///
    /// Rows are visited bottom to top so a tile that just fell into a lower row
    /// is never visited again in the same pass.
    pub fn tick(&mut self) -> usize {
        let mut moved = 0;
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                let pos = Vec2 { x, y };
                let tile = self[&pos];
                let Some(state) = tile.fall_state() else {
                    continue;
                };

                let below = pos.below();
                if self.is_air(below) {
                    self[&below] = tile.with_fall_state(FallState::Falling);
                    self[&pos] = Tile::Air;
                    moved += 1;
                } else if state == FallState::Falling {
                    self[&pos] = tile.with_fall_state(FallState::Resting);
                }
            }
        }
        if moved > 0 {
            trace!("gravity pass moved {} tiles", moved);
        }
        moved
    }

    /// Row-major snapshot of every cell, for render sinks.
    pub fn cells(&self) -> impl Iterator<Item = (Vec2, Tile)> + '_ {
        let width = self.width();
        self.cells.iter().enumerate().map(move |(i, &tile)| {
            let i = i as i32;
            (Vec2 { x: i % width, y: i / width }, tile)
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width() as usize)
    }

    pub fn player_positions(&self) -> Vec<Vec2> {
        self.cells()
            .filter(|(_, tile)| *tile == Tile::Player)
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl std::ops::Index<&Vec2> for Grid {
    type Output = Tile;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}

impl std::ops::IndexMut<&Vec2> for Grid {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}
