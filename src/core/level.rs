use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::{GameState, Grid, LevelError, Tile, Vec2};

/// Static description of a level: the numeric tile grid plus an optional win cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    pub tiles: Vec<Vec<i32>>,
    #[serde(default)]
    pub win_cell: Option<Vec2>,
}

impl LevelDescriptor {
    pub fn new(tiles: Vec<Vec<i32>>) -> Self {
        LevelDescriptor {
            name: None,
            tiles,
            win_cell: None,
        }
    }

    pub fn with_win_cell(mut self, win_cell: Vec2) -> Self {
        self.win_cell = Some(win_cell);
        self
    }

    /// The built-in level. The box has to end up at column 6, row 4.
    pub fn sample() -> Self {
        LevelDescriptor {
            name: Some("sample".to_string()),
            tiles: vec![
                vec![2, 2, 2, 2, 2, 2, 2, 2],
                vec![2, 3, 0, 1, 1, 1, 0, 2],
                vec![2, 4, 2, 6, 2, 2, 0, 2],
                vec![2, 8, 4, 1, 1, 11, 0, 2],
                vec![2, 4, 1, 1, 1, 9, 10, 2],
                vec![2, 2, 2, 2, 2, 2, 2, 2],
            ],
            win_cell: Some(Vec2::new(6, 4)),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parses ASCII art using the tile glyphs (`#` wall, `@` player, `$` box ...).
    ///
    /// Blank lines are skipped and short rows are padded with air.
    pub fn from_art(art: &str) -> Result<Self, LevelError> {
        let lines: Vec<&str> = art
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        let max_width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut tiles = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(max_width);
            for (x, symbol) in line.chars().enumerate() {
                let tile = Tile::from_symbol(symbol).ok_or(LevelError::UnknownSymbol { symbol, x, y })?;
                row.push(tile.code());
            }
            row.resize(max_width, Tile::Air.code());
            tiles.push(row);
        }
        Ok(LevelDescriptor::new(tiles))
    }

    /// Validates the descriptor and builds the initial game state.
    pub fn build(&self) -> Result<GameState, LevelError> {
        let grid = Grid::from_codes(&self.tiles)?;

        let player = match grid.player_positions().as_slice() {
            [] => return Err(LevelError::MissingPlayerStart),
            [only] => *only,
            [first, second, ..] => {
                return Err(LevelError::MultiplePlayerStarts {
                    first: *first,
                    second: *second,
                });
            }
        };

        if let Some(cell) = self.win_cell {
            if !grid.contains(&cell) {
                return Err(LevelError::WinCellOutOfBounds(cell));
            }
        }

        Ok(GameState { grid, player })
    }
}
