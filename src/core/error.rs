use thiserror::Error;
use crate::core::Vec2;

/// Problems found while turning a level descriptor into a live grid.
///
/// These only ever surface at load time; nothing during play produces one.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("no tile variant mapped for code {code} at ({x}, {y})")]
    UnknownTileCode { code: i32, x: usize, y: usize },

    #[error("no tile variant mapped for symbol {symbol:?} at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },

    #[error("level has no tiles")]
    EmptyLevel,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("level has no player start tile")]
    MissingPlayerStart,

    #[error("level has more than one player start tile: {first:?} and {second:?}")]
    MultiplePlayerStarts { first: Vec2, second: Vec2 },

    #[error("win cell {0:?} lies outside the level")]
    WinCellOutOfBounds(Vec2),

    #[error("invalid level json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read level: {0}")]
    Io(#[from] std::io::Error),
}
