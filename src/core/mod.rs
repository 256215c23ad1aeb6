mod model_helpers;
mod models;
mod update;
mod grid;
mod consts;
mod bounds;
mod tile;
mod error;
mod level;
mod session;

pub use models::{
    BlockReason, Direction, FallState, GameChangeType, GameState, GameUpdate, KeyColor,
    MoveOutcome, UserAction, Vec2,
};
pub use consts::*;
pub use error::LevelError;
pub use grid::Grid;
pub use level::LevelDescriptor;
pub use session::{GameSession, InputOrder};
pub use tile::Tile;
pub use update::{attempt_move, step};
