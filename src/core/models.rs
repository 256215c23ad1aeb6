use serde::{Deserialize, Serialize};
use crate::core::grid::Grid;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UserAction {
    Move(Direction),
    Reset,
}

/// Whether a stone or box found support on the last gravity pass.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FallState {
    Falling,
    Resting,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum KeyColor {
    Yellow,
    Teal,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub player: Vec2,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BlockReason {
    OutOfBounds,
    Solid,
    Falling,
    NoSpaceBeyond,
    Unsupported,
    VerticalPush,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveOutcome {
    Moved,
    Pushed,
    CollectedKey { color: KeyColor, locks_removed: usize },
    Blocked(BlockReason),
}

impl MoveOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked(_))
    }
}

pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
    KeyCollected,
    GravityOnly,
}
