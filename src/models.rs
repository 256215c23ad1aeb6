use crate::core::{GameState, MoveOutcome};

pub struct GameRenderState<'a> {
    pub game: &'a GameState,
    pub tile_width: u16,
    pub wins: usize,
    pub last_outcome: Option<MoveOutcome>,
}
