use std::ops::Add;
use crate::core::{attempt_move, Direction, GameState, MoveOutcome, Vec2};

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }

    pub fn below(self) -> Vec2 {
        self + Vec2::new(0, 1)
    }

    pub fn above(self) -> Vec2 {
        self + Vec2::new(0, -1)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Vec2 {
        match dir {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl GameState {
    pub fn attempt_move(&mut self, dir: Direction) -> MoveOutcome {
        attempt_move(&mut self.grid, &mut self.player, dir)
    }

    pub fn is_won(&self, win_cell: Option<Vec2>) -> bool {
        match win_cell {
            Some(cell) => self.grid.is_box(cell),
            None => false,
        }
    }

    /// The tracked player cell holds the marker and no other cell does.
    pub fn player_is_consistent(&self) -> bool {
        let markers = self.grid.player_positions();
        markers.len() == 1 && markers[0] == self.player
    }
}
