use crate::core::{FallState, KeyColor};

/// Content of one grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Tile {
    #[default]
    Air,
    Flux,
    Unbreakable,
    Player,
    Stone(FallState),
    Box(FallState),
    Key(KeyColor),
    Lock(KeyColor),
}

impl Tile {
    /// Maps a level descriptor code to its tile. `None` for unmapped codes.
    pub fn from_code(code: i32) -> Option<Tile> {
        use FallState::*;
        use KeyColor::*;
        let tile = match code {
            0 => Tile::Air,
            1 => Tile::Flux,
            2 => Tile::Unbreakable,
            3 => Tile::Player,
            4 => Tile::Stone(Resting),
            5 => Tile::Stone(Falling),
            6 => Tile::Box(Resting),
            7 => Tile::Box(Falling),
            8 => Tile::Key(Yellow),
            9 => Tile::Lock(Yellow),
            10 => Tile::Key(Teal),
            11 => Tile::Lock(Teal),
            _ => return None,
        };
        Some(tile)
    }

    pub fn code(self) -> i32 {
        use FallState::*;
        use KeyColor::*;
        match self {
            Tile::Air => 0,
            Tile::Flux => 1,
            Tile::Unbreakable => 2,
            Tile::Player => 3,
            Tile::Stone(Resting) => 4,
            Tile::Stone(Falling) => 5,
            Tile::Box(Resting) => 6,
            Tile::Box(Falling) => 7,
            Tile::Key(Yellow) => 8,
            Tile::Lock(Yellow) => 9,
            Tile::Key(Teal) => 10,
            Tile::Lock(Teal) => 11,
        }
    }

    pub fn is_air(self) -> bool {
        self == Tile::Air
    }

    pub fn is_box(self) -> bool {
        matches!(self, Tile::Box(_))
    }

    pub fn is_lock(self, color: KeyColor) -> bool {
        self == Tile::Lock(color)
    }

    /// The player can step straight into this cell.
    pub fn is_enterable(self) -> bool {
        matches!(self, Tile::Air | Tile::Flux)
    }

    /// Stones and boxes: pushed sideways and pulled down by gravity.
    pub fn fall_state(self) -> Option<FallState> {
        match self {
            Tile::Stone(state) | Tile::Box(state) => Some(state),
            _ => None,
        }
    }

    pub fn with_fall_state(self, state: FallState) -> Tile {
        match self {
            Tile::Stone(_) => Tile::Stone(state),
            Tile::Box(_) => Tile::Box(state),
            other => other,
        }
    }

    /// Regime of whatever sits on top of this tile: only empty space lets it fall.
    pub fn top_neighbor_fall_state(self) -> FallState {
        if self.is_air() {
            FallState::Falling
        } else {
            FallState::Resting
        }
    }

    pub fn symbol(self) -> char {
        use FallState::*;
        use KeyColor::*;
        match self {
            Tile::Air => ' ',
            Tile::Flux => ':',
            Tile::Unbreakable => '#',
            Tile::Player => '@',
            Tile::Stone(Resting) => 'o',
            Tile::Stone(Falling) => 'O',
            Tile::Box(Resting) => '$',
            Tile::Box(Falling) => '&',
            Tile::Key(Yellow) => 'y',
            Tile::Lock(Yellow) => 'Y',
            Tile::Key(Teal) => 't',
            Tile::Lock(Teal) => 'T',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Tile> {
        use FallState::*;
        use KeyColor::*;
        let tile = match symbol {
            ' ' => Tile::Air,
            ':' => Tile::Flux,
            '#' => Tile::Unbreakable,
            '@' => Tile::Player,
            'o' => Tile::Stone(Resting),
            'O' => Tile::Stone(Falling),
            '$' => Tile::Box(Resting),
            '&' => Tile::Box(Falling),
            'y' => Tile::Key(Yellow),
            'Y' => Tile::Lock(Yellow),
            't' => Tile::Key(Teal),
            'T' => Tile::Lock(Teal),
            _ => return None,
        };
        Some(tile)
    }
}
