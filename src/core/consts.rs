pub const TICKS_PER_SECOND: u32 = 30;
pub const TILE_WIDTH: u16 = 2;
pub const MAX_EXPLORED_NODES: usize = 200_000;
