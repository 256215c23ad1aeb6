use log::debug;
use crate::core::{
    BlockReason, Direction, FallState, GameChangeType, GameState, GameUpdate, Grid, MoveOutcome,
    Tile, Vec2,
};

/// Resolves one requested player move against the grid.
///
/// A blocked move leaves both the grid and the player untouched.
pub fn attempt_move(grid: &mut Grid, player: &mut Vec2, dir: Direction) -> MoveOutcome {
    let step = Vec2::from(dir);
    let target = *player + step;
    let Some(dest) = grid.get(target) else {
        return blocked(*player, dir, BlockReason::OutOfBounds);
    };

    match dest {
        Tile::Air | Tile::Flux => {
            move_player(grid, player, target);
            MoveOutcome::Moved
        }
        Tile::Stone(_) | Tile::Box(_) if !dir.is_horizontal() => {
            blocked(*player, dir, BlockReason::VerticalPush)
        }
        Tile::Stone(FallState::Falling) | Tile::Box(FallState::Falling) => {
            blocked(*player, dir, BlockReason::Falling)
        }
        Tile::Stone(FallState::Resting) | Tile::Box(FallState::Resting) => {
            let beyond = target + step;
            if !grid.is_air(beyond) {
                return blocked(*player, dir, BlockReason::NoSpaceBeyond);
            }
            if grid.is_air(target.below()) {
                return blocked(*player, dir, BlockReason::Unsupported);
            }

            grid[&beyond] = dest;
            move_player(grid, player, target);
            debug!("pushed {:?} to {:?}", dest, beyond);
            MoveOutcome::Pushed
        }
        Tile::Key(color) => {
            let locks_removed = grid.remove_all_of_lock_color(color);
            move_player(grid, player, target);
            debug!("collected {:?} key, {} locks removed", color, locks_removed);
            MoveOutcome::CollectedKey { color, locks_removed }
        }
        Tile::Unbreakable | Tile::Lock(_) | Tile::Player => {
            blocked(*player, dir, BlockReason::Solid)
        }
    }
}

fn move_player(grid: &mut Grid, player: &mut Vec2, target: Vec2) {
    grid[&*player] = Tile::Air;
    grid[&target] = Tile::Player;
    *player = target;
}

fn blocked(player: Vec2, dir: Direction, reason: BlockReason) -> MoveOutcome {
    debug!("move {:?} from {:?} blocked: {:?}", dir, player, reason);
    MoveOutcome::Blocked(reason)
}

/// Pure transition: apply an optional move, then one gravity pass.
///
/// Win detection is left to the caller. A state with a box on the win cell is
/// stepped like any other, so the explorer keeps expanding won states that
/// `GameSession::check_win_condition` would have reset.
pub fn step(game: &GameState, dir: Option<Direction>) -> GameUpdate {
    let mut next = game.clone();

    let outcome = dir.map(|d| attempt_move(&mut next.grid, &mut next.player, d));
    next.grid.tick();

    if next == *game {
        return GameUpdate::NoChange;
    }

    let change_type = match outcome {
        Some(MoveOutcome::Moved) => GameChangeType::PlayerMove,
        Some(MoveOutcome::Pushed) => GameChangeType::PlayerAndBoxMove,
        Some(MoveOutcome::CollectedKey { .. }) => GameChangeType::KeyCollected,
        Some(MoveOutcome::Blocked(_)) | None => GameChangeType::GravityOnly,
    };
    GameUpdate::NextState(next, change_type)
}
