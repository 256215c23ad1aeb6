use crate::core::Direction::*;
use crate::core::*;
use crate::test::test_util::GameTestState;

#[test]
fn when_move_right_into_air_observes_move_right() {
    let level = LevelDescriptor::new(vec![vec![2, 2, 2], vec![2, 3, 0], vec![2, 2, 2]]);
    let mut state = level.build().unwrap();

    assert_eq!(state.attempt_move(Right), MoveOutcome::Moved);
    assert_eq!(state.player, Vec2::new(2, 1));
    assert_eq!(state.grid.get(Vec2::new(1, 1)), Some(Tile::Air));
    assert_eq!(state.grid.get(Vec2::new(2, 1)), Some(Tile::Player));

    let before = state.clone();
    assert_eq!(state.attempt_move(Right), MoveOutcome::Blocked(BlockReason::OutOfBounds));
    assert_eq!(state, before);
}

#[test]
fn walking_over_flux_leaves_air_behind() {
    let mut game = GameTestState::new(r#"
#@:#
####
"#);
    game.assert_move(Right);
    game.assert_matches(r#"
# @#
####
"#);
    game.assert_move(Left);
    game.assert_matches(r#"
#@ #
####
"#);
}

#[test]
fn walls_locks_and_blocked_cells_reject_the_move() {
    let mut game = GameTestState::new(r#"
#####
#Y@T#
##y##
#####
"#);
    assert_eq!(game.assert_blocked(Left), MoveOutcome::Blocked(BlockReason::Solid));
    assert_eq!(game.assert_blocked(Right), MoveOutcome::Blocked(BlockReason::Solid));
    assert_eq!(game.assert_blocked(Up), MoveOutcome::Blocked(BlockReason::Solid));
}

#[test]
fn when_push_right_pushes() {
    let mut game = GameTestState::new(r#"
#@$ #
#####
"#);
    assert_eq!(game.assert_move(Right), MoveOutcome::Pushed);
    game.assert_matches(r#"
# @$#
#####
"#);
    assert_eq!(game.game_state.player, Vec2::new(2, 0));
}

#[test]
fn when_push_left_pushes() {
    let mut game = GameTestState::new(r#"
# $@#
#####
"#);
    assert_eq!(game.assert_move(Left), MoveOutcome::Pushed);
    game.assert_matches(r#"
#$@ #
#####
"#);
}

#[test]
fn stones_push_like_boxes() {
    let mut game = GameTestState::new(r#"
#@o #
#####
"#);
    game.assert_move(Right);
    game.assert_matches(r#"
# @o#
#####
"#);
}

#[test]
fn when_block_pushed_into_block_remains_two_blocks() {
    let mut game = GameTestState::new(r#"
#@$o #
######
"#);
    assert_eq!(game.assert_blocked(Right), MoveOutcome::Blocked(BlockReason::NoSpaceBeyond));
    game.assert_matches(r#"
#@$o #
######
"#);
}

#[test]
fn push_into_flux_is_rejected() {
    let mut game = GameTestState::new(r#"
#@$:#
#####
"#);
    assert_eq!(game.assert_blocked(Right), MoveOutcome::Blocked(BlockReason::NoSpaceBeyond));
}

#[test]
fn push_against_wall_is_rejected() {
    let mut game = GameTestState::new(r#"
#@$#
####
"#);
    assert_eq!(game.assert_blocked(Right), MoveOutcome::Blocked(BlockReason::NoSpaceBeyond));
}

#[test]
fn unsupported_block_cannot_be_pushed() {
    let mut game = GameTestState::new(r#"
#@$ #
## ##
#####
"#);
    assert_eq!(game.assert_blocked(Right), MoveOutcome::Blocked(BlockReason::Unsupported));
}

#[test]
fn falling_block_cannot_be_pushed() {
    let mut game = GameTestState::new(r#"
#@& #
#####
"#);
    assert_eq!(game.assert_blocked(Right), MoveOutcome::Blocked(BlockReason::Falling));

    let mut game = GameTestState::new(r#"
# O@#
#####
"#);
    assert_eq!(game.assert_blocked(Left), MoveOutcome::Blocked(BlockReason::Falling));
}

#[test]
fn falling_block_becomes_pushable_once_settled() {
    let mut game = GameTestState::new(r#"
#@& #
#####
"#);
    game.assert_blocked(Right);
    assert_eq!(game.tick(), 0);
    game.assert_matches(r#"
#@$ #
#####
"#);
    assert_eq!(game.assert_move(Right), MoveOutcome::Pushed);
}

#[test]
fn vertical_moves_never_push() {
    let mut game = GameTestState::new(r#"
#@#
#$#
# #
###
"#);
    assert_eq!(game.assert_blocked(Down), MoveOutcome::Blocked(BlockReason::VerticalPush));

    let mut game = GameTestState::new(r#"
# #
#o#
#@#
###
"#);
    assert_eq!(game.assert_blocked(Up), MoveOutcome::Blocked(BlockReason::VerticalPush));
}

#[test]
fn player_walks_a_loop_and_returns() {
    let mut game = GameTestState::new(r#"
#####
#@  #
#   #
#####
"#);
    let original_state = game.game_state.clone();
    game.assert_moves(&[Right, Right, Down, Left, Left, Up]);
    assert_eq!(original_state, game.game_state);
}
