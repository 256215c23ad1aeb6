use crate::core::Direction::*;
use crate::core::*;
use crate::test::test_util::GameTestState;

#[test]
fn key_removes_every_lock_of_its_color_and_only_those() {
    let mut game = GameTestState::new(r#"
#@y Y#
#Y T #
######
"#);
    let outcome = game.assert_move(Right);
    assert_eq!(outcome, MoveOutcome::CollectedKey { color: KeyColor::Yellow, locks_removed: 2 });
    game.assert_matches(r#"
# @  #
#  T #
######
"#);
    assert_eq!(game.game_state.player, Vec2::new(2, 0));
}

#[test]
fn key_without_matching_locks_is_still_collected() {
    let mut game = GameTestState::new(r#"
#@tY#
#####
"#);
    let outcome = game.assert_move(Right);
    assert_eq!(outcome, MoveOutcome::CollectedKey { color: KeyColor::Teal, locks_removed: 0 });
    game.assert_matches(r#"
# @Y#
#####
"#);
    game.assert_blocked(Right);
}

#[test]
fn unlocked_cell_becomes_walkable() {
    let mut game = GameTestState::new(r#"
#@tT #
######
"#);
    game.assert_blocked(Down);
    game.assert_moves(&[Right, Right, Right]);
    game.assert_matches(r#"
#   @#
######
"#);
}

#[test]
fn keys_can_be_collected_vertically() {
    let mut game = GameTestState::new(r#"
#@#
#y#
#Y#
# #
###
"#);
    game.assert_moves(&[Down, Down, Down]);
    game.assert_matches(r#"
# #
# #
# #
#@#
###
"#);
}

#[test]
fn removed_lock_lets_blocks_fall() {
    let mut game = GameTestState::new(r#"
#@y#
#o #
#Y #
####
"#);
    game.assert_move(Right);
    assert_eq!(game.tick(), 1);
    game.assert_matches(r#"
# @#
#  #
#O #
####
"#);
}

#[test]
fn remove_all_of_lock_color_counts_removals() {
    let mut grid = Grid::from_codes(&[vec![9, 11, 9], vec![11, 9, 2]]).unwrap();
    assert_eq!(grid.remove_all_of_lock_color(KeyColor::Yellow), 3);
    assert_eq!(grid.remove_all_of_lock_color(KeyColor::Yellow), 0);
    assert_eq!(grid.get(Vec2::new(1, 0)), Some(Tile::Lock(KeyColor::Teal)));
    assert_eq!(grid.get(Vec2::new(0, 1)), Some(Tile::Lock(KeyColor::Teal)));
    assert!(grid.is_air(Vec2::new(0, 0)));
}
