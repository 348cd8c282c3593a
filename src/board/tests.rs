use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::X.opponent(), Player::O);
    assert_eq!(Player::O.opponent(), Player::X);
}

#[test]
fn test_player_for_step() {
    assert_eq!(Player::for_step(0), Player::X);
    assert_eq!(Player::for_step(1), Player::O);
    assert_eq!(Player::for_step(8), Player::X);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.row, 1);
    assert_eq!(pos.col, 2);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(4).unwrap();
    assert_eq!(pos2, pos);
    assert_eq!(Pos::from_index(9), None);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 2).to_index(), 2);
    assert_eq!(Pos::new(2, 0).to_index(), 6);
    assert_eq!(Pos::new(2, 2).to_index(), 8);
}

#[test]
fn test_pos_coordinate_is_one_based() {
    assert_eq!(Pos::from_index(0).unwrap().coordinate(), Coordinate { x: 1, y: 1 });
    assert_eq!(Pos::from_index(5).unwrap().coordinate(), Coordinate { x: 2, y: 3 });
    assert_eq!(Pos::from_index(7).unwrap().coordinate().to_string(), "(3, 2)");
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert_eq!(Pos::all().count(), TOTAL_CELLS);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_with_mark_leaves_original_untouched() {
    let board = Board::new();
    let next = board.with_mark(Pos::new(1, 1), Player::X);

    assert!(board.is_board_empty());
    assert_eq!(next.get(Pos::new(1, 1)), Cell::X);
    assert_eq!(next.mark_count(), 1);
}

#[test]
fn test_board_full() {
    let mut board = Board::new();
    for (i, pos) in Pos::all().enumerate() {
        assert!(!board.is_full());
        board = board.with_mark(pos, Player::for_step(i));
    }
    assert!(board.is_full());
    assert_eq!(board.get_index(9), None);
}

#[test]
fn test_board_display() {
    let board = Board::new()
        .with_mark(Pos::new(0, 0), Player::X)
        .with_mark(Pos::new(2, 2), Player::O);
    assert_eq!(board.to_string(), "X..\n...\n..O");
}
