//! Draw and game-over detection

use crate::board::Board;

use super::win::evaluate;

/// Board has no empty cell
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Full board without a completed line
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !evaluate(board).is_win()
}

/// No further move is possible: someone won or the board is full
pub fn is_game_over(board: &Board) -> bool {
    evaluate(board).is_win() || is_full(board)
}
