use crate::games::SessionRng;
use super::board::Board;
use super::types::{CELL_COUNT, Mark, Position};
use super::win_detector::{is_terminal, utility_for_x};

/// Picks a move for `board.next_player()`, or `None` once the game is over.
pub fn choose_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    if is_terminal(board) {
        return None;
    }

    let available_moves = board.legal_moves();
    if available_moves.len() == CELL_COUNT {
        return rng.choose(&available_moves).copied();
    }

    let top_moves = best_moves(board);
    rng.choose(&top_moves).copied()
}

/// All moves sharing the highest minimax value, in row-major order.
pub fn best_moves(board: &Board) -> Vec<Position> {
    let mut top_moves = Vec::new();
    let mut top_value = i32::MIN;

    for (pos, value) in evaluate_moves(board) {
        if value > top_value {
            top_value = value;
            top_moves.clear();
            top_moves.push(pos);
        } else if value == top_value {
            top_moves.push(pos);
        }
    }

    top_moves
}

/// Minimax value of every legal move for the player about to move.
pub fn evaluate_moves(board: &Board) -> Vec<(Position, i32)> {
    if is_terminal(board) {
        return Vec::new();
    }

    let bot_mark = board.next_player();
    let mut values = Vec::new();
    for pos in board.legal_moves() {
        if let Ok(child) = board.apply_move(pos) {
            values.push((pos, minimax(&child, false, bot_mark)));
        }
    }
    values
}

fn minimax(board: &Board, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if is_terminal(board) {
        let utility = utility_for_x(board);
        return if bot_mark == Mark::X { utility } else { -utility };
    }

    let moves = board.legal_moves();

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for pos in moves {
            if let Ok(child) = board.apply_move(pos) {
                max_eval = max_eval.max(minimax(&child, false, bot_mark));
            }
        }
        if max_eval == i32::MIN { 0 } else { max_eval }
    } else {
        let mut min_eval = i32::MAX;
        for pos in moves {
            if let Ok(child) = board.apply_move(pos) {
                min_eval = min_eval.min(minimax(&child, true, bot_mark));
            }
        }
        if min_eval == i32::MAX { 0 } else { min_eval }
    }
}
