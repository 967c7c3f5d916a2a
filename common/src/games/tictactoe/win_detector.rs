use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};

type Line = [(usize, usize); 3];

// Scan order matters when reporting a line: rows, columns, then diagonals.
const LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in &LINES {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let mark = board.at(r0, c0);
        if mark == Mark::Empty {
            continue;
        }
        if board.at(r1, c1) == mark && board.at(r2, c2) == mark {
            return Some(WinningLine::new(
                mark,
                Position::new(r0, c0),
                Position::new(r2, c2),
            ));
        }
    }
    None
}

pub fn is_terminal(board: &Board) -> bool {
    check_win(board).is_some() || board.is_full()
}

/// Outcome from X's point of view: `1` X won, `-1` O won, `0` otherwise.
pub fn utility_for_x(board: &Board) -> i32 {
    match check_win(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        _ => 0,
    }
}

pub fn game_status(board: &Board) -> GameStatus {
    match check_win(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        Some(Mark::Empty) => unreachable!(),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark::{Empty as E, O, X};

    fn has_uniform_line(board: &Board) -> bool {
        LINES.iter().any(|line| {
            let first = board.at(line[0].0, line[0].1);
            first != Mark::Empty && line.iter().all(|&(r, c)| board.at(r, c) == first)
        })
    }

    #[test]
    fn test_top_row_win() {
        let board = Board::from_rows([[X, X, X], [E, O, O], [E, E, E]]);

        assert_eq!(check_win(&board), Some(Mark::X));
        assert!(is_terminal(&board));
        assert_eq!(utility_for_x(&board), 1);
        assert_eq!(game_status(&board), GameStatus::XWon);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);

        assert_eq!(check_win(&board), None);
        assert!(is_terminal(&board));
        assert_eq!(utility_for_x(&board), 0);
        assert_eq!(game_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_column_and_diagonal_wins_for_o() {
        let column = Board::from_rows([[X, O, X], [E, O, E], [X, O, E]]);
        assert_eq!(check_win(&column), Some(Mark::O));
        assert_eq!(utility_for_x(&column), -1);

        let anti_diagonal = Board::from_rows([[X, X, O], [E, O, E], [O, E, X]]);
        assert_eq!(check_win(&anti_diagonal), Some(Mark::O));
        assert_eq!(game_status(&anti_diagonal), GameStatus::OWon);
    }

    #[test]
    fn test_in_progress_board_is_not_terminal() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);

        assert_eq!(check_win(&board), None);
        assert!(!is_terminal(&board));
        assert_eq!(game_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_winning_line_prefers_rows_over_columns_and_diagonals() {
        // Row 0, column 0 and the main diagonal are all X here.
        let board = Board::from_rows([[X, X, X], [X, X, O], [X, O, O]]);

        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(0, 2));
    }

    #[test]
    fn test_winning_line_prefers_columns_over_diagonals() {
        // Column 0 and the main diagonal are both X, no row is complete.
        let board = Board::from_rows([[X, O, O], [X, X, O], [X, O, X]]);

        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Position::new(0, 0));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_winning_line_reports_anti_diagonal_endpoints() {
        let board = Board::from_rows([[X, X, O], [E, O, E], [O, E, X]]);

        let line = check_win_with_line(&board).unwrap();

        assert_eq!(line.start, Position::new(0, 2));
        assert_eq!(line.end, Position::new(2, 0));
    }

    #[test]
    fn test_winner_iff_uniform_line_over_all_boards() {
        let marks = [Mark::Empty, Mark::X, Mark::O];
        for code in 0..3usize.pow(9) {
            let mut rows = [[Mark::Empty; 3]; 3];
            let mut rest = code;
            for index in 0..9 {
                let pos = Position::from_index(index);
                rows[pos.row][pos.col] = marks[rest % 3];
                rest /= 3;
            }
            let board = Board::from_rows(rows);

            assert_eq!(check_win(&board).is_some(), has_uniform_line(&board));
            assert_eq!(
                is_terminal(&board),
                check_win(&board).is_some() || board.legal_moves().is_empty()
            );
        }
    }
}
