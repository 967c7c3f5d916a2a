use std::fmt;

use super::types::{BOARD_SIZE, Mark, Position};

/// A 3x3 grid of marks.
///
/// `Board` is a plain `Copy` value: `apply_move` hands back a new board and
/// leaves `self` untouched, so search branches never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    /// Returns `(x_count, o_count)`.
    pub fn mark_counts(&self) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for &cell in self.cells.iter().flatten() {
            match cell {
                Mark::X => x += 1,
                Mark::O => o += 1,
                Mark::Empty => {}
            }
        }
        (x, o)
    }

    pub fn filled_count(&self) -> usize {
        let (x, o) = self.mark_counts();
        x + o
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell == Mark::Empty)
    }

    /// The mark that moves next, derived from the mark counts alone.
    /// Equal counts mean `X`; otherwise the side with fewer marks.
    pub fn next_player(&self) -> Mark {
        let (x, o) = self.mark_counts();
        if x <= o { Mark::X } else { Mark::O }
    }

    /// Empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &cell) in line.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.get(pos) == Some(Mark::Empty)
    }

    /// Places `next_player()` at `pos` on a copy of this board.
    pub fn apply_move(&self, pos: Position) -> Result<Board, String> {
        match self.get(pos) {
            None => Err(format!("Position {} is out of bounds", pos)),
            Some(Mark::Empty) => {
                let mut next = *self;
                next.cells[pos.row][pos.col] = self.next_player();
                Ok(next)
            }
            Some(_) => Err(format!("Cell {} is already marked", pos)),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let symbols: Vec<&str> = line.iter().map(|mark| mark.symbol()).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_has_nine_moves_in_row_major_order() {
        let moves = Board::empty().legal_moves();

        assert_eq!(moves.len(), 9);
        for (index, pos) in moves.iter().enumerate() {
            assert_eq!(*pos, Position::from_index(index));
        }
    }

    #[test]
    fn test_next_player_is_x_on_equal_counts() {
        assert_eq!(Board::empty().next_player(), Mark::X);

        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(board.next_player(), Mark::X);
    }

    #[test]
    fn test_next_player_is_side_with_fewer_marks() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        assert_eq!(board.next_player(), Mark::O);

        let board = Board::from_rows([[O, E, E], [E, E, E], [E, E, E]]);
        assert_eq!(board.next_player(), Mark::X);
    }

    #[test]
    fn test_apply_move_does_not_mutate_input() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let before = board;

        let next = board.apply_move(Position::new(2, 2)).unwrap();

        assert_eq!(board, before);
        assert_eq!(next.get(Position::new(2, 2)), Some(Mark::X));
        assert_eq!(board.get(Position::new(2, 2)), Some(Mark::Empty));
    }

    #[test]
    fn test_apply_move_round_trip_from_empty() {
        let board = Board::empty()
            .apply_move(Position::new(0, 0))
            .and_then(|b| b.apply_move(Position::new(1, 1)))
            .unwrap();

        assert_eq!(board, Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]));
    }

    #[test]
    fn test_apply_move_rejects_marked_cell() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);

        let result = board.apply_move(Position::new(0, 0));

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("already marked"));
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let result = Board::empty().apply_move(Position::new(3, 0));

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("out of bounds"));
    }

    #[test]
    fn test_mark_counts_and_fullness() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, O]]);

        assert_eq!(board.mark_counts(), (4, 5));
        assert_eq!(board.filled_count(), 9);
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_display_renders_grid() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);

        assert_eq!(board.to_string(), "X| | \n-+-+-\n |O| \n-+-+-\n | |X");
    }
}
