use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::{check_win_with_line, game_status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    VsComputer { human: Mark },
    TwoPlayer,
}

/// Where a round stands. Always derived from the board and the mode, never
/// stored, so it cannot drift out of sync with the marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingHuman(Mark),
    AwaitingComputer(Mark),
    Over(GameStatus),
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub mode: GameMode,
    pub last_move: Option<Position>,
    board: Board,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Result<Self, String> {
        if let GameMode::VsComputer { human } = mode
            && human == Mark::Empty
        {
            return Err("Human player must play X or O".to_string());
        }

        Ok(Self {
            mode,
            last_move: None,
            board: Board::empty(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.board.next_player()
    }

    pub fn status(&self) -> GameStatus {
        game_status(&self.board)
    }

    pub fn phase(&self) -> RoundPhase {
        let status = self.status();
        if status.is_over() {
            return RoundPhase::Over(status);
        }

        let mark = self.current_mark();
        match self.mode {
            GameMode::TwoPlayer => RoundPhase::AwaitingHuman(mark),
            GameMode::VsComputer { human } if human == mark => RoundPhase::AwaitingHuman(mark),
            GameMode::VsComputer { .. } => RoundPhase::AwaitingComputer(mark),
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        matches!(self.phase(), RoundPhase::AwaitingComputer(_))
    }

    /// The computer's mark, if this round has one.
    pub fn computer_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::VsComputer { human } => human.opponent(),
            GameMode::TwoPlayer => None,
        }
    }

    pub fn place_mark(&mut self, pos: Position) -> Result<(), String> {
        match self.phase() {
            RoundPhase::Over(_) => Err("Game is already over".to_string()),
            RoundPhase::AwaitingComputer(_) => Err("Not your turn".to_string()),
            RoundPhase::AwaitingHuman(_) => self.apply(pos),
        }
    }

    pub fn apply_computer_move(&mut self, pos: Position) -> Result<(), String> {
        match self.phase() {
            RoundPhase::Over(_) => Err("Game is already over".to_string()),
            RoundPhase::AwaitingHuman(_) => Err("Computer moved out of turn".to_string()),
            RoundPhase::AwaitingComputer(_) => self.apply(pos),
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    fn apply(&mut self, pos: Position) -> Result<(), String> {
        self.board = self.board.apply_move(pos)?;
        self.last_move = Some(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            state.place_mark(Position::new(row, col)).unwrap();
        }
    }

    #[test]
    fn test_two_player_round_alternates_marks() {
        let mut state = TicTacToeGameState::new(GameMode::TwoPlayer).unwrap();

        assert_eq!(state.phase(), RoundPhase::AwaitingHuman(Mark::X));
        state.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(state.phase(), RoundPhase::AwaitingHuman(Mark::O));
        state.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(state.phase(), RoundPhase::AwaitingHuman(Mark::X));
        assert_eq!(state.last_move, Some(Position::new(1, 1)));
        assert_eq!(state.computer_mark(), None);
    }

    #[test]
    fn test_computer_opens_when_human_plays_o() {
        let mut state = TicTacToeGameState::new(GameMode::VsComputer { human: Mark::O }).unwrap();

        assert_eq!(state.phase(), RoundPhase::AwaitingComputer(Mark::X));
        assert_eq!(state.computer_mark(), Some(Mark::X));
        assert!(state.place_mark(Position::new(0, 0)).is_err());

        state.apply_computer_move(Position::new(1, 1)).unwrap();

        assert_eq!(state.phase(), RoundPhase::AwaitingHuman(Mark::O));
        assert!(state.apply_computer_move(Position::new(0, 0)).is_err());
    }

    #[test]
    fn test_human_x_hands_turn_to_computer() {
        let mut state = TicTacToeGameState::new(GameMode::VsComputer { human: Mark::X }).unwrap();

        state.place_mark(Position::new(2, 2)).unwrap();

        assert!(state.is_computer_turn());
        assert_eq!(state.phase(), RoundPhase::AwaitingComputer(Mark::O));
    }

    #[test]
    fn test_round_ends_on_win_and_rejects_further_moves() {
        let mut state = TicTacToeGameState::new(GameMode::TwoPlayer).unwrap();

        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(state.phase(), RoundPhase::Over(GameStatus::XWon));
        let line = state.winning_line().unwrap();
        assert_eq!((line.start, line.end), (Position::new(0, 0), Position::new(0, 2)));
        assert_eq!(
            state.place_mark(Position::new(2, 2)).unwrap_err(),
            "Game is already over"
        );
    }

    #[test]
    fn test_round_ends_in_draw() {
        let mut state = TicTacToeGameState::new(GameMode::TwoPlayer).unwrap();

        play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );

        assert_eq!(state.phase(), RoundPhase::Over(GameStatus::Draw));
        assert!(state.winning_line().is_none());
    }

    #[test]
    fn test_occupied_cell_leaves_state_untouched() {
        let mut state = TicTacToeGameState::new(GameMode::TwoPlayer).unwrap();
        play(&mut state, &[(1, 1)]);
        let before = *state.board();

        assert!(state.place_mark(Position::new(1, 1)).is_err());
        assert_eq!(*state.board(), before);
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_empty_mark_is_not_a_side() {
        assert!(TicTacToeGameState::new(GameMode::VsComputer { human: Mark::Empty }).is_err());
    }
}
