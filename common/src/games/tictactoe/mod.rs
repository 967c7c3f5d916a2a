mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{best_moves, choose_move, evaluate_moves};
pub use game_state::{GameMode, RoundPhase, TicTacToeGameState};
pub use types::{BOARD_SIZE, CELL_COUNT, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{check_win, check_win_with_line, game_status, is_terminal, utility_for_x};
