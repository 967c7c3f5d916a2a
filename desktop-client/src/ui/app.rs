use std::time::{Duration, Instant};
use tictactoe_common::games::tictactoe::{
    GameMode, GameStatus, Mark, Position, RoundPhase, TicTacToeGameState,
};
use tictactoe_common::log;

use crate::computer_player::{ComputerPlayer, MoveReply};
use crate::config::ClientConfig;

use super::board_view::BoardView;

const GAME_OVER_REPAINT_INTERVAL: Duration = Duration::from_millis(50);
const START_BUTTON_SIZE: [f32; 2] = [220.0, 40.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Start,
    Playing,
    GameOver { since: Instant },
}

pub struct TicTacToeApp {
    config: ClientConfig,
    computer: ComputerPlayer,
    board_view: BoardView,
    round: Option<TicTacToeGameState>,
    round_id: u64,
    awaiting_reply: bool,
    screen: Screen,
    banner: String,
}

impl TicTacToeApp {
    pub fn new(config: ClientConfig, computer: ComputerPlayer) -> Self {
        Self {
            config,
            computer,
            board_view: BoardView::new(),
            round: None,
            round_id: 0,
            awaiting_reply: false,
            screen: Screen::Start,
            banner: "Play Game".to_string(),
        }
    }

    pub fn start_round(&mut self, mode: GameMode) {
        let round = match TicTacToeGameState::new(mode) {
            Ok(round) => round,
            Err(e) => {
                log!("Cannot start round: {}", e);
                return;
            }
        };

        self.round_id += 1;
        self.awaiting_reply = false;
        self.round = Some(round);
        self.screen = Screen::Playing;
        log!("Round {} started: {}", self.round_id, describe_mode(mode));

        self.after_move();
    }

    pub fn handle_click(&mut self, pos: Position) {
        let Some(round) = self.round.as_mut() else {
            return;
        };
        if let Err(e) = round.place_mark(pos) {
            log!("Rejected move {}: {}", pos, e);
            return;
        }
        self.after_move();
    }

    pub fn handle_reply(&mut self, reply: MoveReply) {
        if reply.round_id != self.round_id {
            log!("Ignoring computer reply for stale round {}", reply.round_id);
            return;
        }
        self.awaiting_reply = false;

        let (Some(round), Some(pos)) = (self.round.as_mut(), reply.position) else {
            return;
        };
        if let Err(e) = round.apply_computer_move(pos) {
            log!("Rejected computer move {}: {}", pos, e);
            return;
        }
        if let Some(mark) = round.computer_mark() {
            log!("Computer placed {} at {}", mark, pos);
        }
        self.after_move();
    }

    fn after_move(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };

        if let RoundPhase::Over(status) = round.phase() {
            self.banner = outcome_text(status);
            self.screen = Screen::GameOver { since: Instant::now() };
            log!("Round {} over: {}", self.round_id, self.banner);
        } else if round.is_computer_turn() && !self.awaiting_reply {
            match self.computer.request_move(self.round_id, *round.board()) {
                Ok(()) => self.awaiting_reply = true,
                Err(e) => log!("{}", e),
            }
        }
    }

    fn poll_computer(&mut self) {
        while let Some(reply) = self.computer.try_recv_reply() {
            self.handle_reply(reply);
        }
    }

    fn update_screen(&mut self) {
        if let Screen::GameOver { since } = self.screen
            && since.elapsed() >= self.config.timing.game_over_display()
        {
            self.screen = Screen::Start;
        }
    }

    fn accepts_input(&self) -> bool {
        self.screen == Screen::Playing
            && matches!(
                self.round.as_ref().map(|round| round.phase()),
                Some(RoundPhase::AwaitingHuman(_))
            )
    }

    pub fn status_text(&self) -> String {
        match self.round.as_ref().map(|round| round.phase()) {
            None => "Choose a game".to_string(),
            Some(RoundPhase::AwaitingHuman(mark)) => format!("{}'s turn", mark),
            Some(RoundPhase::AwaitingComputer(_)) => "Computer's turn".to_string(),
            Some(RoundPhase::Over(status)) => outcome_text(status),
        }
    }

    fn show_start_screen(&mut self, ctx: &egui::Context) {
        let mut chosen = None;

        egui::Window::new("start_screen")
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(egui::RichText::new(&self.banner).size(24.0).strong());
                    ui.add_space(10.0);

                    if ui.add_sized(START_BUTTON_SIZE, egui::Button::new("Play as X")).clicked() {
                        chosen = Some(GameMode::VsComputer { human: Mark::X });
                    }
                    if ui.add_sized(START_BUTTON_SIZE, egui::Button::new("Play as O")).clicked() {
                        chosen = Some(GameMode::VsComputer { human: Mark::O });
                    }
                    if ui
                        .add_sized(START_BUTTON_SIZE, egui::Button::new("Play 2 player game"))
                        .clicked()
                    {
                        chosen = Some(GameMode::TwoPlayer);
                    }
                });
            });

        if let Some(mode) = chosen {
            self.start_round(mode);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_computer();
        self.update_screen();

        let status = self.status_text();
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(status);
            });
        });

        let accepts_input = self.accepts_input();
        let board = self.round.as_ref().map(|round| *round.board()).unwrap_or_default();
        let winning_line = self.round.as_ref().and_then(|round| round.winning_line());
        let board_view = &mut self.board_view;
        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| board_view.show(ui, &board, accepts_input, winning_line))
            .inner;

        if let Some(pos) = clicked {
            self.handle_click(pos);
        }

        if self.screen == Screen::Start {
            self.show_start_screen(ctx);
        }

        if self.awaiting_reply {
            ctx.set_cursor_icon(egui::CursorIcon::Wait);
        }
        if matches!(self.screen, Screen::GameOver { .. }) {
            ctx.request_repaint_after(GAME_OVER_REPAINT_INTERVAL);
        }
    }
}

fn outcome_text(status: GameStatus) -> String {
    match status.winner() {
        Some(mark) => format!("{} wins", mark),
        None => "Tie Game".to_string(),
    }
}

fn describe_mode(mode: GameMode) -> String {
    match mode {
        GameMode::VsComputer { human } => format!("human plays {} against the computer", human),
        GameMode::TwoPlayer => "two players".to_string(),
    }
}
