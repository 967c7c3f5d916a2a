use std::time::{Duration, Instant};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Board, Position, choose_move};
use tictactoe_common::log;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub struct MoveRequest {
    pub round_id: u64,
    pub board: Board,
}

#[derive(Debug, Clone)]
pub struct MoveReply {
    pub round_id: u64,
    pub position: Option<Position>,
}

/// UI-side ends of the channels to the background computer player.
pub struct ComputerPlayer {
    request_tx: mpsc::UnboundedSender<MoveRequest>,
    reply_rx: mpsc::UnboundedReceiver<MoveReply>,
}

impl ComputerPlayer {
    pub fn new(
        request_tx: mpsc::UnboundedSender<MoveRequest>,
        reply_rx: mpsc::UnboundedReceiver<MoveReply>,
    ) -> Self {
        Self { request_tx, reply_rx }
    }

    /// Starts the search thread. `on_reply` runs after every reply is sent,
    /// which is where the UI asks for a repaint.
    pub fn spawn<F>(think_time: Duration, rng: SessionRng, on_reply: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();

        std::thread::spawn(move || {
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    log!("Failed to start computer player runtime: {}", e);
                    return;
                }
            };
            rt.block_on(computer_player_task(request_rx, reply_tx, think_time, rng, on_reply));
        });

        Self::new(request_tx, reply_rx)
    }

    pub fn request_move(&self, round_id: u64, board: Board) -> Result<(), String> {
        self.request_tx
            .send(MoveRequest { round_id, board })
            .map_err(|_| "Computer player is not running".to_string())
    }

    pub fn try_recv_reply(&mut self) -> Option<MoveReply> {
        self.reply_rx.try_recv().ok()
    }
}

pub async fn computer_player_task<F>(
    mut request_rx: mpsc::UnboundedReceiver<MoveRequest>,
    reply_tx: mpsc::UnboundedSender<MoveReply>,
    think_time: Duration,
    mut rng: SessionRng,
    on_reply: F,
) where
    F: Fn(),
{
    log!("Computer player started with seed {}", rng.seed());

    while let Some(request) = request_rx.recv().await {
        let started = Instant::now();
        let board = request.board;

        let search = tokio::task::spawn_blocking(move || {
            let position = choose_move(&board, &mut rng);
            (position, rng)
        })
        .await;

        let (position, returned_rng) = match search {
            Ok(result) => result,
            Err(e) => {
                log!("Computer move search failed: {}", e);
                break;
            }
        };
        rng = returned_rng;

        let search_time = started.elapsed();
        if search_time < think_time {
            tokio::time::sleep(think_time - search_time).await;
        }

        match position {
            Some(pos) => log!(
                "Round {}: computer chose {} after {:?} of search",
                request.round_id,
                pos,
                search_time
            ),
            None => log!("Round {}: no move available", request.round_id),
        }

        let reply = MoveReply {
            round_id: request.round_id,
            position,
        };
        if reply_tx.send(reply).is_err() {
            break;
        }
        on_reply();
    }

    log!("Computer player stopped");
}
