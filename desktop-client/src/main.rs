mod computer_player;
mod config;
mod ui;

use clap::Parser;
use tictactoe_common::games::SessionRng;
use tictactoe_common::{log, logger};

use computer_player::ComputerPlayer;
use config::{ClientConfig, DEFAULT_CONFIG_FILE, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_desktop")]
struct Args {
    /// Path to the YAML config file. Created with defaults if missing.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Seed for the computer's move randomness. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(path: &str) -> ClientConfig {
    match get_config_manager(path).get_or_create_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Using default config, {} could not be loaded: {}", path, e);
            ClientConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Desktop".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args.config);
    let rng = SessionRng::from_optional_seed(args.seed.or(config.seed));
    let think_time = config.timing.computer_think_time();
    let window = config.window.clone();

    log!("Starting Tic Tac Toe with seed {}", rng.seed());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width as f32, window.height as f32])
            .with_min_inner_size([window.min_width as f32, window.min_height as f32])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| {
            let repaint_ctx = cc.egui_ctx.clone();
            let computer = ComputerPlayer::spawn(think_time, rng, move || repaint_ctx.request_repaint());
            Ok(Box::new(TicTacToeApp::new(config, computer)))
        }),
    )?;

    log!("Window closed");
    Ok(())
}
