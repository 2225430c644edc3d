//! Wordle Duel - CLI
//!
//! Two-player word guessing game with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{Level, debug};
use wordle_duel::{
    commands::{run_simple, score_words},
    config::{DEFAULT_MAX_ATTEMPTS, GameConfig, RevealTiming},
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_duel",
    about = "Two-player word guessing game: one player sets the word, the other guesses it",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Attempts allowed per round
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Show scored rows immediately instead of tile by tile
    #[arg(long, global = true)]
    no_animation: bool,

    /// Log debug events to stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        target: String,

        /// Print only the emoji row
        #[arg(short, long)]
        emoji: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);

    let timing = if cli.no_animation {
        RevealTiming::instant()
    } else {
        RevealTiming::default()
    };
    let config = GameConfig::new(cli.max_attempts, timing)?;
    debug!(?config, "configuration loaded");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(&config),
        Commands::Score {
            guess,
            target,
            emoji,
        } => run_score_command(&guess, &target, emoji),
    }
}

/// Log to stderr so stdout stays clean for the game itself
fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_score_command(guess: &str, target: &str, emoji: bool) -> Result<()> {
    let result = score_words(guess, target)?;
    print_score_result(&result, emoji);
    Ok(())
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use wordle_duel::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}
