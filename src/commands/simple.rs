//! Simple line-based mode
//!
//! Two players share one terminal: the first types the secret word, the
//! screen is cleared, and the second types one guess per line.

use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{Round, RoundError, RoundState, Statistics};
use crate::output::{write_board, write_round_result};
use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(config, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Run the simple mode on arbitrary input and output
///
/// Commands start with `:` so they never collide with a word. Ends on
/// `:quit` or end of input and returns the session statistics.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with(
    config: &GameConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Statistics> {
    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║            Wordle Duel - Simple Mode          ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Player 1 picks a secret word, player 2 has {} attempts.",
        config.max_attempts()
    )?;
    writeln!(out, "Commands: ':quit' to exit, ':reset' to pick a new word\n")?;

    let mut round = Round::new(config);
    let mut stats = Statistics::default();

    loop {
        match round.state() {
            RoundState::Setup => {
                let Some(line) = prompt(input, out, "Secret word (player 1)")? else {
                    break;
                };
                if command(&line) == Some(Command::Quit) {
                    break;
                }
                match round.configure_word(&line) {
                    Ok(word) => {
                        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
                        writeln!(
                            out,
                            "The word has {} letters. You have {} attempts.\n",
                            word.len().to_string().bright_cyan().bold(),
                            round.attempts_remaining()
                        )?;
                    }
                    Err(e) => writeln!(out, "{} {e}\n", "❌".red())?,
                }
            }
            RoundState::InProgress => {
                let label = format!(
                    "Attempt {}/{}",
                    round.attempts().len() + 1,
                    round.max_attempts()
                );
                let Some(line) = prompt(input, out, &label)? else {
                    break;
                };
                match command(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Reset) => {
                        round.reset();
                        writeln!(out, "\n🔄 New round!\n")?;
                    }
                    None => submit_line(&mut round, &line, out)?,
                }
            }
            RoundState::Won | RoundState::Exhausted => {
                stats.record(&round);
                write_round_result(out, &round)?;
                writeln!(
                    out,
                    "Games: {} | Win rate: {:.0}%\n",
                    stats.total_games,
                    stats.win_rate()
                )?;

                let answer = prompt(input, out, "Play again? (yes/no)")?.unwrap_or_default();
                if matches!(answer.to_lowercase().as_str(), "yes" | "y" | "si" | "sí") {
                    round.reset();
                } else {
                    break;
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    out.flush()?;
    Ok(stats)
}

fn submit_line(round: &mut Round, line: &str, out: &mut impl Write) -> Result<()> {
    let guess = match Word::new(line) {
        Ok(guess) => guess,
        Err(e) => {
            writeln!(out, "{} {e}\n", "❌".red())?;
            return Ok(());
        }
    };

    match round.submit_attempt(guess.letters()) {
        Ok(outcome) => {
            debug!(state = %outcome.state, "simple mode attempt");
            write_board(out, round)?;
            if outcome.state == RoundState::InProgress {
                let left = outcome.attempts_remaining;
                writeln!(out, "{left} attempt{} left\n", if left == 1 { "" } else { "s" })?;
            }
        }
        Err(RoundError::IncompleteAttempt(e)) => {
            writeln!(
                out,
                "{} The word has {} letters, you typed {}\n",
                "❌".red(),
                e.expected,
                e.filled
            )?;
        }
        Err(e) => writeln!(out, "{} {e}\n", "❌".red())?,
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Reset,
}

/// Parse a `:`-prefixed command; anything else is a word
fn command(line: &str) -> Option<Command> {
    let name = line.strip_prefix(':')?.trim().to_lowercase();
    match name.as_str() {
        "quit" | "q" | "exit" => Some(Command::Quit),
        "reset" | "r" => Some(Command::Reset),
        _ => None,
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RevealTiming;
    use std::io::Cursor;

    fn play(config: &GameConfig, script: &str) -> (Statistics, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let stats = run_simple_with(config, &mut input, &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn simple_mode_win() {
        let (stats, output) = play(&GameConfig::default(), "alarm\nllama\nalarm\nno\n");

        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, vec![0, 1]);
        assert!(output.contains("The word has 5 letters"));
        assert!(output.contains("The word was: ALARM"));
        assert!(output.contains("2/6"));
    }

    #[test]
    fn simple_mode_loss_and_replay() {
        let config = GameConfig::new(2, RevealTiming::instant()).unwrap();
        let (stats, output) = play(&config, "sol\nmar\nmar\nyes\nsol\nsol\nn\n");

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert!(output.contains("Game over"));
        assert!(output.contains("X/2"));
    }

    #[test]
    fn simple_mode_reports_bad_input() {
        let (stats, output) = play(&GameConfig::default(), "\n12\ngato\nga\ng4to\n:quit\n");

        assert_eq!(stats.total_games, 0);
        assert!(output.contains("Word must contain at least one letter"));
        assert!(output.contains("The word has 4 letters, you typed 2"));
        assert!(output.contains("found '4' at position 1"));
    }

    #[test]
    fn simple_mode_stops_at_end_of_input() {
        let (stats, output) = play(&GameConfig::default(), "gato\npato\n");
        assert_eq!(stats.total_games, 0);
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn command_words_are_playable_secrets() {
        for word in ["exit", "reset", "quit", "q"] {
            let (stats, output) = play(&GameConfig::default(), &format!("{word}\n{word}\nno\n"));
            assert_eq!(stats.games_won, 1, "secret {word:?} should be winnable");
            assert!(output.contains(&format!("The word was: {}", word.to_uppercase())));
        }
    }

    #[test]
    fn colon_commands_quit_and_reset() {
        let (stats, output) = play(&GameConfig::default(), "gato\n:reset\nsol\n:q\n");
        assert_eq!(stats.total_games, 0);
        assert!(output.contains("New round"));
        assert!(output.contains("The word has 3 letters"));

        assert_eq!(command(":Quit"), Some(Command::Quit));
        assert_eq!(command("quit"), None);
        assert_eq!(command(":nope"), None);
    }

    #[test]
    fn last_attempt_message_is_singular() {
        let config = GameConfig::new(2, RevealTiming::instant()).unwrap();
        let (_, output) = play(&config, "sol\nmar\n:q\n");
        assert!(output.contains("1 attempt left"));
        assert!(!output.contains("1 attempts left"));
    }
}
