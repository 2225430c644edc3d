//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, Letter, LetterStatus, Word};
use crate::game::{Round, RoundState};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÑ", "ZXCVBNM"];

/// Letters of one keyboard row
pub fn keyboard_row(row: &str) -> impl Iterator<Item = Letter> + '_ {
    row.chars().filter_map(Letter::new)
}

/// A single letter as a colored tile, e.g. `" A "` on green
#[must_use]
pub fn tile(letter: Letter, status: Option<LetterStatus>) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => text.black().on_green().bold(),
        Some(LetterStatus::Present) => text.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| tile(letter, Some(status)).to_string())
        .collect()
}

/// The keyboard as three indented lines of colored keys
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = keyboard_row(row)
                .map(|letter| tile(letter, keyboard.status(letter)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Spoiler-free summary of a finished round
///
/// The first line is `"<attempts>/<max>"`, or `"X/<max>"` when the word was
/// not found, followed by one emoji line per attempt.
#[must_use]
pub fn share_grid(round: &Round) -> String {
    let score = if round.state() == RoundState::Won {
        round.attempts().len().to_string()
    } else {
        "X".to_string()
    };

    let mut lines = vec![format!("{score}/{}", round.max_attempts())];
    lines.extend(round.attempts().iter().map(|a| a.feedback.to_emoji()));
    lines.join("\n")
}

/// Bar of `width` cells, `value / max` of them filled
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { (value * width / max).min(width) };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn letters(text: &str) -> Vec<Letter> {
        text.chars().filter_map(Letter::new).collect()
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut all: Vec<Letter> = KEYBOARD_ROWS.iter().copied().flat_map(keyboard_row).collect();
        all.sort();
        assert_eq!(all, Letter::all().collect::<Vec<_>>());
    }

    #[test]
    fn share_grid_for_win() {
        let mut round = Round::new(&GameConfig::default());
        round.configure_word("alarm").unwrap();
        round.submit_attempt(&letters("llama")).unwrap();
        round.submit_attempt(&letters("alarm")).unwrap();

        assert_eq!(share_grid(&round), "2/6\n⬜🟩🟩🟨🟨\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_for_loss() {
        let mut round = Round::new(&GameConfig::new(1, Default::default()).unwrap());
        round.configure_word("sol").unwrap();
        round.submit_attempt(&letters("mar")).unwrap();

        assert_eq!(share_grid(&round), "X/1\n⬜⬜⬜");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 6, 6), "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(6, 6, 6), "██████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(3, 6, 10), "█████░░░░░");
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn feedback_row_keeps_letters() {
        colored::control::set_override(false);
        let guess = Word::new("sol").unwrap();
        let feedback = Feedback::from_str("G-Y").unwrap();
        assert_eq!(feedback_row(&guess, &feedback), " S  O  L ");
    }
}
