//! Display functions for command results

use super::formatters::{feedback_row, keyboard_lines, share_grid};
use crate::commands::ScoreResult;
use crate::game::{Round, RoundState};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult, emoji: bool) {
    if emoji {
        println!("{}", result.feedback.to_emoji());
        return;
    }

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.to_string().bright_yellow().bold(),
        result.guess.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", feedback_row(&result.guess, &result.feedback));
    println!(
        "\n  {} correct, {} present",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
    if result.feedback.is_win() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Write every scored row of the round followed by the keyboard
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_board(out: &mut impl Write, round: &Round) -> io::Result<()> {
    writeln!(out)?;
    for (i, attempt) in round.attempts().iter().enumerate() {
        writeln!(
            out,
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            feedback_row(&attempt.guess, &attempt.feedback)
        )?;
    }
    writeln!(out)?;
    for line in keyboard_lines(round.keyboard()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}

/// Write the end-of-round banner, solution and share grid
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_round_result(out: &mut impl Write, round: &Round) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    match round.state() {
        RoundState::Won => writeln!(
            out,
            "{}",
            "   🎉 Congratulations! You guessed it! 🎉".bright_green().bold()
        )?,
        _ => writeln!(out, "{}", "   Game over".red().bold())?,
    }
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;

    if let Some(target) = round.target() {
        writeln!(
            out,
            "\n  The word was: {}",
            target.to_string().bright_yellow().bold()
        )?;
    }
    writeln!(out, "\n{}\n", share_grid(round))
}
