//! Wordle Duel
//!
//! A two-player word guessing game: one player picks a secret word of any
//! length, the other has a fixed number of attempts to guess it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_duel::config::GameConfig;
//! use wordle_duel::core::{Letter, LetterStatus::*};
//! use wordle_duel::game::{Round, RoundState};
//!
//! let mut round = Round::new(&GameConfig::default());
//! round.configure_word("alarm").unwrap();
//!
//! let guess: Vec<Letter> = "llama".chars().filter_map(Letter::new).collect();
//! let outcome = round.submit_attempt(&guess).unwrap();
//!
//! assert_eq!(
//!     outcome.feedback.statuses(),
//!     &[Absent, Correct, Correct, Present, Present]
//! );
//! assert_eq!(outcome.state, RoundState::InProgress);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Session settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
