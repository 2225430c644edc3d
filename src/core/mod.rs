//! Core domain types for the game
//!
//! This module contains the fundamental domain types: letters, words, the
//! scorer and the keyboard aggregate. Everything here is pure and
//! synchronous.

mod feedback;
mod keyboard;
mod letter;
mod word;

pub use feedback::{Feedback, LetterStatus, score};
pub use keyboard::KeyboardState;
pub use letter::{ALPHABET, ALPHABET_LEN, Letter};
pub use word::{InvalidWordError, Word};
