//! Input actions
//!
//! Whatever produces input (terminal keys, a line of text, a test) turns it
//! into these actions and hands them to [`Round::dispatch`](super::Round::dispatch).

use super::AttemptOutcome;
use crate::core::Letter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Type a letter into the pending row
    LetterInput(Letter),
    /// Remove the last pending letter
    Delete,
    /// Score the pending row
    Submit,
}

/// What a dispatched action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    LetterAdded { position: usize },
    /// Row already full, letter dropped
    RowFull,
    LetterRemoved { position: usize },
    /// Nothing to delete
    RowEmpty,
    Submitted(AttemptOutcome),
}
