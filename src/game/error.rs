//! Errors raised by the round controller

use super::RoundState;
use crate::core::InvalidWordError;
use thiserror::Error;

/// Submission made before the row was filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Attempt has {filled} of {expected} letters")]
pub struct IncompleteAttemptError {
    pub filled: usize,
    pub expected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error(transparent)]
    InvalidWord(#[from] InvalidWordError),

    #[error(transparent)]
    IncompleteAttempt(#[from] IncompleteAttemptError),

    #[error("Round is {state}, that action is not accepted")]
    NotAccepting { state: RoundState },
}
