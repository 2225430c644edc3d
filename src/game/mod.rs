//! Round controller
//!
//! Owns the state of one round and exposes the only ways to change it:
//! configuring the word, dispatching input actions, submitting attempts and
//! resetting.

mod action;
mod error;
mod round;
mod stats;

pub use action::{ActionOutcome, InputAction};
pub use error::{IncompleteAttemptError, RoundError};
pub use round::{Attempt, AttemptOutcome, Round, RoundState};
pub use stats::Statistics;
