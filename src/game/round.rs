//! Round state machine
//!
//! `Setup -> InProgress -> Won | Exhausted`, and back to `Setup` on reset.
//! All mutation goes through the methods on [`Round`].

use super::{ActionOutcome, IncompleteAttemptError, InputAction, RoundError};
use crate::config::GameConfig;
use crate::core::{Feedback, KeyboardState, Letter, Word, score};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Waiting for the secret word
    Setup,
    /// Accepting letters and submissions
    InProgress,
    Won,
    Exhausted,
}

impl RoundState {
    /// Won or Exhausted
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Setup => "in setup",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Exhausted => "out of attempts",
        };
        f.write_str(name)
    }
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub feedback: Feedback,
    /// State after this attempt
    pub state: RoundState,
    pub attempts_remaining: usize,
}

/// One round of the game, from configuring the word to win or exhaustion
#[derive(Debug, Clone)]
pub struct Round {
    max_attempts: usize,
    state: RoundState,
    target: Option<Word>,
    attempts: Vec<Attempt>,
    pending: Vec<Letter>,
    keyboard: KeyboardState,
}

impl Round {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            max_attempts: config.max_attempts(),
            state: RoundState::Setup,
            target: None,
            attempts: Vec::new(),
            pending: Vec::new(),
            keyboard: KeyboardState::new(),
        }
    }

    /// Set the secret word and start the round
    ///
    /// The word length for the round is taken from this word.
    ///
    /// # Errors
    /// - `RoundError::InvalidWord` if the text is empty or has characters
    ///   outside the alphabet; the round stays in Setup.
    /// - `RoundError::NotAccepting` if the round is not in Setup.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::config::GameConfig;
    /// use wordle_duel::game::{Round, RoundState};
    ///
    /// let mut round = Round::new(&GameConfig::default());
    /// assert!(round.configure_word("").is_err());
    /// assert_eq!(round.state(), RoundState::Setup);
    ///
    /// round.configure_word("gato").unwrap();
    /// assert_eq!(round.state(), RoundState::InProgress);
    /// assert_eq!(round.word_length(), Some(4));
    /// ```
    pub fn configure_word(&mut self, text: &str) -> Result<Word, RoundError> {
        self.expect_state(RoundState::Setup)?;

        let word = Word::new(text).inspect_err(|e| debug!(%e, "rejected secret word"))?;
        debug!(length = word.len(), "round started");

        self.target = Some(word.clone());
        self.state = RoundState::InProgress;
        Ok(word)
    }

    /// Score a full row of letters against the secret word
    ///
    /// # Errors
    /// - `RoundError::IncompleteAttempt` if `letters` does not have exactly
    ///   the word's length; nothing is scored and the state is unchanged.
    /// - `RoundError::NotAccepting` if the round is not in progress.
    pub fn submit_attempt(&mut self, letters: &[Letter]) -> Result<AttemptOutcome, RoundError> {
        self.expect_state(RoundState::InProgress)?;
        let Some(target) = &self.target else {
            return Err(RoundError::NotAccepting { state: self.state });
        };

        if letters.len() != target.len() {
            let err = IncompleteAttemptError {
                filled: letters.len(),
                expected: target.len(),
            };
            debug!(%err, "incomplete attempt");
            return Err(err.into());
        }

        let guess = Word::from_letters(letters.to_vec())?;
        let feedback = score(&guess, target);

        self.keyboard.record(&guess, &feedback);
        self.attempts.push(Attempt {
            guess,
            feedback: feedback.clone(),
        });

        if feedback.is_win() {
            self.state = RoundState::Won;
        } else if self.attempts.len() >= self.max_attempts {
            self.state = RoundState::Exhausted;
        }

        debug!(
            attempt = self.attempts.len(),
            feedback = %feedback,
            state = %self.state,
            "attempt scored"
        );

        Ok(AttemptOutcome {
            feedback,
            state: self.state,
            attempts_remaining: self.attempts_remaining(),
        })
    }

    /// Apply one input action to the pending row
    ///
    /// # Errors
    /// - `RoundError::NotAccepting` if the round is not in progress.
    /// - Any error from [`Round::submit_attempt`] for `Submit`; the pending
    ///   row is kept so the player can keep editing.
    pub fn dispatch(&mut self, action: InputAction) -> Result<ActionOutcome, RoundError> {
        self.expect_state(RoundState::InProgress)?;
        let word_length = self.word_length().unwrap_or(0);

        match action {
            InputAction::LetterInput(letter) => {
                if self.pending.len() >= word_length {
                    return Ok(ActionOutcome::RowFull);
                }
                self.pending.push(letter);
                Ok(ActionOutcome::LetterAdded {
                    position: self.pending.len() - 1,
                })
            }
            InputAction::Delete => Ok(match self.pending.pop() {
                Some(_) => ActionOutcome::LetterRemoved {
                    position: self.pending.len(),
                },
                None => ActionOutcome::RowEmpty,
            }),
            InputAction::Submit => {
                let letters = std::mem::take(&mut self.pending);
                match self.submit_attempt(&letters) {
                    Ok(outcome) => Ok(ActionOutcome::Submitted(outcome)),
                    Err(e) => {
                        self.pending = letters;
                        Err(e)
                    }
                }
            }
        }
    }

    /// Back to Setup, discarding the word, attempts and keyboard
    pub fn reset(&mut self) {
        debug!(from = %self.state, "round reset");
        self.state = RoundState::Setup;
        self.target = None;
        self.attempts.clear();
        self.pending.clear();
        self.keyboard.clear();
    }

    fn expect_state(&self, wanted: RoundState) -> Result<(), RoundError> {
        if self.state == wanted {
            Ok(())
        } else {
            Err(RoundError::NotAccepting { state: self.state })
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// The secret word, `None` while in Setup
    #[inline]
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    /// Letters per attempt, `None` while in Setup
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.target.as_ref().map(Word::len)
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempts.len())
    }

    /// Letters typed for the attempt not yet submitted
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &[Letter] {
        &self.pending
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }
}
