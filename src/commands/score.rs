//! One-shot scoring command
//!
//! Scores a single guess against a target without playing a round.

use crate::core::{Feedback, InvalidWordError, Word, score};
use crate::game::IncompleteAttemptError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Invalid guess: {0}")]
    Guess(InvalidWordError),

    #[error("Invalid target: {0}")]
    Target(InvalidWordError),

    #[error("Guess and target lengths differ: {0}")]
    Length(#[from] IncompleteAttemptError),
}

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Validate both words and score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, ScoreError> {
    let guess = Word::new(guess).map_err(ScoreError::Guess)?;
    let target = Word::new(target).map_err(ScoreError::Target)?;

    if guess.len() != target.len() {
        return Err(IncompleteAttemptError {
            filled: guess.len(),
            expected: target.len(),
        }
        .into());
    }

    let feedback = score(&guess, &target);
    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_words_valid() {
        let result = score_words("llama", "ALARM").unwrap();
        assert_eq!(result.feedback.to_string(), "-GGYY");
        assert_eq!(result.target.to_string(), "ALARM");
    }

    #[test]
    fn score_words_invalid_guess() {
        assert!(matches!(
            score_words("ll4ma", "alarm"),
            Err(ScoreError::Guess(_))
        ));
    }

    #[test]
    fn score_words_invalid_target() {
        assert!(matches!(
            score_words("llama", ""),
            Err(ScoreError::Target(InvalidWordError::Empty))
        ));
    }

    #[test]
    fn score_words_length_mismatch() {
        assert_eq!(
            score_words("gatos", "gato").err(),
            Some(ScoreError::Length(IncompleteAttemptError {
                filled: 5,
                expected: 4
            }))
        );
    }
}
