//! Guess feedback calculation and representation
//!
//! Each letter of a guess gets one of three statuses:
//! - Absent (letter not in word, or every occurrence already accounted for)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::word::letter_counts;
use super::{Letter, Word};
use std::fmt;
use tracing::trace;

/// Outcome for a single letter of a guess
///
/// Ordered by keyboard priority: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Single-character code used by [`Feedback::from_str`]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one guess: a status per letter, in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Wrap a precomputed status sequence
    #[must_use]
    pub const fn new(statuses: Vec<LetterStatus>) -> Self {
        Self(statuses)
    }

    /// Calculate the feedback when `guess` is guessed and `target` is the secret
    ///
    /// Handles duplicate letters: a letter is never marked Correct or Present
    /// more times than it occurs in `target`.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches (Correct) and remove from available pool
    /// 2. Second pass: Mark present-but-wrong-position from remaining pool, left to right
    ///
    /// The slices should have equal length. If they do not, the result still
    /// has one status per guess letter and nothing panics.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("alarm").unwrap();
    /// let feedback = Feedback::calculate(guess.letters(), target.letters());
    ///
    /// // The single L in ALARM is claimed by the exact match at index 1
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[Absent, Correct, Correct, Present, Present]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &[Letter], target: &[Letter]) -> Self {
        let mut result = vec![LetterStatus::Absent; guess.len()];
        let mut target_available = letter_counts(target);

        // First pass: Mark exact position matches
        for (i, (&letter, status)) in guess.iter().zip(result.iter_mut()).enumerate() {
            if target.get(i) == Some(&letter) {
                *status = LetterStatus::Correct;

                // Remove from available pool
                if let Some(count) = target_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: Mark wrong position, but letter still available
        for (&letter, status) in guess.iter().zip(result.iter_mut()) {
            if *status != LetterStatus::Correct
                && let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                *status = LetterStatus::Present;
                *count -= 1;
            }
        }

        trace!(guess_len = guess.len(), target_len = target.len(), "scored guess");
        Self(result)
    }

    /// Per-letter statuses in guess order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is Correct
    ///
    /// Empty feedback is never a win.
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count the number of Correct letters
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    /// Count the number of Present letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, wanted: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == wanted).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// Any length is accepted except empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let statuses = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(LetterStatus::Correct),
                'Y' | 'y' | '🟨' => Some(LetterStatus::Present),
                '-' | '_' | '⬜' => Some(LetterStatus::Absent),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        if statuses.is_empty() {
            return None;
        }
        Some(Self(statuses))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

/// Score `guess` against `target`
///
/// Shorthand for [`Feedback::calculate`] over whole words.
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Feedback {
    Feedback::calculate(guess.letters(), target.letters())
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.code())?;
        }
        Ok(())
    }
}
