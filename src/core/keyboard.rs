//! On-screen keyboard state
//!
//! Aggregates the feedback of every attempt into one status per alphabet
//! letter. A letter only ever moves up the `Absent < Present < Correct`
//! order, so a key that turned green stays green.

use super::letter::ALPHABET_LEN;
use super::{Feedback, Letter, LetterStatus, Word};

/// Best status seen so far for every letter of the alphabet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    statuses: [Option<LetterStatus>; ALPHABET_LEN],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the state from a sequence of scored guesses
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{score, KeyboardState, Letter, LetterStatus, Word};
    ///
    /// let target = Word::new("alarm").unwrap();
    /// let guess = Word::new("llama").unwrap();
    /// let feedback = score(&guess, &target);
    /// let keyboard = KeyboardState::from_attempts([(&guess, &feedback)]);
    ///
    /// let l = Letter::new('l').unwrap();
    /// assert_eq!(keyboard.status(l), Some(LetterStatus::Correct));
    /// assert_eq!(keyboard.status(Letter::new('z').unwrap()), None);
    /// ```
    pub fn from_attempts<'a>(attempts: impl IntoIterator<Item = (&'a Word, &'a Feedback)>) -> Self {
        let mut state = Self::new();
        for (guess, feedback) in attempts {
            state.record(guess, feedback);
        }
        state
    }

    /// Fold one scored guess into the aggregate
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &status) in guess.letters().iter().zip(feedback.statuses()) {
            self.upgrade(letter, status);
        }
    }

    /// Raise a letter's status; lower statuses are ignored
    pub fn upgrade(&mut self, letter: Letter, status: LetterStatus) {
        let slot = &mut self.statuses[letter.index()];
        *slot = (*slot).max(Some(status));
    }

    /// Aggregate status of a letter, `None` if it has not been guessed yet
    #[inline]
    #[must_use]
    pub fn status(&self, letter: Letter) -> Option<LetterStatus> {
        self.statuses[letter.index()]
    }

    /// Letters that have been guessed at least once, with their status
    pub fn seen(&self) -> impl Iterator<Item = (Letter, LetterStatus)> + '_ {
        Letter::all().filter_map(|letter| self.status(letter).map(|status| (letter, status)))
    }

    /// Forget everything, as at the start of a new round
    pub fn clear(&mut self) {
        self.statuses = [None; ALPHABET_LEN];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn l(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn keyboard_starts_unseen() {
        let keyboard = KeyboardState::new();
        assert!(Letter::all().all(|letter| keyboard.status(letter).is_none()));
        assert_eq!(keyboard.seen().count(), 0);
    }

    #[test]
    fn keyboard_records_best_status_within_one_guess() {
        // LLAMA vs ALARM: first L is Absent, second L is Correct
        let target = w("alarm");
        let guess = w("llama");
        let mut keyboard = KeyboardState::new();
        keyboard.record(&guess, &score(&guess, &target));

        assert_eq!(keyboard.status(l('L')), Some(LetterStatus::Correct));
        assert_eq!(keyboard.status(l('A')), Some(LetterStatus::Correct));
        assert_eq!(keyboard.status(l('M')), Some(LetterStatus::Present));
        assert_eq!(keyboard.status(l('R')), None);
    }

    #[test]
    fn keyboard_never_downgrades() {
        let target = w("perro");
        let mut keyboard = KeyboardState::new();

        let first = w("pxxxx");
        keyboard.record(&first, &score(&first, &target));
        assert_eq!(keyboard.status(l('P')), Some(LetterStatus::Correct));

        // P now in a wrong position, then absent entirely
        let second = w("xpxxx");
        keyboard.record(&second, &score(&second, &target));
        assert_eq!(keyboard.status(l('P')), Some(LetterStatus::Correct));

        keyboard.upgrade(l('P'), LetterStatus::Absent);
        assert_eq!(keyboard.status(l('P')), Some(LetterStatus::Correct));
        assert_eq!(keyboard.status(l('X')), Some(LetterStatus::Absent));
    }

    #[test]
    fn keyboard_upgrades_present_to_correct() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(l('Ñ'), LetterStatus::Absent);
        keyboard.upgrade(l('Ñ'), LetterStatus::Present);
        assert_eq!(keyboard.status(l('ñ')), Some(LetterStatus::Present));
        keyboard.upgrade(l('Ñ'), LetterStatus::Correct);
        assert_eq!(keyboard.status(l('ñ')), Some(LetterStatus::Correct));
    }

    #[test]
    fn keyboard_from_attempts_matches_incremental() {
        let target = w("gatos");
        let guesses = [w("patas"), w("gotas"), w("gatos")];
        let scored: Vec<(Word, Feedback)> = guesses
            .iter()
            .map(|g| (g.clone(), score(g, &target)))
            .collect();

        let mut incremental = KeyboardState::new();
        for (guess, feedback) in &scored {
            incremental.record(guess, feedback);
        }
        let rebuilt = KeyboardState::from_attempts(scored.iter().map(|(g, f)| (g, f)));

        assert_eq!(incremental, rebuilt);
    }

    #[test]
    fn keyboard_clear_and_seen() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(l('B'), LetterStatus::Present);
        keyboard.upgrade(l('A'), LetterStatus::Absent);

        let seen: Vec<_> = keyboard.seen().collect();
        assert_eq!(
            seen,
            vec![
                (l('A'), LetterStatus::Absent),
                (l('B'), LetterStatus::Present)
            ]
        );

        keyboard.clear();
        assert_eq!(keyboard, KeyboardState::new());
    }
}
