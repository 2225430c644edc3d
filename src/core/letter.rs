//! Game alphabet
//!
//! The alphabet is fixed: the 26 ASCII letters plus `Ñ`. Letters are stored
//! uppercase so that comparisons are case-insensitive by construction.

use std::fmt;

/// Number of letters in the alphabet (A-Z plus Ñ)
pub const ALPHABET_LEN: usize = 27;

/// Every letter of the alphabet in index order
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Ñ',
];

/// A single uppercase letter of the game alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(char);

impl Letter {
    /// Normalize a character into a `Letter`
    ///
    /// Returns `None` for anything outside the alphabet, including characters
    /// whose uppercase form is more than one character.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::Letter;
    ///
    /// assert_eq!(Letter::new('a'), Letter::new('A'));
    /// assert_eq!(Letter::new('ñ').map(Letter::as_char), Some('Ñ'));
    /// assert!(Letter::new('3').is_none());
    /// ```
    #[must_use]
    pub fn new(ch: char) -> Option<Self> {
        let mut upper = ch.to_uppercase();
        let first = upper.next()?;
        if upper.next().is_some() {
            return None;
        }

        if first.is_ascii_uppercase() || first == 'Ñ' {
            Some(Self(first))
        } else {
            None
        }
    }

    /// The uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Position of this letter in [`ALPHABET`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self.0 {
            'Ñ' => 26,
            // Only ASCII uppercase reaches here
            ch => (ch as u8 - b'A') as usize,
        }
    }

    /// Iterate over the whole alphabet in index order
    pub fn all() -> impl Iterator<Item = Self> {
        ALPHABET.into_iter().map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalizes_case() {
        assert_eq!(Letter::new('q').unwrap().as_char(), 'Q');
        assert_eq!(Letter::new('Q').unwrap().as_char(), 'Q');
        assert_eq!(Letter::new('ñ').unwrap().as_char(), 'Ñ');
    }

    #[test]
    fn letter_rejects_outside_alphabet() {
        for ch in ['1', ' ', '-', 'é', 'ß', 'Ω', '\n'] {
            assert!(Letter::new(ch).is_none(), "{ch:?} should be rejected");
        }
    }

    #[test]
    fn letter_index_matches_alphabet() {
        for (i, letter) in Letter::all().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(ALPHABET[i], letter.as_char());
        }
        assert_eq!(Letter::all().count(), ALPHABET_LEN);
    }

    #[test]
    fn letter_display() {
        assert_eq!(Letter::new('n').unwrap().to_string(), "N");
        assert_eq!(Letter::new('ñ').unwrap().to_string(), "Ñ");
    }
}
