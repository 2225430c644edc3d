//! Word representation
//!
//! A Word is a non-empty sequence of alphabet letters. Its length is whatever
//! the configuring player typed, so nothing here assumes five letters.

use super::Letter;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A validated, uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidWordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word may only contain letters, found '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

impl Word {
    /// Create a new Word from text
    ///
    /// Surrounding whitespace is ignored and letters are normalized to
    /// uppercase.
    ///
    /// # Errors
    /// Returns `InvalidWordError` if:
    /// - The text is empty (after trimming)
    /// - Any character is outside the alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::Word;
    ///
    /// let word = Word::new("gato").unwrap();
    /// assert_eq!(word.to_string(), "GATO");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("g4to").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InvalidWordError> {
        let letters = text
            .trim()
            .chars()
            .enumerate()
            .map(|(position, character)| {
                Letter::new(character).ok_or(InvalidWordError::InvalidCharacter {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_letters(letters)
    }

    /// Create a Word from already-normalized letters
    ///
    /// # Errors
    /// Returns `InvalidWordError::Empty` if `letters` is empty.
    pub fn from_letters(letters: Vec<Letter>) -> Result<Self, InvalidWordError> {
        if letters.is_empty() {
            return Err(InvalidWordError::Empty);
        }
        Ok(Self { letters })
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters, always at least one
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<Letter, usize> {
        letter_counts(&self.letters)
    }
}

/// Count occurrences of each letter in a slice
pub(crate) fn letter_counts(letters: &[Letter]) -> FxHashMap<Letter, usize> {
    let mut counts = FxHashMap::default();
    for &letter in letters {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

impl std::str::FromStr for Word {
    type Err = InvalidWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.to_string(), "CRANE");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("niño").unwrap();
        assert_eq!(word.to_string(), "NIÑO");

        let word2 = Word::new("NiÑo").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("murcielago").unwrap().len(), 10);
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  perro\n").unwrap().to_string(), "PERRO");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(InvalidWordError::Empty));
        assert_eq!(Word::new("   "), Err(InvalidWordError::Empty));
        assert_eq!(Word::from_letters(Vec::new()), Err(InvalidWordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            Word::new("cran3"),
            Err(InvalidWordError::InvalidCharacter {
                character: '3',
                position: 4
            })
        );
        assert!(Word::new("dos palabras").is_err()); // Inner space
        assert!(Word::new("café").is_err()); // Accent outside the alphabet
        assert!(Word::new("hola!").is_err()); // Punctuation
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("llama").unwrap();
        assert_eq!(word.letter_at(0), l('L'));
        assert_eq!(word.letter_at(4), l('A'));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("alarm").unwrap();
        assert!(word.has_letter(l('a')));
        assert!(word.has_letter(l('M')));
        assert!(!word.has_letter(l('z')));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("alarm").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&l('A')), Some(&2));
        assert_eq!(counts.get(&l('L')), Some(&1));
        assert_eq!(counts.get(&l('R')), Some(&1));
        assert_eq!(counts.get(&l('M')), Some(&1));
        assert_eq!(counts.get(&l('Z')), None);
    }

    #[test]
    fn word_parse() {
        let word: Word = "queso".parse().unwrap();
        assert_eq!(word.to_string(), "QUESO");
        assert!("".parse::<Word>().is_err());
    }
}
