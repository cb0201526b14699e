//! Secret word representation
//!
//! A `SecretWord` stores a lowercase word along with letter position indices for
//! masking and hint selection.

use super::letter::Letter;
use rustc_hash::FxHashMap;
use std::fmt;

/// A hidden word the player has to uncover
///
/// Stores the word as bytes and maintains a map of letter positions for repeated letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Panda").unwrap();
    /// assert_eq!(word.text(), "panda");
    ///
    /// assert!(SecretWord::new("ice cream").is_err());
    /// assert!(SecretWord::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in text.as_bytes().iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters in order, repeats included
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().map(Letter::from_byte)
    }

    /// Letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        Letter::from_byte(self.text.as_bytes()[position])
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.char_positions.contains_key(&letter.as_byte())
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.char_positions
            .get(&letter.as_byte())
            .map_or(&[], Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("koala").unwrap();
        assert_eq!(word.text(), "koala");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("KIWI").unwrap();
        assert_eq!(word.text(), "kiwi");
    }

    #[test]
    fn word_creation_rejects_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(SecretWord::new("k2"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("new york"), Err(WordError::InvalidCharacters));
        assert_eq!(SecretWord::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_has_letter() {
        let word = SecretWord::new("frog").unwrap();
        assert!(word.has_letter(letter('f')));
        assert!(word.has_letter(letter('g')));
        assert!(!word.has_letter(letter('z')));
    }

    #[test]
    fn word_positions_of_repeats() {
        let word = SecretWord::new("banana").unwrap();
        assert_eq!(word.positions_of(letter('a')), &[1, 3, 5]);
        assert_eq!(word.positions_of(letter('n')), &[2, 4]);
        assert_eq!(word.positions_of(letter('b')), &[0]);
        assert_eq!(word.positions_of(letter('x')), &[] as &[usize]);
    }

    #[test]
    fn word_letters_in_order() {
        let word = SecretWord::new("uk").unwrap();
        let letters: Vec<char> = word.letters().map(Letter::as_char).collect();
        assert_eq!(letters, vec!['u', 'k']);
        assert_eq!(word.letter_at(1), letter('k'));
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("mango").unwrap();
        assert_eq!(format!("{word}"), "mango");
    }
}
