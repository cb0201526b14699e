//! Letter guesses and player actions
//!
//! A `Letter` is a single lowercase ASCII letter. An `Action` is what one line of
//! player input asks for: a letter guess or a hint.

use std::fmt;

/// A single lowercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for input that is not a single letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    /// Input did not contain exactly one character
    WrongLength(usize),
    /// The character is not an ASCII letter
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(_) => write!(f, "Please enter a single letter."),
            Self::NotAlphabetic(_) => write!(f, "Please enter a valid letter (a-z)."),
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// Create a letter from a character, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_lowercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(ch))
        }
    }

    /// Parse a raw input string holding exactly one letter
    ///
    /// # Errors
    /// Returns `LetterError::WrongLength` unless the input is one character long,
    /// and `LetterError::NotAlphabetic` if that character is not a letter.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(LetterError::WrongLength(input.chars().count())),
        }
    }

    /// Build a letter from a byte already known to be lowercase ASCII
    pub(crate) const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One turn's worth of player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Guess(Letter),
    Hint,
}

impl Action {
    /// Token that requests a hint instead of guessing
    pub const HINT_TOKEN: &'static str = "hint";

    /// Parse one line of player input
    ///
    /// Input is lowercased but not trimmed, so `"HINT"` is a hint request, `"A"`
    /// guesses `a`, and `" a"` is rejected as more than one character.
    ///
    /// # Errors
    /// Returns the `LetterError` for input that is neither `hint` nor one letter.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let input = input.to_lowercase();
        if input == Self::HINT_TOKEN {
            return Ok(Self::Hint);
        }
        Letter::parse(&input).map(Self::Guess)
    }
}
