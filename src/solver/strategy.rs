//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{GameSession, Letter, SecretWord};
use rustc_hash::FxHashMap;

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Select an untried letter given the words still consistent with the session
    ///
    /// Returns `None` only when every letter has already been tried.
    fn select_letter(&self, session: &GameSession, candidates: &[&SecretWord]) -> Option<Letter>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Candidate letter frequency (default)
    Frequency(FrequencyStrategy),
    /// Fixed English letter frequency order
    English(EnglishStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, session: &GameSession, candidates: &[&SecretWord]) -> Option<Letter> {
        match self {
            Self::Frequency(s) => s.select_letter(session, candidates),
            Self::English(s) => s.select_letter(session, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "english". Defaults to frequency if the name
    /// is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "english" | "etaoin" => Self::English(EnglishStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::English(_) => "english",
        }
    }
}

/// Letters of English text from most to least common
const ENGLISH_ORDER: &[u8; 26] = b"etaoinshrdlcumwfgypbvkjxqz";

/// Picks the untried letter found in the most candidates
///
/// Ties go to the alphabetically first letter. Falls back to English order when
/// no candidate remains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, session: &GameSession, candidates: &[&SecretWord]) -> Option<Letter> {
        let mut counts: FxHashMap<Letter, usize> = FxHashMap::default();
        for candidate in candidates {
            for letter in ('a'..='z').filter_map(|c| Letter::new(c).ok()) {
                if candidate.has_letter(letter) && !session.has_tried(letter) {
                    *counts.entry(letter).or_insert(0) += 1;
                }
            }
        }

        counts
            .into_iter()
            .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then(b.cmp(a)))
            .map(|(letter, _)| letter)
            .or_else(|| EnglishStrategy.select_letter(session, candidates))
    }
}

/// Guesses letters in fixed English frequency order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishStrategy;

impl Strategy for EnglishStrategy {
    fn select_letter(&self, session: &GameSession, _candidates: &[&SecretWord]) -> Option<Letter> {
        ENGLISH_ORDER
            .iter()
            .map(|&b| Letter::from_byte(b))
            .find(|&letter| !session.has_tried(letter))
    }
}
