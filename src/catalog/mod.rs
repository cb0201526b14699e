//! Word catalog
//!
//! Candidate words grouped by category and difficulty. The built-in catalog is
//! compiled into the binary; `loader` reads the same format from a file.

mod embedded;
pub mod loader;

pub use embedded::{CATALOG, CATALOG_WORD_COUNT};

use crate::core::{RandomSource, SecretWord, WordError};
use std::fmt;
use std::str::FromStr;

/// Difficulty tier within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tiers in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lowercase key used in catalog files
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Capitalized name for display
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Rough word length shown next to the menu entry
    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Easy => "(4-5 letters)",
            Self::Medium => "(6-7 letters)",
            Self::Hard => "(8+ letters)",
        }
    }

    /// Tier for a 1-based menu choice
    #[must_use]
    pub fn from_menu(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    const fn index(self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownDifficulty(s.to_string()))
    }
}

/// Error type for catalog lookups and loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownCategory(String),
    UnknownDifficulty(String),
    /// No words for this category and difficulty
    EmptyEntry {
        category: String,
        difficulty: Difficulty,
    },
    InvalidWord {
        line: usize,
        word: String,
        source: WordError,
    },
    Malformed {
        line: usize,
        reason: String,
    },
    EmptyCatalog,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory(name) => write!(f, "Unknown category '{name}'"),
            Self::UnknownDifficulty(name) => {
                write!(f, "Unknown difficulty '{name}' (expected easy, medium or hard)")
            }
            Self::EmptyEntry {
                category,
                difficulty,
            } => write!(f, "Category '{category}' has no {difficulty} words"),
            Self::InvalidWord { line, word, source } => {
                write!(f, "Line {line}: invalid word '{word}': {source}")
            }
            Self::Malformed { line, reason } => write!(f, "Line {line}: {reason}"),
            Self::EmptyCatalog => write!(f, "Catalog contains no words"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A named group of words split by difficulty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    tiers: [Vec<SecretWord>; 3],
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            tiers: Default::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with the first letter capitalized, for menus and headers
    #[must_use]
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    #[must_use]
    pub fn words(&self, difficulty: Difficulty) -> &[SecretWord] {
        &self.tiers[difficulty.index()]
    }

    pub(crate) fn push(&mut self, difficulty: Difficulty, word: SecretWord) {
        self.tiers[difficulty.index()].push(word);
    }

    /// Total words across all tiers
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }
}

/// Immutable table of categories, in menu order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// The catalog compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use hangman::catalog::{Catalog, Difficulty};
    ///
    /// let catalog = Catalog::embedded();
    /// let animals = catalog.category("animals").unwrap();
    /// assert!(animals.words(Difficulty::Easy).iter().any(|w| w.text() == "cat"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(CATALOG)
    }

    /// Build a catalog from `(category, difficulty, words)` rows
    ///
    /// Rows with an unknown difficulty and words that fail validation are skipped.
    #[must_use]
    pub fn from_entries(entries: &[(&str, &str, &[&str])]) -> Self {
        let mut catalog = Self::empty();
        for &(category, difficulty, words) in entries {
            let Ok(difficulty) = difficulty.parse::<Difficulty>() else {
                continue;
            };
            let category = catalog.category_mut(category);
            for word in words.iter().filter_map(|&w| SecretWord::new(w).ok()) {
                category.push(difficulty, word);
            }
        }
        catalog
    }

    /// Find or append a category by name
    pub(crate) fn category_mut(&mut self, name: &str) -> &mut Category {
        let name = name.to_lowercase();
        let index = if let Some(index) = self.categories.iter().position(|c| c.name == name) {
            index
        } else {
            self.categories.push(Category::new(name));
            self.categories.len() - 1
        };
        &mut self.categories[index]
    }

    pub(crate) const fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a category by name, case-insensitively
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Category for a 1-based menu choice
    #[must_use]
    pub fn from_menu(&self, choice: usize) -> Option<&Category> {
        choice.checked_sub(1).and_then(|i| self.categories.get(i))
    }

    /// Candidate words for a category and difficulty
    ///
    /// # Errors
    /// Returns `CatalogError::UnknownCategory` if no category has that name.
    pub fn words(
        &self,
        category: &str,
        difficulty: Difficulty,
    ) -> Result<&[SecretWord], CatalogError> {
        self.category(category)
            .map(|c| c.words(difficulty))
            .ok_or_else(|| CatalogError::UnknownCategory(category.to_string()))
    }

    /// Pick a secret word uniformly from one entry
    ///
    /// # Errors
    /// Returns `CatalogError::UnknownCategory` for an unknown name and
    /// `CatalogError::EmptyEntry` if the entry has no words.
    pub fn choose<R: RandomSource + ?Sized>(
        &self,
        category: &str,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<&SecretWord, CatalogError> {
        let words = self.words(category, difficulty)?;
        if words.is_empty() {
            return Err(CatalogError::EmptyEntry {
                category: category.to_string(),
                difficulty,
            });
        }
        Ok(&words[rng.pick(words.len())])
    }

    /// Check that every category has words at every difficulty
    ///
    /// # Errors
    /// Returns `CatalogError::EmptyCatalog` or the first missing entry.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for category in &self.categories {
            for difficulty in Difficulty::ALL {
                if category.words(difficulty).is_empty() {
                    return Err(CatalogError::EmptyEntry {
                        category: category.name.clone(),
                        difficulty,
                    });
                }
            }
        }
        Ok(())
    }

    /// Total number of words in the catalog
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.categories.iter().map(Category::word_count).sum()
    }
}
