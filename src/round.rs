//! A single round with its display context
//!
//! The category and difficulty a round was started with travel with the session
//! so front-ends can render headers without any shared state.

use crate::catalog::{Catalog, CatalogError, Category, Difficulty};
use crate::core::{GameSession, RandomSource};
use tracing::info;

/// One round of hangman
#[derive(Debug, Clone)]
pub struct Round {
    category: String,
    difficulty: Difficulty,
    session: GameSession,
}

impl Round {
    /// Start a round with a word drawn from the catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the category is unknown or the entry is empty.
    pub fn start<R: RandomSource + ?Sized>(
        catalog: &Catalog,
        category: &Category,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Self, CatalogError> {
        let secret = catalog.choose(category.name(), difficulty, rng)?.clone();
        info!(
            category = category.name(),
            %difficulty,
            letters = secret.len(),
            "round started"
        );

        Ok(Self {
            category: category.title(),
            difficulty,
            session: GameSession::new(secret),
        })
    }

    /// Category title, e.g. `Animals`
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }
}
