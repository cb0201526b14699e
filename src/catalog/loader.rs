//! Catalog loading utilities
//!
//! Reads a word catalog from text in the same format as `data/catalog.txt`:
//!
//! ```text
//! # category  difficulty  words...
//! animals     easy        cat dog fish
//! ```

use super::{Catalog, CatalogError, Difficulty};
use crate::core::SecretWord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse catalog text
///
/// Blank lines and `#` comments are skipped. Repeated `(category, difficulty)`
/// lines append to the same entry. The result is validated so every category
/// offers words at every difficulty.
///
/// # Errors
///
/// Returns `CatalogError` for a malformed line, an unknown difficulty, an invalid
/// word, or a catalog that fails `Catalog::validate`.
///
/// # Examples
/// ```
/// use hangman::catalog::{Difficulty, loader::parse_catalog};
///
/// let text = "birds easy owl\nbirds medium robin\nbirds hard albatross";
/// let catalog = parse_catalog(text).unwrap();
/// assert_eq!(catalog.words("birds", Difficulty::Hard).unwrap()[0].text(), "albatross");
/// ```
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::empty();

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let (Some(category), Some(difficulty)) = (fields.next(), fields.next()) else {
            return Err(CatalogError::Malformed {
                line,
                reason: "expected `<category> <difficulty> <words...>`".to_string(),
            });
        };
        let difficulty: Difficulty = difficulty.parse()?;

        let words = fields
            .map(|word| {
                SecretWord::new(word).map_err(|source| CatalogError::InvalidWord {
                    line,
                    word: word.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if words.is_empty() {
            return Err(CatalogError::Malformed {
                line,
                reason: format!("no words listed for {category} {difficulty}"),
            });
        }

        let entry = catalog.category_mut(category);
        for word in words {
            entry.push(difficulty, word);
        }
    }

    catalog.validate()?;
    Ok(catalog)
}

/// Load a catalog from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents fail `parse_catalog`.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word catalog {}", path.display()))?;
    let catalog = parse_catalog(&content)
        .with_context(|| format!("Invalid word catalog {}", path.display()))?;

    info!(
        path = %path.display(),
        categories = catalog.len(),
        words = catalog.word_count(),
        "loaded word catalog"
    );
    Ok(catalog)
}
