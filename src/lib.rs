//! Hangman
//!
//! A terminal hangman game with categories, difficulty tiers, hints and scoring,
//! plus an autoplayer for benchmarking letter-guessing strategies.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, GameStatus, SecretWord};
//!
//! let mut session = GameSession::new(SecretWord::new("cat").unwrap());
//! for letter in ["c", "a", "t"] {
//!     session.guess(letter).unwrap();
//! }
//!
//! assert_eq!(session.status(), GameStatus::Won);
//! assert_eq!(session.score(), 15 + 60 + 20);
//! ```

// Core domain types
pub mod core;

// Word catalog
pub mod catalog;

// A round with its category and difficulty
pub mod round;

// Autoplay solving
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
