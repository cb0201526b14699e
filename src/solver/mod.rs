//! Hangman autoplay
//!
//! Candidate filtering plus letter selection strategies, used by the simulation
//! command to play rounds without a human.

mod engine;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{EnglishStrategy, FrequencyStrategy, Strategy, StrategyType};
