//! Core game types
//!
//! This module contains the pure game logic: letters, secret words, the round
//! state machine and score totals. Nothing here touches the console.

mod letter;
mod random;
mod session;
mod totals;
mod word;

pub use letter::{Action, Letter, LetterError};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use session::{
    ATTEMPT_BONUS, CORRECT_GUESS_POINTS, GameSession, GameStatus, GuessError, GuessOutcome,
    HINT_PENALTY, HINTS_PER_ROUND, HintError, MAX_ATTEMPTS, NO_HINT_BONUS, TurnError, TurnOutcome,
};
pub use totals::SessionTotals;
pub use word::{SecretWord, WordError};
