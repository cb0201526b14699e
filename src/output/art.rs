//! Gallows drawings, one per incorrect guess

use crate::core::MAX_ATTEMPTS;

/// Frames indexed by incorrect guess count: empty gallows through full figure
pub const HANGMAN_ART: [&str; MAX_ATTEMPTS as usize + 1] = [
    r"
   +---+
   |   |
       |
       |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
       |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
   |   |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|   |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|\  |
       |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|\  |
  /    |
       |
=========",
    r"
   +---+
   |   |
   O   |
  /|\  |
  / \  |
       |
=========",
];

/// Frame for a number of incorrect guesses, clamped to the full figure
#[must_use]
pub fn gallows(incorrect: usize) -> &'static str {
    HANGMAN_ART[incorrect.min(HANGMAN_ART.len() - 1)]
}

/// The complete figure shown when a round is lost
#[must_use]
pub fn full_figure() -> &'static str {
    HANGMAN_ART[HANGMAN_ART.len() - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_frames() {
        assert_eq!(HANGMAN_ART.len(), 7);
    }

    #[test]
    fn first_frame_is_empty_gallows() {
        assert!(!gallows(0).contains('O'));
        assert!(gallows(1).contains('O'));
    }

    #[test]
    fn last_frame_has_both_legs() {
        assert!(full_figure().contains(r"/ \"));
        assert_eq!(gallows(6), full_figure());
    }

    #[test]
    fn gallows_clamps() {
        assert_eq!(gallows(42), full_figure());
    }

    #[test]
    fn frames_grow_monotonically() {
        let drawn = |frame: &str| {
            frame
                .chars()
                .filter(|c| matches!(c, 'O' | '|' | '/' | '\\'))
                .count()
        };
        for pair in HANGMAN_ART.windows(2) {
            assert!(drawn(pair[1]) > drawn(pair[0]));
        }
    }
}
