//! Main autoplay solver interface

use super::strategy::Strategy;
use crate::core::{GameSession, Letter, SecretWord};

/// Hangman autoplayer
///
/// Coordinates candidate filtering and letter selection using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [SecretWord],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word list
    ///
    /// # Parameters
    /// - `strategy`: The letter selection strategy to use
    /// - `words`: Words the secret is known to be drawn from
    pub const fn new(strategy: S, words: &'a [SecretWord]) -> Self {
        Self { strategy, words }
    }

    /// Get the next letter to guess for this session
    ///
    /// Returns None if every letter has been tried.
    pub fn next_guess(&self, session: &GameSession) -> Option<Letter> {
        let candidates = self.filter_candidates(session);
        self.strategy.select_letter(session, &candidates)
    }

    /// Filter words to those consistent with what the session has revealed
    ///
    /// A candidate must have the same length, show every revealed letter in place,
    /// hold no tried letter at a hidden position, and contain every hinted letter.
    fn filter_candidates(&self, session: &GameSession) -> Vec<&'a SecretWord> {
        let revealed = session.revealed();

        self.words
            .iter()
            .filter(|&candidate| {
                candidate.len() == revealed.len()
                    && revealed
                        .iter()
                        .enumerate()
                        .all(|(i, slot)| match slot {
                            Some(letter) => candidate.letter_at(i) == *letter,
                            None => !session.has_tried(candidate.letter_at(i)),
                        })
                    && session
                        .hints_given()
                        .iter()
                        .all(|&letter| candidate.has_letter(letter))
            })
            .collect()
    }

    /// Count how many candidates remain for the session
    pub fn count_candidates(&self, session: &GameSession) -> usize {
        self.filter_candidates(session).len()
    }

    /// Get the current candidates (public accessor)
    pub fn get_candidates(&self, session: &GameSession) -> Vec<&'a SecretWord> {
        self.filter_candidates(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceSource;
    use crate::solver::strategy::FrequencyStrategy;

    fn words(list: &[&str]) -> Vec<SecretWord> {
        list.iter().map(|w| SecretWord::new(*w).unwrap()).collect()
    }

    fn session(word: &str) -> GameSession {
        GameSession::new(SecretWord::new(word).unwrap())
    }

    #[test]
    fn filters_by_length() {
        let pool = words(&["cat", "dog", "fish", "bird"]);
        let solver = Solver::new(FrequencyStrategy, &pool);
        assert_eq!(solver.count_candidates(&session("frog")), 2);
    }

    #[test]
    fn filters_by_revealed_and_tried_letters() {
        let pool = words(&["cat", "cot", "dog", "car"]);
        let solver = Solver::new(FrequencyStrategy, &pool);
        let mut session = session("cot");

        session.guess("c").unwrap();
        session.guess("a").unwrap();

        let remaining: Vec<&str> = solver
            .get_candidates(&session)
            .into_iter()
            .map(SecretWord::text)
            .collect();
        assert_eq!(remaining, vec!["cot"]);
    }

    #[test]
    fn hidden_positions_cannot_repeat_revealed_letter() {
        // With 'a' revealed, an 'a' at a hidden position is impossible
        let pool = words(&["banana", "cabana", "aaaaaa", "bandan"]);
        let solver = Solver::new(FrequencyStrategy, &pool);
        let mut session = session("banana");
        session.guess("a").unwrap();

        let remaining: Vec<&str> = solver
            .get_candidates(&session)
            .into_iter()
            .map(SecretWord::text)
            .collect();
        assert_eq!(remaining, vec!["banana", "cabana"]);
    }

    #[test]
    fn hinted_letters_must_appear() {
        let pool = words(&["tiger", "zebra", "panda"]);
        let solver = Solver::new(FrequencyStrategy, &pool);
        let mut session = session("zebra");
        // pick index 0 reveals 'z'
        session.apply_hint(&mut SequenceSource::new(vec![0])).unwrap();

        assert_eq!(solver.count_candidates(&session), 1);
    }

    #[test]
    fn next_guess_is_untried() {
        let pool = words(&["kiwi"]);
        let solver = Solver::new(FrequencyStrategy, &pool);
        let mut session = session("kiwi");

        let first = solver.next_guess(&session).unwrap();
        session.apply_guess(first).unwrap();
        let second = solver.next_guess(&session).unwrap();
        assert_ne!(first, second);
    }
}
