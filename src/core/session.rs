//! Hangman round state machine
//!
//! `GameSession` owns everything that changes during one round: guessed and
//! incorrect letters, remaining attempts and hints, and the score. It performs no
//! I/O; callers render state between calls.
//!
//! Scoring:
//! - `+5` per correct letter guessed
//! - `-5` per hint consumed
//! - on a win, `+10` per remaining attempt, plus `+20` if no hint was used

use super::letter::{Action, Letter, LetterError};
use super::random::RandomSource;
use super::word::SecretWord;
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::debug;

/// Incorrect guesses allowed per round
pub const MAX_ATTEMPTS: u8 = 6;
/// Hints available per round
pub const HINTS_PER_ROUND: u8 = 2;
/// Points for each correctly guessed letter
pub const CORRECT_GUESS_POINTS: i32 = 5;
/// Points deducted per hint
pub const HINT_PENALTY: i32 = 5;
/// Win bonus per attempt still remaining
pub const ATTEMPT_BONUS: i32 = 10;
/// Win bonus when the round was solved without hints
pub const NO_HINT_BONUS: i32 = 20;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word this many times
    Correct { letter: Letter, occurrences: usize },
    /// The letter is absent; one attempt was spent
    Incorrect { letter: Letter, attempts_remaining: u8 },
}

/// Result of an applied action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Guessed(GuessOutcome),
    /// A hint revealed that this letter is in the word
    Hinted(Letter),
}

/// Reasons a guess is refused. The session is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLetter(LetterError),
    DuplicateGuess(Letter),
    RoundOver(GameStatus),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(err) => write!(f, "{err}"),
            Self::DuplicateGuess(_) => write!(f, "You've already guessed that letter."),
            Self::RoundOver(_) => write!(f, "This round is already over."),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLetter(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LetterError> for GuessError {
    fn from(err: LetterError) -> Self {
        Self::InvalidLetter(err)
    }
}

/// Reasons a hint is refused. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintError {
    NoHintsRemaining,
    NoLettersToReveal,
    RoundOver(GameStatus),
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHintsRemaining => write!(f, "No hints remaining!"),
            Self::NoLettersToReveal => write!(f, "No more letters to reveal!"),
            Self::RoundOver(_) => write!(f, "This round is already over."),
        }
    }
}

impl std::error::Error for HintError {}

/// Either kind of refusal, for callers applying a parsed `Action`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    Guess(GuessError),
    Hint(HintError),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess(err) => write!(f, "{err}"),
            Self::Hint(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for TurnError {}

/// State of one hangman round
///
/// # Examples
/// ```
/// use hangman::core::{GameSession, GameStatus, Letter, SecretWord};
///
/// let mut session = GameSession::new(SecretWord::new("cat").unwrap());
/// for ch in ['a', 'c', 't'] {
///     session.apply_guess(Letter::new(ch).unwrap()).unwrap();
/// }
///
/// assert_eq!(session.status(), GameStatus::Won);
/// assert_eq!(session.mask(), "cat");
/// assert_eq!(session.score(), 95);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: SecretWord,
    guessed: FxHashSet<Letter>,
    incorrect: FxHashSet<Letter>,
    hints_given: Vec<Letter>,
    attempts_remaining: u8,
    hints_remaining: u8,
    score: i32,
    hint_used: bool,
    status: GameStatus,
}

impl GameSession {
    /// Start a fresh round for the given word
    #[must_use]
    pub fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            guessed: FxHashSet::default(),
            incorrect: FxHashSet::default(),
            hints_given: Vec::new(),
            attempts_remaining: MAX_ATTEMPTS,
            hints_remaining: HINTS_PER_ROUND,
            score: 0,
            hint_used: false,
            status: GameStatus::InProgress,
        }
    }

    /// Apply a letter guess
    ///
    /// A correct letter is recorded and scores `CORRECT_GUESS_POINTS`; an absent
    /// letter is recorded as incorrect and costs one attempt. Completing the word
    /// wins the round and adds the win bonus; running out of attempts loses it.
    ///
    /// # Errors
    /// Returns `GuessError::RoundOver` once the round has ended and
    /// `GuessError::DuplicateGuess` for a letter already tried.
    pub fn apply_guess(&mut self, letter: Letter) -> Result<GuessOutcome, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::RoundOver(self.status));
        }
        if self.has_tried(letter) {
            return Err(GuessError::DuplicateGuess(letter));
        }

        let occurrences = self.secret.positions_of(letter).len();
        let outcome = if occurrences > 0 {
            self.guessed.insert(letter);
            self.score += CORRECT_GUESS_POINTS;
            GuessOutcome::Correct {
                letter,
                occurrences,
            }
        } else {
            self.incorrect.insert(letter);
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            GuessOutcome::Incorrect {
                letter,
                attempts_remaining: self.attempts_remaining,
            }
        };
        debug!(%letter, ?outcome, score = self.score, "guess applied");

        self.update_status();
        Ok(outcome)
    }

    /// Parse raw input and apply it as a guess
    ///
    /// # Errors
    /// Returns `GuessError::InvalidLetter` for input that is not one letter, plus
    /// everything `apply_guess` can return.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let letter = Letter::parse(&input.to_lowercase())?;
        self.apply_guess(letter)
    }

    /// Consume a hint, revealing one letter that has not been guessed yet
    ///
    /// The letter is drawn uniformly from the unrevealed positions of the word,
    /// so letters that occur more often are more likely. The letter is NOT marked
    /// as guessed: the player still has to guess it to score it.
    ///
    /// # Errors
    /// Returns `HintError::RoundOver` once the round has ended,
    /// `HintError::NoHintsRemaining` when the budget is spent, and
    /// `HintError::NoLettersToReveal` when every letter is already guessed.
    pub fn apply_hint<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Letter, HintError> {
        if self.status.is_over() {
            return Err(HintError::RoundOver(self.status));
        }
        if self.hints_remaining == 0 {
            return Err(HintError::NoHintsRemaining);
        }

        let unrevealed: Vec<Letter> = self
            .secret
            .letters()
            .filter(|letter| !self.guessed.contains(letter))
            .collect();
        if unrevealed.is_empty() {
            return Err(HintError::NoLettersToReveal);
        }

        let letter = unrevealed[rng.pick(unrevealed.len())];
        self.hints_remaining -= 1;
        self.hint_used = true;
        self.score -= HINT_PENALTY;
        self.hints_given.push(letter);
        debug!(
            %letter,
            hints_remaining = self.hints_remaining,
            score = self.score,
            "hint consumed"
        );

        Ok(letter)
    }

    /// Apply a parsed player action
    ///
    /// # Errors
    /// Returns whichever refusal the underlying guess or hint produced.
    pub fn apply<R: RandomSource + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<TurnOutcome, TurnError> {
        match action {
            Action::Guess(letter) => self
                .apply_guess(letter)
                .map(TurnOutcome::Guessed)
                .map_err(TurnError::Guess),
            Action::Hint => self
                .apply_hint(rng)
                .map(TurnOutcome::Hinted)
                .map_err(TurnError::Hint),
        }
    }

    fn update_status(&mut self) {
        if self.is_word_complete() {
            self.status = GameStatus::Won;
            let bonus = self.win_bonus();
            self.score += bonus;
            debug!(word = %self.secret, bonus, score = self.score, "round won");
        } else if self.attempts_remaining == 0 {
            self.status = GameStatus::Lost;
            debug!(word = %self.secret, score = self.score, "round lost");
        }
    }

    fn win_bonus(&self) -> i32 {
        let mut bonus = i32::from(self.attempts_remaining) * ATTEMPT_BONUS;
        if !self.hint_used {
            bonus += NO_HINT_BONUS;
        }
        bonus
    }

    fn is_word_complete(&self) -> bool {
        self.secret.letters().all(|letter| self.guessed.contains(&letter))
    }

    /// Whether the letter was already guessed, correctly or not
    #[must_use]
    pub fn has_tried(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter) || self.incorrect.contains(&letter)
    }

    /// The word with unguessed letters replaced by `_`
    #[must_use]
    pub fn mask(&self) -> String {
        self.secret
            .letters()
            .map(|letter| {
                if self.guessed.contains(&letter) {
                    letter.as_char()
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Per-position view: `Some(letter)` where revealed
    #[must_use]
    pub fn revealed(&self) -> Vec<Option<Letter>> {
        self.secret
            .letters()
            .map(|letter| self.guessed.contains(&letter).then_some(letter))
            .collect()
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Correct letters, alphabetically
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<Letter> {
        sorted(&self.guessed)
    }

    /// Incorrect letters, alphabetically
    #[must_use]
    pub fn incorrect_guesses(&self) -> Vec<Letter> {
        sorted(&self.incorrect)
    }

    /// How many incorrect guesses were made; indexes the gallows art
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.incorrect.len()
    }

    /// Letters revealed by hints, in the order given
    #[must_use]
    pub fn hints_given(&self) -> &[Letter] {
        &self.hints_given
    }
}

fn sorted(letters: &FxHashSet<Letter>) -> Vec<Letter> {
    let mut letters: Vec<Letter> = letters.iter().copied().collect();
    letters.sort_unstable();
    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::SequenceSource;

    fn session(word: &str) -> GameSession {
        GameSession::new(SecretWord::new(word).unwrap())
    }

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn guess_all(session: &mut GameSession, letters: &str) {
        for ch in letters.chars() {
            session.apply_guess(letter(ch)).unwrap();
        }
    }

    #[test]
    fn new_session_starts_in_progress() {
        let session = session("cat");
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(session.hints_remaining(), HINTS_PER_ROUND);
        assert_eq!(session.score(), 0);
        assert!(!session.hint_used());
        assert_eq!(session.mask(), "___");
    }

    #[test]
    fn winning_cat_without_hints() {
        let mut session = session("cat");

        session.apply_guess(letter('a')).unwrap();
        assert_eq!(session.mask(), "_a_");
        assert_eq!(session.status(), GameStatus::InProgress);

        session.apply_guess(letter('c')).unwrap();
        assert_eq!(session.mask(), "ca_");
        assert_eq!(session.status(), GameStatus::InProgress);

        session.apply_guess(letter('t')).unwrap();
        assert_eq!(session.mask(), "cat");
        assert_eq!(session.status(), GameStatus::Won);

        // 3 * 5 for letters, 6 * 10 for attempts, 20 for no hints
        assert_eq!(session.score(), 95);
    }

    #[test]
    fn losing_dog_after_six_misses() {
        let mut session = session("dog");
        guess_all(&mut session, "xyzqw");
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempts_remaining(), 1);

        let outcome = session.apply_guess(letter('v')).unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::Incorrect {
                letter: letter('v'),
                attempts_remaining: 0
            }
        );
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.attempts_remaining(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.incorrect_count(), 6);
    }

    #[test]
    fn hint_penalty_and_lost_no_hint_bonus() {
        let mut session = session("fish");
        let mut rng = SequenceSource::new(vec![0]);

        let hinted = session.apply_hint(&mut rng).unwrap();
        assert_eq!(hinted, letter('f'));
        assert_eq!(session.score(), -HINT_PENALTY);
        assert!(session.hint_used());
        assert_eq!(session.hints_remaining(), 1);
        // The hinted letter is revealed, not claimed
        assert_eq!(session.mask(), "____");

        guess_all(&mut session, "fish");
        assert_eq!(session.status(), GameStatus::Won);
        // -5 hint, 4 * 5 letters, 6 * 10 attempts, no 20 bonus
        assert_eq!(session.score(), -5 + 20 + 60);
    }

    #[test]
    fn third_hint_is_rejected() {
        let mut session = session("panda");
        let mut rng = SequenceSource::new(vec![1, 2, 3]);

        session.apply_hint(&mut rng).unwrap();
        session.apply_hint(&mut rng).unwrap();
        let score = session.score();

        assert_eq!(session.apply_hint(&mut rng), Err(HintError::NoHintsRemaining));
        assert_eq!(session.score(), score);
        assert_eq!(session.score(), -2 * HINT_PENALTY);
        assert_eq!(session.hints_remaining(), 0);
        assert!(session.hint_used());
        assert_eq!(session.hints_given().len(), 2);
    }

    #[test]
    fn hint_only_reveals_unguessed_letters() {
        let mut session = session("banana");
        guess_all(&mut session, "an");

        for pick in 0..6 {
            let mut fresh = session.clone();
            let mut rng = SequenceSource::new(vec![pick]);
            assert_eq!(fresh.apply_hint(&mut rng).unwrap(), letter('b'));
        }
    }

    #[test]
    fn hint_does_not_touch_attempts_or_letter_sets() {
        let mut session = session("zebra");
        session.apply_guess(letter('q')).unwrap();
        let attempts = session.attempts_remaining();

        session.apply_hint(&mut SequenceSource::new(vec![4])).unwrap();

        assert_eq!(session.attempts_remaining(), attempts);
        assert!(session.guessed_letters().is_empty());
        assert_eq!(session.incorrect_guesses(), vec![letter('q')]);
    }

    #[test]
    fn hint_with_nothing_to_reveal() {
        // Reachable only by bypassing the win check
        let mut session = session("uk");
        session.guessed.insert(letter('u'));
        session.guessed.insert(letter('k'));

        let err = session
            .apply_hint(&mut SequenceSource::default())
            .unwrap_err();
        assert_eq!(err, HintError::NoLettersToReveal);
        assert_eq!(session.hints_remaining(), HINTS_PER_ROUND);
        assert_eq!(session.score(), 0);
        assert!(!session.hint_used());
    }

    #[test]
    fn duplicate_guess_is_rejected_without_change() {
        let mut session = session("tiger");
        session.apply_guess(letter('t')).unwrap();
        session.apply_guess(letter('z')).unwrap();
        let before = (
            session.score(),
            session.attempts_remaining(),
            session.guessed_letters(),
            session.incorrect_guesses(),
        );

        assert_eq!(
            session.apply_guess(letter('t')),
            Err(GuessError::DuplicateGuess(letter('t')))
        );
        assert_eq!(
            session.apply_guess(letter('z')),
            Err(GuessError::DuplicateGuess(letter('z')))
        );

        let after = (
            session.score(),
            session.attempts_remaining(),
            session.guessed_letters(),
            session.incorrect_guesses(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn guess_parses_raw_input() {
        let mut session = session("hippo");
        assert_eq!(
            session.guess("P"),
            Ok(GuessOutcome::Correct {
                letter: letter('p'),
                occurrences: 2
            })
        );
        assert_eq!(
            session.guess("pp"),
            Err(GuessError::InvalidLetter(LetterError::WrongLength(2)))
        );
        assert_eq!(
            session.guess("!"),
            Err(GuessError::InvalidLetter(LetterError::NotAlphabetic('!')))
        );
    }

    #[test]
    fn padded_input_is_rejected_without_change() {
        let mut session = session("cat");
        for input in [" a", "a ", "a\n"] {
            assert_eq!(
                session.guess(input),
                Err(GuessError::InvalidLetter(LetterError::WrongLength(2)))
            );
        }

        assert_eq!(session.score(), 0);
        assert_eq!(session.attempts_remaining(), MAX_ATTEMPTS);
        assert!(session.guessed_letters().is_empty());
        assert!(session.incorrect_guesses().is_empty());
        assert_eq!(session.mask(), "___");
    }

    #[test]
    fn repeated_letters_score_once() {
        let mut session = session("kiwi");
        session.apply_guess(letter('i')).unwrap();
        assert_eq!(session.score(), CORRECT_GUESS_POINTS);
        assert_eq!(session.mask(), "_i_i");
    }

    #[test]
    fn finished_round_rejects_actions() {
        let mut session = session("uk");
        guess_all(&mut session, "uk");
        let score = session.score();

        assert_eq!(
            session.apply_guess(letter('a')),
            Err(GuessError::RoundOver(GameStatus::Won))
        );
        assert_eq!(
            session.apply_hint(&mut SequenceSource::default()),
            Err(HintError::RoundOver(GameStatus::Won))
        );
        assert_eq!(session.score(), score);
    }

    #[test]
    fn win_bonus_counts_remaining_attempts() {
        let mut session = session("usa");
        guess_all(&mut session, "xyusa");
        assert_eq!(session.status(), GameStatus::Won);
        // 3 letters, 4 attempts left, no hints
        assert_eq!(session.score(), 15 + 40 + 20);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut session = session("uk");
        guess_all(&mut session, "abcdeu");
        assert_eq!(session.attempts_remaining(), 1);
        session.apply_guess(letter('k')).unwrap();
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.score(), 10 + 10 + 20);
    }

    #[test]
    fn score_can_go_negative_on_loss() {
        let mut session = session("peacock");
        let mut rng = SequenceSource::new(vec![0, 0]);
        session.apply_hint(&mut rng).unwrap();
        session.apply_hint(&mut rng).unwrap();
        guess_all(&mut session, "xyzqwv");
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.score(), -10);
    }

    #[test]
    fn apply_dispatches_actions() {
        let mut session = session("cat");
        let mut rng = SequenceSource::new(vec![2]);

        assert_eq!(
            session.apply(Action::Hint, &mut rng),
            Ok(TurnOutcome::Hinted(letter('t')))
        );
        assert!(matches!(
            session.apply(Action::Guess(letter('t')), &mut rng),
            Ok(TurnOutcome::Guessed(GuessOutcome::Correct { .. }))
        ));
        assert_eq!(
            session.apply(Action::Guess(letter('t')), &mut rng),
            Err(TurnError::Guess(GuessError::DuplicateGuess(letter('t'))))
        );
    }

    #[test]
    fn letter_sets_stay_disjoint() {
        let mut session = session("kangaroo");
        let mut rng = SequenceSource::new(vec![3, 1]);
        for input in ["k", "z", "k", "a", "z", "hint", "o", "x", "hint", "hint", "n"] {
            if let Ok(action) = Action::parse(input) {
                let _ = session.apply(action, &mut rng);
            }
        }

        let guessed = session.guessed_letters();
        for letter in session.incorrect_guesses() {
            assert!(!guessed.contains(&letter));
        }
        assert_eq!(session.hints_remaining(), 0);
        assert_eq!(
            session.attempts_remaining(),
            MAX_ATTEMPTS - session.incorrect_count() as u8
        );
    }

    #[test]
    fn revealed_matches_mask() {
        let mut session = session("melon");
        guess_all(&mut session, "eo");
        let revealed: String = session
            .revealed()
            .iter()
            .map(|slot| slot.map_or('_', Letter::as_char))
            .collect();
        assert_eq!(revealed, session.mask());
    }
}
