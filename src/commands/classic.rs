//! Classic console mode
//!
//! Prompt-driven rounds: pick a category and difficulty, guess letters until the
//! word is found or the figure is complete, then decide whether to play again.

use crate::catalog::{Catalog, Category, Difficulty};
use crate::core::{Action, GameStatus, GuessOutcome, RandomSource, SessionTotals, TurnOutcome};
use crate::output::{
    print_banner, print_category_menu, print_difficulty_menu, print_final_statistics,
    print_game_state, print_loss, print_round_intro, print_running_totals, print_win,
};
use crate::round::Round;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::debug;

/// Line-oriented player I/O
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show a prompt and read one line without its line terminator
    ///
    /// Returns `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading input fails.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }

    /// Prompt until the player enters a number in `1..=count`
    fn choose(&mut self, prompt: &str, count: usize) -> io::Result<Option<usize>> {
        loop {
            let Some(input) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match input.trim().parse::<i64>() {
                Ok(choice) if (1..=count as i64).contains(&choice) => {
                    return Ok(Some(choice as usize));
                }
                Ok(_) => writeln!(self.output, "Invalid choice. Please try again.")?,
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }
}

/// Run the classic console game until the player stops
///
/// Returns the totals over every finished round. Running out of input ends the
/// session the same way as declining to play again.
///
/// # Errors
///
/// Returns an error if there's an I/O error on the console.
pub fn run_classic<R, W, S>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
    rng: &mut S,
) -> Result<SessionTotals>
where
    R: BufRead,
    W: Write,
    S: RandomSource + ?Sized,
{
    print_banner(console.output())?;

    let mut totals = SessionTotals::new();
    while let Some(score) = play_round(catalog, console, rng)? {
        totals.record(score);
        print_running_totals(console.output(), &totals)?;

        match console.prompt("\nPlay again? (y/n): ")? {
            Some(answer) if wants_another(&answer) => {}
            _ => break,
        }
    }

    print_final_statistics(console.output(), &totals)?;
    Ok(totals)
}

/// Whether a continuation answer means yes
#[must_use]
pub fn wants_another(answer: &str) -> bool {
    answer
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

/// Play one round; `None` if input ran out before it finished
fn play_round<R, W, S>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
    rng: &mut S,
) -> Result<Option<i32>>
where
    R: BufRead,
    W: Write,
    S: RandomSource + ?Sized,
{
    let Some(category) = select_category(catalog, console)? else {
        return Ok(None);
    };
    let Some(difficulty) = select_difficulty(console)? else {
        return Ok(None);
    };

    let mut round = Round::start(catalog, category, difficulty, rng)?;
    print_round_intro(console.output(), &round)?;

    loop {
        let session = round.session();
        match session.status() {
            GameStatus::Lost => {
                print_loss(console.output(), session)?;
                return Ok(Some(session.score()));
            }
            GameStatus::Won => {
                print_game_state(console.output(), &round)?;
                print_win(console.output(), session)?;
                return Ok(Some(session.score()));
            }
            GameStatus::InProgress => print_game_state(console.output(), &round)?,
        }

        if !take_turn(&mut round, console, rng)? {
            debug!("input closed mid-round");
            return Ok(None);
        }
    }
}

fn select_category<'c, R: BufRead, W: Write>(
    catalog: &'c Catalog,
    console: &mut Console<R, W>,
) -> io::Result<Option<&'c Category>> {
    print_category_menu(console.output(), catalog)?;
    let choice = console.choose("Enter category number: ", catalog.len())?;
    Ok(choice.and_then(|n| catalog.from_menu(n)))
}

fn select_difficulty<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<Difficulty>> {
    print_difficulty_menu(console.output())?;
    let choice = console.choose(
        &format!("Enter difficulty level (1-{}): ", Difficulty::ALL.len()),
        Difficulty::ALL.len(),
    )?;
    Ok(choice.and_then(Difficulty::from_menu))
}

/// Prompt until one action is accepted; `false` if input ran out
fn take_turn<R, W, S>(
    round: &mut Round,
    console: &mut Console<R, W>,
    rng: &mut S,
) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
    S: RandomSource + ?Sized,
{
    loop {
        let Some(input) = console.prompt("\nGuess a letter (or 'hint'): ")? else {
            return Ok(false);
        };

        let action = match Action::parse(&input) {
            Ok(action) => action,
            Err(err) => {
                writeln!(console.output(), "{err}")?;
                continue;
            }
        };

        let out = console.output();
        match round.session_mut().apply(action, rng) {
            Ok(TurnOutcome::Hinted(letter)) => {
                writeln!(
                    out,
                    "{} The word contains the letter '{letter}'",
                    "Hint:".bright_magenta().bold()
                )?;
            }
            Ok(TurnOutcome::Guessed(GuessOutcome::Correct { .. })) => {
                writeln!(out, "{}", "Correct guess!".green())?;
            }
            Ok(TurnOutcome::Guessed(GuessOutcome::Incorrect {
                attempts_remaining, ..
            })) => {
                writeln!(
                    out,
                    "{} {attempts_remaining} attempts remaining.",
                    "Incorrect!".red()
                )?;
            }
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        }
        return Ok(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::parse_catalog;
    use crate::core::SequenceSource;
    use std::io::Cursor;

    fn one_word_catalog(word: &str) -> Catalog {
        parse_catalog(&format!("test easy {word}\ntest medium {word}\ntest hard {word}")).unwrap()
    }

    fn play(catalog: &Catalog, script: &str) -> (SessionTotals, String) {
        colored::control::set_override(false);
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let mut rng = SequenceSource::new(vec![0]);
        let totals = run_classic(catalog, &mut console, &mut rng).unwrap();
        (totals, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn winning_round_scores_and_stops() {
        let catalog = one_word_catalog("cat");
        let (totals, text) = play(&catalog, "1\n1\na\nc\nt\nn\n");

        assert_eq!(totals.games_played(), 1);
        assert_eq!(totals.total_score(), 95);
        assert!(text.contains("=== ENHANCED HANGMAN GAME ==="));
        assert!(text.contains("Word: _ a _"));
        assert!(text.contains("Word: c a t"));
        assert!(text.contains("Congratulations! You guessed the word: cat"));
        assert!(text.contains("Your final score: 95"));
        assert!(text.contains("Total Games: 1"));
        assert!(text.contains("Average Score: 95.0"));
    }

    #[test]
    fn losing_round() {
        let catalog = one_word_catalog("dog");
        let (totals, text) = play(&catalog, "1\n1\nx\ny\nz\nq\nw\nv\nno\n");

        assert_eq!(totals.total_score(), 0);
        assert!(text.contains("Incorrect! 0 attempts remaining."));
        assert!(text.contains("Game over! The word was: dog"));
        assert!(text.contains("Your final score: 0"));
    }

    #[test]
    fn invalid_input_is_reprompted() {
        let catalog = one_word_catalog("uk");
        let script = "abc\n0\n7\n1\n-2\n2\nuk\n5\nu\nu\nk\nn\n";
        let (totals, text) = play(&catalog, script);

        assert_eq!(totals.games_played(), 1);
        assert!(text.contains("Please enter a number."));
        assert!(text.contains("Invalid choice. Please try again."));
        assert!(text.contains("Please enter a single letter."));
        assert!(text.contains("Please enter a valid letter (a-z)."));
        assert!(text.contains("You've already guessed that letter."));
        assert!(text.contains("Difficulty: Medium"));
    }

    #[test]
    fn hints_report_letter_and_run_out() {
        let catalog = one_word_catalog("fish");
        let (totals, text) = play(&catalog, "1\n1\nhint\nHINT\nhint\nf\ni\ns\nh\nn\n");

        assert!(text.contains("Hint: The word contains the letter 'f'"));
        assert!(text.contains("No hints remaining!"));
        // -10 hints, 20 letters, 60 attempt bonus
        assert_eq!(totals.total_score(), 70);
    }

    #[test]
    fn play_again_accumulates_totals() {
        let catalog = one_word_catalog("uk");
        let (totals, text) = play(&catalog, "1\n1\nu\nk\nYes\n1\n3\nz\nu\nk\nn\n");

        assert_eq!(totals.games_played(), 2);
        // 90 for a clean win, 80 with one miss
        assert_eq!(totals.total_score(), 170);
        assert!(text.contains("Games Played: 2 | Total Score: 170"));
        assert!(text.contains("Average Score: 85.0"));
    }

    #[test]
    fn end_of_input_finishes_cleanly() {
        let catalog = one_word_catalog("cat");
        let (totals, text) = play(&catalog, "1\n1\na\n");

        assert_eq!(totals.games_played(), 0);
        assert!(text.contains("Total Games: 0"));
        assert!(text.contains("Average Score: n/a"));
    }

    #[test]
    fn padded_guesses_are_not_single_letters() {
        let catalog = one_word_catalog("cat");
        let (totals, text) = play(&catalog, "1\n1\n a\nc \na\nc\nt\nn\n");

        assert_eq!(text.matches("Please enter a single letter.").count(), 2);
        assert!(!text.contains("Incorrect!"));
        // Same clean win as if the padded lines were never typed
        assert_eq!(totals.total_score(), 95);
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let catalog = one_word_catalog("cat");
        let (totals, text) = play(&catalog, "1\r\n1\r\na\r\nc\r\nt\r\ny\r\n");

        assert_eq!(totals.games_played(), 1);
        assert!(!text.contains("Please enter a single letter."));
    }

    #[test]
    fn continuation_answers() {
        assert!(wants_another("y"));
        assert!(wants_another("Y"));
        assert!(wants_another("yes please"));
        assert!(!wants_another(" y"));
        assert!(!wants_another("n"));
        assert!(!wants_another(""));
        assert!(!wants_another("sure"));
    }
}
