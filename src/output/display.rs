//! Display functions for the console game and command results
//!
//! Everything writes to a caller-supplied `Write` so the console runner can be
//! driven from tests.

use super::art::{full_figure, gallows};
use super::formatters::{average, create_progress_bar, letter_list, spaced_mask};
use crate::catalog::{Catalog, Difficulty};
use crate::commands::SimulationResult;
use crate::core::{GameSession, HINTS_PER_ROUND, SecretWord, SessionTotals};
use crate::round::Round;
use colored::Colorize;
use std::io::{self, Write};

/// Print the startup banner
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=== ENHANCED HANGMAN GAME ===".bright_cyan().bold())?;
    writeln!(out, "Features: Categories | Difficulty Levels | Hints | Scoring")
}

/// Print the numbered category menu
pub fn print_category_menu<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "\nSelect a category:")?;
    for (i, category) in catalog.categories().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, category.title())?;
    }
    Ok(())
}

/// Print the numbered difficulty menu
pub fn print_difficulty_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nSelect difficulty:")?;
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        writeln!(out, "{}. {} {}", i + 1, difficulty.label(), difficulty.blurb())?;
    }
    Ok(())
}

/// Print the greeting at the start of a round
pub fn print_round_intro<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    writeln!(out, "\n{}", "Welcome to Enhanced Hangman!".bright_green().bold())?;
    writeln!(
        out,
        "Guess the {} {} word. You have {} attempts.",
        round.difficulty(),
        round.category().to_lowercase(),
        round.session().attempts_remaining()
    )?;
    writeln!(out, "Type 'hint' for a hint ({HINTS_PER_ROUND} available per game)")
}

/// Print the gallows and the status lines for the current turn
pub fn print_game_state<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    let session = round.session();

    writeln!(out, "{}", gallows(session.incorrect_count()))?;
    writeln!(
        out,
        "\nCategory: {} | Difficulty: {}",
        round.category(),
        round.difficulty().label()
    )?;
    writeln!(
        out,
        "Score: {} | Hints remaining: {}",
        session.score(),
        session.hints_remaining()
    )?;
    writeln!(out, "\nWord: {}", spaced_mask(session).bright_white().bold())?;
    writeln!(out, "Incorrect guesses: {}", letter_list(&session.incorrect_guesses()))?;
    writeln!(out, "Attempts left: {}", session.attempts_remaining())
}

/// Print the win announcement
pub fn print_win<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}",
        "Congratulations! You guessed the word:".bright_green().bold(),
        session.secret()
    )?;
    print_final_score(out, session)
}

/// Print the loss announcement with the full figure
pub fn print_loss<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out, "{}", full_figure())?;
    writeln!(
        out,
        "\n{} {}",
        "Game over! The word was:".red().bold(),
        session.secret()
    )?;
    print_final_score(out, session)
}

fn print_final_score<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(
        out,
        "Your final score: {}",
        session.score().to_string().bright_yellow().bold()
    )
}

/// Print totals after each round
pub fn print_running_totals<W: Write>(out: &mut W, totals: &SessionTotals) -> io::Result<()> {
    writeln!(
        out,
        "\nGames Played: {} | Total Score: {}",
        totals.games_played(),
        totals.total_score()
    )?;
    writeln!(out, "Average Score: {}", average(totals.average()))
}

/// Print the closing statistics
pub fn print_final_statistics<W: Write>(out: &mut W, totals: &SessionTotals) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        "Thanks for playing! Final Statistics:".bright_cyan().bold()
    )?;
    writeln!(out, "Total Games: {}", totals.games_played())?;
    writeln!(out, "Total Score: {}", totals.total_score())?;
    writeln!(out, "Average Score: {}", average(totals.average()))
}

/// Print every catalog entry
pub fn print_catalog<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} categories, {} words ",
        "WORD CATALOG:".bright_cyan().bold(),
        catalog.len(),
        catalog.word_count()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    for category in catalog.categories() {
        writeln!(out, "\n📚 {}", category.title().bright_yellow().bold())?;
        for difficulty in Difficulty::ALL {
            let words = category.words(difficulty);
            let listed: Vec<&str> = words.iter().map(SecretWord::text).collect();
            writeln!(
                out,
                "   {:<7} {:>2}  {}",
                difficulty.label(),
                words.len(),
                listed.join(", ")
            )?;
        }
    }
    Ok(())
}

/// Print the result of an autoplay simulation
pub fn print_simulation_result<W: Write>(out: &mut W, result: &SimulationResult) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(70).cyan())?;
    writeln!(out, " {} ", "SIMULATION RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(70).cyan())?;

    writeln!(out, "\n📊 {}", "Overall:".bright_cyan().bold())?;
    writeln!(out, "   Strategy:         {}", result.strategy)?;
    writeln!(out, "   Rounds played:    {}", result.rounds)?;
    writeln!(
        out,
        "   Win rate:         [{}] {}",
        create_progress_bar(result.win_rate(), 100.0, 30).green(),
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    )?;
    writeln!(
        out,
        "   Average score:    {}",
        average(result.average_score()).bright_yellow()
    )?;
    if let (Some(best), Some(worst)) = (result.best_score, result.worst_score) {
        writeln!(out, "   Best score:       {}", best.to_string().green())?;
        writeln!(out, "   Worst score:      {}", worst.to_string().yellow())?;
    }
    writeln!(out, "   Hints used:       {}", result.hints_used)?;
    writeln!(out, "   Time taken:       {:.2}s", result.duration.as_secs_f64())?;

    writeln!(out, "\n📈 {}", "By entry:".bright_cyan().bold())?;
    for entry in &result.entries {
        writeln!(
            out,
            "   {:<12} {:<7} {:>5.1}% won   avg {:>6}",
            entry.category,
            entry.difficulty.label(),
            entry.win_rate(),
            average(entry.average_score())
        )?;
    }
    Ok(())
}
