//! Autoplay simulation
//!
//! Plays many rounds per catalog entry with a solver strategy and aggregates
//! scores. Rounds are independent and run in parallel; each round's RNG is
//! seeded from the base seed and the round number, so runs are reproducible.

use crate::catalog::{Catalog, Difficulty};
use crate::core::{GameSession, GameStatus, RandomSource, RngSource, SecretWord};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub rounds_per_entry: usize,
    pub seed: u64,
    /// Ask for hints when two or fewer attempts remain and the word is ambiguous
    pub use_hints: bool,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds_per_entry: usize, seed: u64) -> Self {
        Self {
            rounds_per_entry,
            seed,
            use_hints: false,
            show_progress: false,
        }
    }
}

/// Outcome of one simulated round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub score: i32,
    pub won: bool,
    pub hints: u8,
}

/// Aggregate for one category and difficulty
#[derive(Debug, Clone)]
pub struct EntryResult {
    pub category: String,
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub wins: usize,
    pub total_score: i64,
}

impl EntryResult {
    /// Percentage of rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        percentage(self.wins, self.rounds)
    }

    #[must_use]
    pub fn average_score(&self) -> Option<f64> {
        (self.rounds > 0).then(|| self.total_score as f64 / self.rounds as f64)
    }
}

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub strategy: String,
    pub entries: Vec<EntryResult>,
    pub rounds: usize,
    pub wins: usize,
    pub total_score: i64,
    pub best_score: Option<i32>,
    pub worst_score: Option<i32>,
    pub hints_used: usize,
    pub duration: Duration,
}

impl SimulationResult {
    /// Percentage of rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        percentage(self.wins, self.rounds)
    }

    #[must_use]
    pub fn average_score(&self) -> Option<f64> {
        (self.rounds > 0).then(|| self.total_score as f64 / self.rounds as f64)
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

/// Run the simulation over every non-empty catalog entry
pub fn run_simulation<S>(
    catalog: &Catalog,
    strategy: S,
    strategy_name: &str,
    config: SimulationConfig,
) -> SimulationResult
where
    S: Strategy + Copy + Sync,
{
    let entries: Vec<(&str, Difficulty, &[SecretWord])> = catalog
        .categories()
        .iter()
        .flat_map(|category| {
            Difficulty::ALL
                .into_iter()
                .map(move |difficulty| (category.name(), difficulty, category.words(difficulty)))
        })
        .filter(|(_, _, words)| !words.is_empty())
        .collect();

    let total_rounds = entries.len() * config.rounds_per_entry;
    info!(
        strategy = strategy_name,
        entries = entries.len(),
        rounds = total_rounds,
        "simulation started"
    );

    let pb = if config.show_progress {
        ProgressBar::new(total_rounds as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut result = SimulationResult {
        strategy: strategy_name.to_string(),
        entries: Vec::with_capacity(entries.len()),
        rounds: 0,
        wins: 0,
        total_score: 0,
        best_score: None,
        worst_score: None,
        hints_used: 0,
        duration: Duration::ZERO,
    };

    for (index, &(category, difficulty, words)) in entries.iter().enumerate() {
        pb.set_message(format!("{category} {difficulty}"));
        let solver = Solver::new(strategy, words);
        let base = (index * config.rounds_per_entry) as u64;

        let records: Vec<RoundRecord> = (0..config.rounds_per_entry)
            .into_par_iter()
            .map(|round| {
                let mut rng = RngSource::seeded(config.seed.wrapping_add(base + round as u64));
                let secret = &words[rng.pick(words.len())];
                let record = simulate_round(&solver, secret, config.use_hints, &mut rng);
                pb.inc(1);
                record
            })
            .collect();

        let mut entry = EntryResult {
            category: category.to_string(),
            difficulty,
            rounds: records.len(),
            wins: 0,
            total_score: 0,
        };
        for record in &records {
            entry.wins += usize::from(record.won);
            entry.total_score += i64::from(record.score);
            result.hints_used += usize::from(record.hints);
            result.best_score =
                Some(result.best_score.map_or(record.score, |b| b.max(record.score)));
            result.worst_score =
                Some(result.worst_score.map_or(record.score, |w| w.min(record.score)));
        }
        result.rounds += entry.rounds;
        result.wins += entry.wins;
        result.total_score += entry.total_score;
        result.entries.push(entry);
    }

    pb.finish_with_message("Complete!");
    result.duration = start.elapsed();
    info!(
        rounds = result.rounds,
        wins = result.wins,
        elapsed_ms = result.duration.as_millis() as u64,
        "simulation finished"
    );
    result
}

/// Play one round to completion with the solver
pub fn simulate_round<S, R>(
    solver: &Solver<'_, S>,
    secret: &SecretWord,
    use_hints: bool,
    rng: &mut R,
) -> RoundRecord
where
    S: Strategy,
    R: RandomSource + ?Sized,
{
    let mut session = GameSession::new(secret.clone());
    let mut hints = 0;

    while session.status() == GameStatus::InProgress {
        if use_hints
            && session.attempts_remaining() <= 2
            && session.hints_remaining() > 0
            && solver.count_candidates(&session) > 1
            && session.apply_hint(rng).is_ok()
        {
            hints += 1;
            continue;
        }

        let Some(letter) = solver.next_guess(&session) else {
            break;
        };
        if session.apply_guess(letter).is_err() {
            break;
        }
    }

    RoundRecord {
        score: session.score(),
        won: session.status() == GameStatus::Won,
        hints,
    }
}
