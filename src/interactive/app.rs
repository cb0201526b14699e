//! TUI application state and logic

use crate::catalog::{Catalog, Difficulty};
use crate::core::{Action, GameStatus, GuessOutcome, RandomSource, SessionTotals, TurnOutcome};
use crate::round::Round;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Where the player is in the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ChooseCategory,
    /// Category index into the catalog
    ChooseDifficulty(usize),
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a, R: RandomSource> {
    pub catalog: &'a Catalog,
    rng: R,
    pub stage: Stage,
    pub round: Option<Round>,
    pub totals: SessionTotals,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'a, R: RandomSource> App<'a, R> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            stage: Stage::ChooseCategory,
            round: None,
            totals: SessionTotals::new(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Pick a category to start.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Apply a 1-based category choice
    pub fn select_category(&mut self, choice: usize) {
        if self.catalog.from_menu(choice).is_some() {
            self.stage = Stage::ChooseDifficulty(choice - 1);
        } else {
            self.add_message("Invalid choice. Please try again.", MessageStyle::Error);
        }
    }

    /// Apply a 1-based difficulty choice and start the round
    pub fn select_difficulty(&mut self, choice: usize) {
        let Stage::ChooseDifficulty(index) = self.stage else {
            return;
        };
        let catalog = self.catalog;
        let (Some(category), Some(difficulty)) =
            (catalog.categories().get(index), Difficulty::from_menu(choice))
        else {
            self.add_message("Invalid choice. Please try again.", MessageStyle::Error);
            return;
        };

        match Round::start(catalog, category, difficulty, &mut self.rng) {
            Ok(round) => {
                let intro = format!(
                    "Guess the {} {} word. Type 'hint' for a hint.",
                    round.difficulty(),
                    category.name()
                );
                self.round = Some(round);
                self.stage = Stage::Guessing;
                self.input_buffer.clear();
                self.add_message(&intro, MessageStyle::Info);
            }
            Err(err) => {
                warn!(%err, "could not start round");
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.stage = Stage::ChooseCategory;
            }
        }
    }

    /// Submit the typed input as a guess or hint request
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let action = match Action::parse(&input) {
            Ok(action) => action,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let (text, style) = match round.session_mut().apply(action, &mut self.rng) {
            Ok(TurnOutcome::Hinted(letter)) => (
                format!("Hint: The word contains the letter '{letter}'"),
                MessageStyle::Info,
            ),
            Ok(TurnOutcome::Guessed(GuessOutcome::Correct { letter, .. })) => (
                format!("Correct guess! '{letter}' is in the word."),
                MessageStyle::Success,
            ),
            Ok(TurnOutcome::Guessed(GuessOutcome::Incorrect {
                attempts_remaining, ..
            })) => (
                format!("Incorrect! {attempts_remaining} attempts remaining."),
                MessageStyle::Error,
            ),
            Err(err) => (err.to_string(), MessageStyle::Error),
        };
        self.add_message(&text, style);

        self.check_round_over();
    }

    fn check_round_over(&mut self) {
        let Some(round) = &self.round else {
            return;
        };
        let session = round.session();
        let text = match session.status() {
            GameStatus::InProgress => return,
            GameStatus::Won => format!(
                "Congratulations! You guessed the word: {} (score {})",
                session.secret(),
                session.score()
            ),
            GameStatus::Lost => format!(
                "Game over! The word was: {} (score {})",
                session.secret(),
                session.score()
            ),
        };
        let style = if session.status() == GameStatus::Won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };

        self.totals.record(session.score());
        self.stage = Stage::RoundOver;
        self.add_message(&text, style);
        self.add_message("Play again? (y/n)", MessageStyle::Info);
    }

    /// Go back to the category menu for another round
    pub fn new_round(&mut self) {
        self.round = None;
        self.input_buffer.clear();
        self.stage = Stage::ChooseCategory;
        self.add_message("New round! Pick a category.", MessageStyle::Info);
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.stage {
            Stage::ChooseCategory => {
                if let Some(choice) = menu_digit(key.code) {
                    self.select_category(choice);
                }
            }
            Stage::ChooseDifficulty(_) => {
                if key.code == KeyCode::Backspace {
                    self.stage = Stage::ChooseCategory;
                } else if let Some(choice) = menu_digit(key.code) {
                    self.select_difficulty(choice);
                }
            }
            Stage::Guessing => match key.code {
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            Stage::RoundOver => match key.code {
                KeyCode::Char('y' | 'Y') => self.new_round(),
                KeyCode::Char('n' | 'N' | 'q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

fn menu_digit(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c) => c.to_digit(10).map(|d| d as usize),
        _ => None,
    }
}

/// Run the TUI application
///
/// Returns the totals over every finished round.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: RandomSource>(mut app: App<'_, R>) -> Result<SessionTotals> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(app.totals)
}

fn run_app<B: ratatui::backend::Backend, R: RandomSource>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
