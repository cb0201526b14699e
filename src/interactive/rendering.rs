//! TUI rendering with ratatui

use super::app::{App, MessageStyle, Stage};
use crate::catalog::Difficulty;
use crate::core::{MAX_ATTEMPTS, RandomSource};
use crate::output::art::gallows;
use crate::output::formatters::{average, letter_list, spaced_mask};
use crate::round::Round;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: RandomSource>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match (app.stage, &app.round) {
        (Stage::ChooseCategory, _) => render_category_menu(f, app, chunks[1]),
        (Stage::ChooseDifficulty(index), _) => render_difficulty_menu(f, app, index, chunks[1]),
        (Stage::Guessing | Stage::RoundOver, Some(round)) => render_round(f, round, chunks[1]),
        (_, None) => {}
    }

    render_messages(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("ENHANCED HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_category_menu<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let items: Vec<ListItem> = app
        .catalog
        .categories()
        .iter()
        .enumerate()
        .map(|(i, category)| ListItem::new(format!("{}. {}", i + 1, category.title())))
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .title(" Select a category ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_difficulty_menu<R: RandomSource>(
    f: &mut Frame,
    app: &App<'_, R>,
    index: usize,
    area: Rect,
) {
    let title = app
        .catalog
        .categories()
        .get(index)
        .map_or_else(String::new, |c| format!(" {} | Select difficulty ", c.title()));

    let items: Vec<ListItem> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, difficulty)| {
            ListItem::new(format!("{}. {} {}", i + 1, difficulty.label(), difficulty.blurb()))
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_round(f: &mut Frame, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word and stats
        ])
        .split(area);

    let session = round.session();
    let figure = Paragraph::new(gallows(session.incorrect_count()).trim_start_matches('\n'))
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(figure, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(chunks[1]);

    let content = vec![
        Line::from(format!(
            "Category: {} | Difficulty: {}",
            round.category(),
            round.difficulty().label()
        )),
        Line::from(vec![
            Span::raw("Word: "),
            Span::styled(
                spaced_mask(session),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Score: {} | Hints remaining: {}",
            session.score(),
            session.hints_remaining()
        )),
        Line::from(vec![
            Span::raw("Incorrect guesses: "),
            Span::styled(
                letter_list(&session.incorrect_guesses()),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::raw("Hints given: "),
            Span::styled(
                letter_list(session.hints_given()),
                Style::default().fg(Color::Magenta),
            ),
        ]),
    ];
    let info = Paragraph::new(content).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(info, right[0]);

    let left = session.attempts_remaining();
    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(if left > 2 { Color::Green } else { Color::Red }))
        .percent(u16::from(left) * 100 / u16::from(MAX_ATTEMPTS))
        .label(format!("{left}/{MAX_ATTEMPTS} attempts left"));
    f.render_widget(gauge, right[1]);
}

fn render_messages<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (title, color) = match app.stage {
        Stage::ChooseCategory => (" Press a number to pick a category ", Color::Cyan),
        Stage::ChooseDifficulty(_) => (
            " Press 1-3 to pick a difficulty | Backspace to go back ",
            Color::Cyan,
        ),
        Stage::Guessing => (" Guess a letter (or 'hint') and press Enter ", Color::Yellow),
        Stage::RoundOver => (" Play again? (y/n) ", Color::Green),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Total Score: {} | Average: {}",
        app.totals.games_played(),
        app.totals.total_score(),
        average(app.totals.average())
    );
    f.render_widget(Paragraph::new(stats_text), chunks[0]);

    let help = Paragraph::new("Esc: Quit")
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
