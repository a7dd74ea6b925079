//! TUI rendering with ratatui
//!
//! Visualizations for the hangman game.

use super::app::{App, MessageStyle, Screen};
use crate::core::GameStatus;
use crate::manager::WordSource;
use crate::output::formatters::format_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word and info
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_gallows<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let errors = app.session().map_or(0, |session| session.error_count());
    let color = match app.session().map(|session| session.status()) {
        Some(GameStatus::Lost) => Color::Red,
        Some(GameStatus::Won) => Color::Green,
        _ => Color::White,
    };

    let drawing = Paragraph::new(app.gallows().render(errors))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(drawing, area);
}

fn render_info_panel<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(3), // Error gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_error_gauge(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let content = if let Some(session) = app.session() {
        let word = if session.status() == GameStatus::Lost {
            // Disclose the secret once the game is lost
            session
                .revealed_word()
                .chars()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            session.display_form()
        };

        let attempted = session.attempted_letters();
        vec![
            Line::from(Span::styled(
                word,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!(
                "Tried: {}",
                if attempted.is_empty() {
                    "-".to_string()
                } else {
                    format_letters(&attempted)
                }
            )),
        ]
    } else {
        vec![Line::from("No game yet")]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_error_gauge<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (errors, max_errors) = app.session().map_or(
        (0, app.manager.default_max_errors()),
        |session| (session.error_count(), session.max_errors()),
    );
    let ratio = (f64::from(errors) / f64::from(max_errors.max(1))).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().title(" Errors ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(ratio)
        .label(format!("{errors}/{max_errors}"));
    f.render_widget(gauge, area);
}

fn render_messages<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_input<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let masked;
    let (title, content, color) = match app.screen {
        Screen::Menu => (
            " 1: Single player | 2: Two players | q: Quit ",
            "",
            Color::Cyan,
        ),
        Screen::WordEntry => {
            // Never show the secret word while it is typed
            masked = "*".repeat(app.word_input.chars().count());
            (
                " Player 1: secret word (Enter to confirm, Esc to cancel) ",
                masked.as_str(),
                Color::Magenta,
            )
        }
        Screen::Playing => (" Type a letter to guess | Esc: Menu ", "", Color::Yellow),
        Screen::GameOver => (" n: New game | q: Quit ", "", Color::Green),
    };

    let input = Paragraph::new(content)
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

fn render_status<S: WordSource + ?Sized>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ])
        .split(area);

    let mode_text = match app.screen {
        Screen::Menu => "Mode: Menu",
        Screen::WordEntry => "Mode: Word entry",
        Screen::Playing => "Mode: Playing",
        Screen::GameOver => "Mode: Game over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let words_text = format!("Words: {}", app.manager.word_source().count());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help = Paragraph::new("Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
