//! TUI application state and logic

use crate::core::{GameError, GameSession, GameStatus};
use crate::manager::{SessionManager, WordSource};
use crate::output::Gallows;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, S: WordSource + ?Sized> {
    pub manager: SessionManager<'a, S>,
    pub screen: Screen,
    pub word_input: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    WordEntry,
    Playing,
    GameOver,
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

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a, S: WordSource + ?Sized> App<'a, S> {
    /// Create the application on the main menu
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `max_errors` is zero.
    pub fn new(source: &'a S, max_errors: u32) -> Result<Self, GameError> {
        Ok(Self {
            manager: SessionManager::new(source, max_errors)?,
            screen: Screen::Menu,
            word_input: String::new(),
            messages: vec![Message {
                text: "Welcome! Press 1 for a random word or 2 to pick one for a friend."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// The session being shown, if any
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.manager.active_session()
    }

    /// Drawing matching the active session's budget
    #[must_use]
    pub fn gallows(&self) -> Gallows {
        Gallows::new(
            self.session()
                .map_or(self.manager.default_max_errors(), GameSession::max_errors),
        )
    }

    pub fn start_single_player(&mut self) {
        match self.manager.start_single_player() {
            Ok(()) => self.enter_game("New game started! Guess a letter."),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn begin_word_entry(&mut self) {
        self.word_input.clear();
        self.screen = Screen::WordEntry;
        self.add_message(
            "Player 1: type the secret word, then press Enter.",
            MessageStyle::Info,
        );
    }

    pub fn submit_word(&mut self) {
        let word = std::mem::take(&mut self.word_input);
        match self.manager.start_two_player(&word) {
            Ok(()) => self.enter_game("Word saved! Player 2, your turn."),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn enter_game(&mut self, message: &str) {
        self.messages.clear();
        self.screen = Screen::Playing;
        self.add_message(message, MessageStyle::Info);
    }

    pub fn guess(&mut self, letter: char) {
        if self
            .session()
            .is_some_and(|session| session.is_already_attempted(letter))
        {
            self.add_message(
                &format!("You already tried {}!", letter.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        }

        match self.manager.propose_letter(letter) {
            Ok(true) => self.add_message(
                &format!("✓ {} is in the word.", letter.to_uppercase()),
                MessageStyle::Success,
            ),
            Ok(false) => self.add_message(
                &format!("✗ {} is not in the word.", letter.to_uppercase()),
                MessageStyle::Error,
            ),
            Err(e) => {
                debug!(error = %e, "Guess rejected");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }

        if self.manager.is_finished() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let Some(session) = self.manager.active_session() else {
            return;
        };
        let won = session.status() == GameStatus::Won;
        let word = session.revealed_word().to_string();

        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            self.add_message(
                &format!("🎉 You found {word}!"),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("💀 Hanged! The word was {word}."),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        self.screen = Screen::GameOver;
    }

    pub fn back_to_menu(&mut self) {
        self.word_input.clear();
        self.screen = Screen::Menu;
        self.add_message(
            "Press 1 for a random word or 2 to pick one for a friend.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press to the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => match key.code {
                KeyCode::Char('1') => self.start_single_player(),
                KeyCode::Char('2') => self.begin_word_entry(),
                KeyCode::Char('3' | 'q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::WordEntry => match key.code {
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Enter => self.submit_word(),
                KeyCode::Backspace => {
                    self.word_input.pop();
                }
                KeyCode::Char(c) if c.is_alphabetic() => self.word_input.push(c),
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Esc => self.back_to_menu(),
                KeyCode::Char(c) => self.guess(c),
                _ => {}
            },
            Screen::GameOver => match key.code {
                KeyCode::Char('n') | KeyCode::Esc => self.back_to_menu(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup, rendering, or event handling fails.
pub fn run_tui<S: WordSource + ?Sized>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSource + ?Sized>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
