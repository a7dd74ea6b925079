//! Simple interactive CLI mode
//!
//! Line-based hangman game without TUI. Reads from any `BufRead` and writes
//! to any `Write` so the whole flow can be driven by scripted input.

use crate::core::GameError;
use crate::manager::{SessionManager, WordSource};
use crate::output::{Gallows, print_game_state, print_game_summary};
use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Whether the menu loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Console front-end driving a [`SessionManager`]
pub struct ConsoleGame<'a, S: WordSource + ?Sized, R: BufRead, W: Write> {
    manager: SessionManager<'a, S>,
    input: R,
    out: W,
}

impl<'a, S: WordSource + ?Sized, R: BufRead, W: Write> ConsoleGame<'a, S, R, W> {
    /// Create a console game
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfiguration` if `max_errors` is zero.
    pub fn new(source: &'a S, max_errors: u32, input: R, out: W) -> Result<Self, GameError> {
        Ok(Self {
            manager: SessionManager::new(source, max_errors)?,
            input,
            out,
        })
    }

    /// Run the main menu until the player quits or input ends
    ///
    /// # Errors
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line("Your choice")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.play_single_player()?,
                "2" => self.play_two_player()?,
                "3" | "q" | "quit" => Flow::Quit,
                _ => {
                    writeln!(self.out, "\nInvalid choice. Please enter 1, 2 or 3.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.out, "\n👋 Thanks for playing!\n")?;
        Ok(())
    }

    /// The manager behind this front-end
    pub const fn manager(&self) -> &SessionManager<'a, S> {
        &self.manager
    }

    /// Consume the game and return its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n╔════════════════════════════════════╗")?;
        writeln!(self.out, "║          HANGMAN - MENU            ║")?;
        writeln!(self.out, "╚════════════════════════════════════╝")?;
        writeln!(self.out, "\n1. Single player (random word)")?;
        writeln!(self.out, "2. Two players (choose the word)")?;
        writeln!(self.out, "3. Quit")
    }

    fn play_single_player(&mut self) -> Result<Flow> {
        if let Err(e) = self.manager.start_single_player() {
            writeln!(self.out, "\n{} {e}", "Error:".red().bold())?;
            return Ok(Flow::Continue);
        }
        self.play_game()
    }

    fn play_two_player(&mut self) -> Result<Flow> {
        let Some(word) = self.read_line("\nPlayer 1, enter the secret word")? else {
            return Ok(Flow::Quit);
        };

        if word.is_empty() {
            writeln!(self.out, "\nThe word cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        // Hide the word from player 2
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;

        if let Err(e) = self.manager.start_two_player(&word) {
            writeln!(self.out, "\n{} {e}", "Error:".red().bold())?;
            return Ok(Flow::Continue);
        }

        writeln!(
            self.out,
            "\n{}",
            "✓ Word saved! Player 2, your turn!".green()
        )?;
        self.play_game()
    }

    fn play_game(&mut self) -> Result<Flow> {
        let Some(gallows) = self
            .manager
            .active_session()
            .map(|session| Gallows::new(session.max_errors()))
        else {
            return Ok(Flow::Continue);
        };

        while self.manager.has_active_in_progress_session() {
            if let Some(session) = self.manager.active_session() {
                print_game_state(&mut self.out, session, gallows)?;
            }

            let Some(input) = self.read_line("\nGuess a letter")? else {
                return Ok(Flow::Quit);
            };
            self.handle_guess(&input)?;
        }

        if let Some(session) = self.manager.active_session() {
            print_game_summary(&mut self.out, session, gallows)?;
        }
        Ok(Flow::Continue)
    }

    fn handle_guess(&mut self, input: &str) -> io::Result<()> {
        let mut chars = input.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return writeln!(self.out, "{}", "⚠ Please enter a single letter.".yellow());
        };

        let already = self
            .manager
            .active_session()
            .is_some_and(|session| session.is_already_attempted(letter));
        if already {
            return writeln!(
                self.out,
                "{}",
                "⚠ You already tried this letter!".yellow()
            );
        }

        match self.manager.propose_letter(letter) {
            Ok(true) => writeln!(self.out, "{}", "✓ Well done! The letter is in the word.".green()),
            Ok(false) => writeln!(self.out, "{}", "✗ Too bad! The letter is not in the word.".red()),
            Err(e) => {
                debug!(error = %e, "Guess rejected");
                writeln!(self.out, "{}", format!("⚠ {e}").yellow())
            }
        }
    }

    /// Prompt and read one trimmed line; `None` once input is exhausted
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if `max_errors` is zero or if there's an I/O error
/// reading user input or writing output.
pub fn run_simple<S: WordSource + ?Sized>(source: &S, max_errors: u32) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = ConsoleGame::new(source, max_errors, stdin.lock(), stdout.lock())?;
    game.run()
}
