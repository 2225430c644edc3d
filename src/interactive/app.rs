//! TUI application state and logic

use super::input::{action_for_key, is_interrupt};
use crate::config::GameConfig;
use crate::core::KeyboardState;
use crate::game::{ActionOutcome, Round, RoundError, RoundState, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How often the event loop wakes up to advance animations
const TICK: Duration = Duration::from_millis(30);

/// Application state
pub struct App {
    pub config: GameConfig,
    pub round: Round,
    pub screen: Screen,
    /// Secret word being typed on the setup screen
    pub word_input: String,
    pub messages: Vec<Message>,
    pub reveal: Option<Reveal>,
    /// The pending row shakes until this instant
    pub shake_until: Option<Instant>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Game,
    Result,
}

/// A scored row being uncovered tile by tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub row: usize,
    pub started: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            round: Round::new(&config),
            config,
            screen: Screen::Setup,
            word_input: String::new(),
            messages: vec![Message {
                text: "Player 1: type the secret word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            reveal: None,
            shake_until: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Process one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if is_interrupt(&key) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Game => self.handle_game_key(key, now),
            Screen::Result => match key.code {
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.start_round(),
            KeyCode::Backspace | KeyCode::Delete => {
                self.word_input.pop();
            }
            KeyCode::Char(c)
                if !c.is_control()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.word_input.push(c);
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Esc {
            // A finished round still revealing its last row is not yet counted
            if self.round.state().is_over() {
                self.stats.record(&self.round);
            }
            self.new_round();
            return;
        }

        // Input waits until the previous row has been revealed
        if self.reveal.is_some() {
            return;
        }

        let Some(action) = action_for_key(&key) else {
            return;
        };

        match self.round.dispatch(action) {
            Ok(ActionOutcome::Submitted(outcome)) => {
                self.reveal = Some(Reveal {
                    row: self.round.attempts().len() - 1,
                    started: now,
                });
                if outcome.state == RoundState::InProgress {
                    let left = outcome.attempts_remaining;
                    self.add_message(
                        &format!("{left} {} left", if left == 1 { "attempt" } else { "attempts" }),
                        MessageStyle::Info,
                    );
                }
                self.tick(now);
            }
            Ok(_) => {}
            Err(RoundError::IncompleteAttempt(e)) => {
                self.shake_until = Some(now + self.config.timing.shake);
                self.add_message(
                    &format!("Not enough letters ({}/{})", e.filled, e.expected),
                    MessageStyle::Error,
                );
            }
            Err(e) => debug!(%e, "game key ignored"),
        }
    }

    /// Advance animations
    ///
    /// Moves to the result screen once the final row is fully revealed and
    /// the result delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.shake_until.is_some_and(|until| now >= until) {
            self.shake_until = None;
        }

        let Some(reveal) = self.reveal else {
            return;
        };

        let timing = self.config.timing;
        let word_length = self.round.word_length().unwrap_or(0);
        let mut done_after = timing.row_duration(word_length);
        if self.round.state().is_over() {
            done_after += timing.result_delay;
        }

        if now.saturating_duration_since(reveal.started) >= done_after {
            self.reveal = None;
            if self.round.state().is_over() {
                self.finish_round();
            }
        }
    }

    fn finish_round(&mut self) {
        self.stats.record(&self.round);
        self.screen = Screen::Result;
        match self.round.state() {
            RoundState::Won => {
                let attempts = self.round.attempts().len();
                self.add_message(
                    &format!(
                        "Solved in {attempts} {}!",
                        if attempts == 1 { "attempt" } else { "attempts" }
                    ),
                    MessageStyle::Success,
                );
            }
            _ => self.add_message("Out of attempts.", MessageStyle::Error),
        }
    }

    /// Try to start a round with the typed secret word
    pub fn start_round(&mut self) {
        match self.round.configure_word(&self.word_input) {
            Ok(word) => {
                self.word_input.clear();
                self.screen = Screen::Game;
                self.messages.clear();
                self.add_message(
                    &format!(
                        "Player 2: guess the {}-letter word in {} attempts.",
                        word.len(),
                        self.round.max_attempts()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Discard the current round and go back to the setup screen
    pub fn new_round(&mut self) {
        self.round.reset();
        self.screen = Screen::Setup;
        self.word_input.clear();
        self.reveal = None;
        self.shake_until = None;
        self.messages.clear();
        self.add_message(
            "New round! Player 1: type the secret word.",
            MessageStyle::Info,
        );
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

    /// Number of tiles of `row` whose color is visible at `now`
    #[must_use]
    pub fn revealed_tiles(&self, row: usize, now: Instant) -> usize {
        let word_length = self.round.word_length().unwrap_or(0);
        match self.reveal {
            Some(reveal) if reveal.row == row => {
                let stagger = self.config.timing.tile_stagger;
                if stagger.is_zero() {
                    return word_length;
                }
                let elapsed = now.saturating_duration_since(reveal.started);
                let shown = elapsed.as_nanos() / stagger.as_nanos() + 1;
                usize::try_from(shown).unwrap_or(usize::MAX).min(word_length)
            }
            _ if row < self.round.attempts().len() => word_length,
            _ => 0,
        }
    }

    /// Keyboard state counting only rows that finished revealing
    #[must_use]
    pub fn visible_keyboard(&self) -> KeyboardState {
        let attempts = self.round.attempts();
        let shown = match self.reveal {
            Some(reveal) => &attempts[..reveal.row],
            None => attempts,
        };
        KeyboardState::from_attempts(shown.iter().map(|a| (&a.guess, &a.feedback)))
    }

    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.shake_until.is_some()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
