//! TUI rendering with ratatui
//!
//! Setup, game and result screens for the game.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Letter, LetterStatus};
use crate::game::RoundState;
use crate::output::formatters::{KEYBOARD_ROWS, create_progress_bar, keyboard_row, share_grid};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.screen {
        Screen::Setup => render_setup(f, app, chunks[1]),
        Screen::Game => render_game(f, app, chunks[1], now),
        Screen::Result => render_result(f, app, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE DUEL")
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

fn render_setup(f: &mut Frame, app: &App, area: Rect) {
    // The guesser may be looking at the screen
    let masked = "•".repeat(app.word_input.chars().count());

    let content = vec![
        Line::from(""),
        Line::from("Secret word:"),
        Line::from(Span::styled(
            format!("> {masked}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Letters A-Z and Ñ, any length.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Setup ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(paragraph, area);
}

fn render_game(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let keyboard_height = 5;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                   // Board
            Constraint::Length(keyboard_height), // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0], now);
    render_keyboard(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let round = &app.round;
    let word_length = round.word_length().unwrap_or(0);
    let attempts = round.attempts();
    let used = attempts.len();

    let mut lines = vec![Line::from(format!(
        "Attempts left: {} [{}]",
        round.attempts_remaining(),
        create_progress_bar(round.attempts_remaining(), round.max_attempts(), 12)
    ))];
    lines.push(Line::from(""));

    for row in 0..round.max_attempts() {
        let spans: Vec<Span> = if let Some(attempt) = attempts.get(row) {
            let shown = app.revealed_tiles(row, now);
            attempt
                .guess
                .letters()
                .iter()
                .zip(attempt.feedback.statuses())
                .enumerate()
                .map(|(i, (&letter, &status))| {
                    let status = (i < shown).then_some(status);
                    tile(Some(letter), status, false)
                })
                .collect()
        } else if row == used && round.state() == RoundState::InProgress {
            let pending = round.pending();
            (0..word_length)
                .map(|i| tile(pending.get(i).copied(), None, app.is_shaking()))
                .collect()
        } else {
            (0..word_length).map(|_| tile(None, None, false)).collect()
        };

        // Shaking rows are nudged sideways
        let indent = if row == used && app.is_shaking() { " " } else { "" };
        let mut line = vec![Span::raw(indent)];
        line.extend(spans);
        lines.push(Line::from(line));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.visible_keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                keyboard_row(row)
                    .map(|letter| tile(Some(letter), keyboard.status(letter), false))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_result(f: &mut Frame, app: &App, area: Rect) {
    let round = &app.round;
    let (headline, color) = if round.state() == RoundState::Won {
        ("Congratulations! You won!", Color::Green)
    } else {
        ("Game Over", Color::Red)
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(target) = round.target() {
        content.push(Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                target.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        content.push(Line::from(""));
    }

    content.extend(share_grid(round).lines().map(|l| Line::from(l.to_string())));
    content.push(Line::from(""));
    content.push(Line::from(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    )));

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.screen {
        Screen::Setup => "Enter: Start | Backspace: Delete | Esc: Quit",
        Screen::Game => "Enter: Submit | Backspace: Delete | Esc: New Word | Ctrl-C: Quit",
        Screen::Result => "Enter/n: Play Again | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// One board or keyboard tile
fn tile(letter: Option<Letter>, status: Option<LetterStatus>, shaking: bool) -> Span<'static> {
    let text = letter.map_or_else(|| " · ".to_string(), |l| format!(" {l} "));
    let style = match status {
        Some(LetterStatus::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None if shaking => Style::default().fg(Color::Red),
        None => Style::default().fg(Color::White),
    };
    Span::styled(text, style.add_modifier(Modifier::BOLD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, RevealTiming};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, app, Instant::now())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), Instant::now());
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), Instant::now());
    }

    #[test]
    fn setup_screen_masks_secret() {
        let mut app = App::new(GameConfig::default());
        for c in "gato".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), Instant::now());
        }
        let text = screen_text(&app);
        assert!(text.contains("Secret word:"));
        assert!(!text.contains("gato"));
    }

    #[test]
    fn game_screen_shows_board_and_keyboard() {
        let config = GameConfig::new(6, RevealTiming::instant()).unwrap();
        let mut app = App::new(config);
        press(&mut app, "gato");
        press(&mut app, "pato");

        let text = screen_text(&app);
        assert!(text.contains("Attempts left: 5"));
        assert!(text.contains(" P  A  T  O "));
        assert!(text.contains(" Q  W  E  R  T  Y  U  I  O  P "));
    }

    #[test]
    fn result_screen_reveals_word() {
        let config = GameConfig::new(1, RevealTiming::instant()).unwrap();
        let mut app = App::new(config);
        press(&mut app, "sol");
        press(&mut app, "mar");

        let text = screen_text(&app);
        assert!(text.contains("Game Over"));
        assert!(text.contains("The word was: SOL"));
        assert!(text.contains("X/1"));
    }
}
