//! TUI application state and logic

use crate::core::{GameError, GuessOutcome, SessionId, SessionSnapshot, Verdict};
use crate::engine::SessionTable;
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

/// What the main panel shows
///
/// A failed start and a running game never coexist.
#[derive(Debug, Clone)]
pub enum GameView {
    Idle,
    Failed(GameError),
    Playing {
        session: SessionId,
        snapshot: SessionSnapshot,
    },
}

/// Application state
pub struct App<'a> {
    pub table: &'a SessionTable<'a>,
    pub view: GameView,
    /// Id reused by every restart, kept even while a failed start is shown
    pub last_session: Option<SessionId>,
    pub selected_length: usize,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: String,
    pub correct: usize,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(table: &'a SessionTable<'a>, selected_length: usize) -> Self {
        let config = table.config();
        let selected_length =
            selected_length.clamp(config.min_word_length, config.max_word_length);

        Self {
            table,
            view: GameView::Idle,
            last_session: None,
            selected_length,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Pick a word length with ←/→ and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Each guess tells you how many letters are in the right place."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// The running session, if any
    #[must_use]
    pub const fn session(&self) -> Option<SessionId> {
        match &self.view {
            GameView::Playing { session, .. } => Some(*session),
            GameView::Idle | GameView::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn snapshot(&self) -> Option<&SessionSnapshot> {
        match &self.view {
            GameView::Playing { snapshot, .. } => Some(snapshot),
            GameView::Idle | GameView::Failed(_) => None,
        }
    }

    /// True while a game accepts guesses
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.snapshot().is_some_and(|s| !s.game_over)
    }

    /// Start a game of the selected length, replacing any current one
    pub fn new_game(&mut self) {
        let length = self.selected_length;
        match self.table.start_game(self.last_session, length) {
            Ok((session, snapshot)) => {
                debug!(%session, length, "tui game started");
                self.last_session = Some(session);
                self.history.clear();
                self.input_buffer.clear();
                self.view = GameView::Playing { session, snapshot };
                self.add_message(
                    &format!("New {length}-letter word. Good luck!"),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                self.history.clear();
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.view = GameView::Failed(err);
            }
        }
    }

    pub fn submit_guess(&mut self) {
        let Some(session) = self.session() else {
            return;
        };
        let guess = std::mem::take(&mut self.input_buffer);

        let outcome = match self.table.submit_guess(session, &guess) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.view = GameView::Failed(err);
                return;
            }
        };

        if let Some(correct) = outcome.correct_count
            && outcome.used_attempt()
        {
            self.history.push(HistoryEntry {
                guess: guess.to_lowercase(),
                correct,
            });
        }

        self.record_outcome(&outcome);

        match self.table.snapshot(session) {
            Ok(snapshot) => self.view = GameView::Playing { session, snapshot },
            Err(err) => self.view = GameView::Failed(err),
        }
    }

    fn record_outcome(&mut self, outcome: &GuessOutcome) {
        let style = match outcome.verdict {
            Verdict::Won => MessageStyle::Success,
            Verdict::Missed { .. } => MessageStyle::Info,
            Verdict::Lost { .. } | Verdict::Rejected(_) | Verdict::AlreadyOver => {
                MessageStyle::Error
            }
        };
        self.add_message(&outcome.message, style);

        match outcome.verdict {
            Verdict::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.current_streak += 1;
            }
            Verdict::Lost { .. } => {
                self.stats.total_games += 1;
                self.stats.current_streak = 0;
            }
            _ => return,
        }
        self.add_message(
            "Press Enter for a new game or Esc to quit.",
            MessageStyle::Info,
        );
    }

    /// Move the length selector by `delta`, staying within the configured range
    pub fn shift_length(&mut self, delta: isize) {
        let config = self.table.config();
        self.selected_length = self
            .selected_length
            .saturating_add_signed(delta)
            .clamp(config.min_word_length, config.max_word_length);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Down => self.shift_length(-1),
            KeyCode::Right | KeyCode::Up => self.shift_length(1),
            KeyCode::Tab => self.new_game(),
            KeyCode::Char(c) => {
                if self.in_progress()
                    && c.is_ascii_alphabetic()
                    && self.input_buffer.len() < self.table.config().max_word_length
                {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                if !self.in_progress() {
                    self.new_game();
                } else if !self.input_buffer.is_empty() {
                    self.submit_guess();
                }
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GamePhase, WordRecord};
    use crate::wordlists::{AssociationTable, WordCatalog};

    fn deer_catalog() -> WordCatalog {
        WordCatalog::from_records([WordRecord::new("deer", "A forest animal", "animals").unwrap()])
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn enter_starts_a_game() {
        let catalog = deer_catalog();
        let associations = AssociationTable::default();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);
        let mut app = App::new(&table, 4);

        assert!(app.session().is_none());
        press(&mut app, KeyCode::Enter);

        let snapshot = app.snapshot().unwrap();
        assert_eq!(snapshot.word_length, 4);
        assert_eq!(snapshot.attempts_remaining, 5);
        assert!(app.in_progress());
    }

    #[test]
    fn winning_updates_stats() {
        let catalog = deer_catalog();
        let associations = AssociationTable::default();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);
        let mut app = App::new(&table, 4);

        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "DEER");

        assert_eq!(app.snapshot().unwrap().phase, GamePhase::Won);
        assert!(!app.in_progress());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.current_streak, 1);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].correct, 4);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn losing_resets_streak() {
        let catalog = deer_catalog();
        let associations = AssociationTable::default();
        let config = GameConfig::default().with_starting_attempts(2);
        let table = SessionTable::seeded(&catalog, &associations, config, 1);
        let mut app = App::new(&table, 4);
        app.stats.current_streak = 3;

        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "beer");
        assert_eq!(app.history[0].correct, 3);
        type_word(&mut app, "bike");

        assert_eq!(app.snapshot().unwrap().phase, GamePhase::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert_eq!(app.stats.current_streak, 0);
        let last_error = app
            .messages
            .iter()
            .rev()
            .find(|m| m.style == MessageStyle::Error)
            .unwrap();
        assert!(last_error.text.contains("deer"));
    }

    #[test]
    fn wrong_length_guess_keeps_attempts() {
        let catalog = deer_catalog();
        let associations = AssociationTable::default();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);
        let mut app = App::new(&table, 4);

        press(&mut app, KeyCode::Enter);
        type_word(&mut app, "deers");

        assert_eq!(app.snapshot().unwrap().attempts_remaining, 5);
        assert!(app.history.is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(last.text, "Guess must be 4 letters long!");
    }

    #[test]
    fn unavailable_length_shows_error_without_game() {
        let catalog = deer_catalog();
        let associations = AssociationTable::default();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);
        let mut app = App::new(&table, 5);

        press(&mut app, KeyCode::Enter);

        assert!(matches!(
            app.view,
            GameView::Failed(GameError::InvalidLength { requested: 5 })
        ));
        assert!(app.session().is_none());
        assert!(app.snapshot().is_none());

        // Recovering by switching length clears the error
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert!(app.session().is_some());
    }

    #[test]
    fn length_selector_is_clamped() {
        let catalog = WordCatalog::embedded();
        let associations = AssociationTable::embedded();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);
        let mut app = App::new(&table, 5);

        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_length, 4);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_length, 10);

        assert_eq!(App::new(&table, 2).selected_length, 4);
    }

    #[test]
    fn typing_only_while_playing() {
        let catalog = deer_catalog();
        let associations = AssociationTable::default();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);
        let mut app = App::new(&table, 4);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Enter);
        for c in ['d', '1', '-', 'E'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "de");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "d");
    }

    #[test]
    fn tab_restarts_under_same_session() {
        let catalog = deer_catalog();
        let associations = AssociationTable::default();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);
        let mut app = App::new(&table, 4);

        press(&mut app, KeyCode::Enter);
        let first = app.session().unwrap();
        type_word(&mut app, "beer");
        assert_eq!(app.snapshot().unwrap().attempts_remaining, 4);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session(), Some(first));
        assert_eq!(app.snapshot().unwrap().attempts_remaining, 5);
        assert!(app.history.is_empty());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn failed_restart_keeps_the_session_id() {
        let catalog = deer_catalog();
        let associations = AssociationTable::default();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);
        let mut app = App::new(&table, 4);

        press(&mut app, KeyCode::Enter);
        let first = app.session().unwrap();

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        assert!(matches!(app.view, GameView::Failed(_)));
        assert_eq!(app.last_session, Some(first));

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session(), Some(first));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn quit_keys() {
        let catalog = deer_catalog();
        let associations = AssociationTable::default();
        let table = SessionTable::seeded(&catalog, &associations, GameConfig::default(), 1);

        let mut app = App::new(&table, 4);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&table, 4);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
