//! TUI rendering with ratatui

use super::app::{App, GameView, MessageStyle};
use crate::core::{GamePhase, SessionSnapshot};
use crate::output::formatters::letter_mask;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD GUESS - Find the hidden word")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Hints ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match &app.view {
        GameView::Playing { snapshot, .. } => hint_lines(snapshot),
        GameView::Failed(err) => vec![
            Line::from(Span::styled(
                err.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!(
                "Available lengths: {}",
                app.table
                    .catalog()
                    .supported_lengths()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        ],
        GameView::Idle => vec![
            Line::from("No game yet."),
            Line::from(""),
            Line::from("Choose a length with ←/→ and press Enter to start."),
        ],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn hint_lines(snapshot: &SessionSnapshot) -> Vec<Line<'static>> {
    let hint = &snapshot.hint;
    vec![
        Line::from(vec![
            Span::styled(
                letter_mask(hint),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   ({})", hint.category()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(hint.description_text()),
        Line::from(hint.associations_text()),
        Line::from(format!("Letter hints: {}", hint.letters_text())),
        Line::from(hint.length_text()),
    ]
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let length = app.snapshot().map_or(0, |s| s.word_length);

    let items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let color = if entry.correct == length {
                Color::Green
            } else {
                Color::White
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}: ", i + 1)),
                Span::styled(
                    format!("{:<10}", entry.guess.to_uppercase()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}/{length} in place", entry.correct),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let history =
        List::new(items).block(Block::default().title(" Guesses ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let (remaining, total) = app
        .snapshot()
        .map_or((0, 0), |s| (s.attempts_remaining, s.max_attempts));
    let percent = if total == 0 {
        0
    } else {
        // At most 100, fits in u16
        (remaining.min(total) * 100 / total) as u16
    };
    let color = match percent {
        0..=20 => Color::Red,
        21..=60 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{total} left"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.snapshot() {
        Some(snapshot) => match snapshot.phase {
            GamePhase::InProgress => (
                format!(
                    " Your guess ({} letters) | Enter to submit ",
                    snapshot.word_length
                ),
                Color::Yellow,
            ),
            GamePhase::Won => (
                " 🎉 You found it! | Enter for a new game ".to_string(),
                Color::Green,
            ),
            GamePhase::Lost => (
                " Out of attempts | Enter for a new game ".to_string(),
                Color::Red,
            ),
        },
        None => (" Press Enter to start ".to_string(), Color::Cyan),
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let length = Paragraph::new(format!("Length: ◀ {} ▶", app.selected_length))
        .alignment(Alignment::Center);
    f.render_widget(length, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak = Paragraph::new(format!("Streak: {}", app.stats.current_streak))
        .alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Tab: New Game | ←/→: Length")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
