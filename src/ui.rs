//! TUI rendering module.
//!
//! This module handles all visual rendering using ratatui:
//! - Title and input field
//! - Direction selector
//! - Result panel with per-base coloring for DNA output
//! - Status bar, error notification and help overlay

pub mod glyphs;

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::AppState;
use crate::transcoder::{Direction, SENTINEL};
use glyphs::Glyphs;

/// Height of the title block.
const TITLE_HEIGHT: u16 = 3;
/// Height of the input block.
const INPUT_HEIGHT: u16 = 3;
/// Height of the direction selector line.
const SELECTOR_HEIGHT: u16 = 1;
/// Height of the status bar.
const STATUS_BAR_HEIGHT: u16 = 1;
/// Time between two spinner frames.
const SPINNER_STEP: Duration = Duration::from_millis(100);

/// Color scheme for result characters.
pub trait ColorScheme {
    fn get_color(&self, c: char) -> Color;
}

/// DNA nucleotide color scheme.
pub struct DnaColorScheme;

impl ColorScheme for DnaColorScheme {
    fn get_color(&self, c: char) -> Color {
        match c.to_ascii_uppercase() {
            'A' => Color::Red,
            'C' => Color::Green,
            'G' => Color::Yellow,
            'T' => Color::Blue,
            _ => Color::DarkGray,
        }
    }
}

/// Renders the complete UI.
pub fn render(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, now: Instant) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(SELECTOR_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    render_title(frame, layout[0]);
    render_input(frame, state, glyphs, layout[1]);
    render_selector(frame, state, glyphs, layout[2]);
    render_result(frame, state, glyphs, now, layout[3]);
    render_status_bar(frame, state, layout[4]);

    if let Some(toast) = &state.toast {
        render_toast(frame, &toast.message, area);
    }
    if state.show_help {
        render_help(frame, area);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "DNA Encryption & Decryption",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_input(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect) {
    let line = Line::from(vec![
        Span::raw(state.input.as_str()),
        Span::styled(glyphs.cursor, Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Enter your message");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_selector(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, area: Rect) {
    let option = |direction: Direction, label: &'static str| {
        let active = state.direction == direction;
        let marker = if active { glyphs.selected } else { glyphs.unselected };
        let style = if active {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Span::styled(format!(" {} {} ", marker, label), style)
    };

    let line = Line::from(vec![
        option(Direction::Encode, "Encrypt"),
        Span::raw("  "),
        option(Direction::Decode, "Decrypt"),
        Span::styled(
            format!("  Enter {} run, Tab {} switch", glyphs.arrow_right, glyphs.arrow_right),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Styles a result according to the direction that produced it.
fn result_spans(direction: Direction, output: &str) -> Vec<Span<'static>> {
    match direction {
        Direction::Encode => {
            let scheme = DnaColorScheme;
            output
                .chars()
                .map(|c| {
                    Span::styled(
                        c.to_string(),
                        Style::default().fg(Color::Black).bg(scheme.get_color(c)),
                    )
                })
                .collect()
        }
        Direction::Decode => output
            .split_inclusive(SENTINEL)
            .flat_map(|chunk| match chunk.strip_suffix(SENTINEL) {
                Some(text) => vec![
                    Span::raw(text.to_string()),
                    Span::styled(
                        SENTINEL.to_string(),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ],
                None => vec![Span::raw(chunk.to_string())],
            })
            .collect(),
    }
}

fn render_result(frame: &mut Frame, state: &AppState, glyphs: &Glyphs, now: Instant, area: Rect) {
    let (title, lines) = match (&state.pending, &state.outcome) {
        (Some(pending), _) => {
            let elapsed = now.saturating_duration_since(pending.started);
            let tick = (elapsed.as_millis() / SPINNER_STEP.as_millis()) as usize;
            let label = match pending.direction {
                Direction::Encode => "Encrypting",
                Direction::Decode => "Decrypting",
            };
            (
                format!("Result [{} {}]", glyphs.spinner_frame(tick), label),
                Vec::new(),
            )
        }
        (None, Some(outcome)) => {
            let label = match outcome.direction {
                Direction::Encode => "Encrypted DNA sequence",
                Direction::Decode => "Decrypted text",
            };
            (
                format!("Result [{} | {} chars]", label, outcome.output.chars().count()),
                vec![Line::from(result_spans(outcome.direction, &outcome.output))],
            )
        }
        (None, None) => ("Result".to_string(), Vec::new()),
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let mode = match state.direction {
        Direction::Encode => "ENCODE",
        Direction::Decode => "DECODE",
    };
    let left = format!(" {} | {} chars ", mode, state.input.chars().count());
    let right = " F1 help | Esc quit ";

    let status_line = Line::from(vec![
        Span::styled(left.clone(), Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(
            " ".repeat((area.width as usize).saturating_sub(left.len() + right.len())),
            Style::default().bg(Color::Cyan),
        ),
        Span::styled(
            right,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(status_line), area);
}

fn render_toast(frame: &mut Frame, message: &str, area: Rect) {
    let width = area.width.saturating_sub(4).min(60);
    let lines: Vec<Line> = textwrap::wrap(message, width.saturating_sub(2).max(1) as usize)
        .into_iter()
        .map(|l| Line::from(l.into_owned()))
        .collect();
    let popup = popup_area(area, width, lines.len() as u16 + 2);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Error")
        .style(Style::default().fg(Color::White).bg(Color::Red));
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Type letters and spaces to encrypt,"),
        Line::from("or A, C, G, T to decrypt."),
        Line::from(""),
        Line::from("Enter       run selected direction"),
        Line::from("Ctrl+E      encrypt"),
        Line::from("Ctrl+D      decrypt"),
        Line::from("Tab         switch direction"),
        Line::from("Ctrl+U      clear input"),
        Line::from("Esc         quit"),
        Line::from("any key     dismiss error"),
        Line::from(""),
        Line::from("Press any key to close"),
    ];
    let popup = popup_area(area, 44, lines.len() as u16 + 2);
    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Centers a `width` x `height` box in `area`, clamped to fit.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
