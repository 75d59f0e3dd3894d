//! The form app — gather one request, run it, show the outcome.
//!
//! This is the interactive input surface for the session orchestrator:
//! a single form (game type, line count, save toggle) with three actions
//! (generate, show saved, delete). Results and messages render as
//! overlays; Enter/Esc returns to the form for the next request, and
//! quitting the form terminates the session.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;
use tracing::{debug, info};

use genlottery_core::{
    DisplayPayload, LotteryType, MAX_LINES, MIN_LINES, Session, SessionAction, SessionError,
    SessionRequest,
};

use super::Tui;
use super::event::{Event, EventReader};
use super::theme;

// ── State types ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Type,
    Lines,
    Save,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Type => Self::Lines,
            Self::Lines => Self::Save,
            Self::Save => Self::Type,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Type => Self::Save,
            Self::Lines => Self::Type,
            Self::Save => Self::Lines,
        }
    }
}

/// What the surface is currently showing.
enum View {
    /// The input form (session `AwaitInput`).
    Form,
    /// Generated or reloaded lines plus the session message.
    Results(DisplayPayload),
    /// A message-only outcome (delete verdicts, missing file, store errors).
    Message(String),
}

// ── App ─────────────────────────────────────────────────────────────

/// Form state and event loop.
pub struct FormApp {
    session: Session,
    types: Vec<LotteryType>,
    type_index: usize,
    lines_input: String,
    save: bool,
    focus: Field,
    error: Option<String>,
    view: View,
    running: bool,
}

impl FormApp {
    /// Build the form with defaults resolved from flags and config.
    pub fn new(session: Session, lottery_type: LotteryType, lines: usize, save: bool) -> Self {
        let types: Vec<LotteryType> = LotteryType::iter().collect();
        let type_index = types.iter().position(|&t| t == lottery_type).unwrap_or(0);

        Self {
            session,
            types,
            type_index,
            lines_input: lines.to_string(),
            save,
            focus: Field::Type,
            error: None,
            view: View::Form,
            running: true,
        }
    }

    /// Run the form loop until the user quits.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let events = EventReader::new(Duration::from_millis(250));
        info!("form surface started");

        while self.running {
            tui.draw(|frame| self.render(frame))?;
            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(..) | Event::Tick => {}
            }
        }

        self.session.finish();
        info!("form surface ended");
        Ok(())
    }

    fn selected_type(&self) -> LotteryType {
        self.types[self.type_index]
    }

    // ── Input handling ──────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match self.view {
            View::Form => self.handle_form_key(key),
            View::Results(_) | View::Message(_) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.view = View::Form;
                }
            }
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.running = false,

            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),

            KeyCode::Left if self.focus == Field::Type => {
                self.type_index = (self.type_index + self.types.len() - 1) % self.types.len();
            }
            KeyCode::Right if self.focus == Field::Type => {
                self.type_index = (self.type_index + 1) % self.types.len();
            }

            KeyCode::Backspace if self.focus == Field::Lines => {
                self.lines_input.pop();
            }
            KeyCode::Char(c) if self.focus == Field::Lines && c.is_ascii_digit() => {
                // MAX_LINES is three digits; anything longer is noise
                if self.lines_input.len() < 3 {
                    self.lines_input.push(c);
                }
            }

            KeyCode::Char(' ') if self.focus == Field::Save => self.save = !self.save,

            KeyCode::Enter | KeyCode::Char('g') => {
                self.dispatch(SessionAction::Generate { save: self.save });
            }
            KeyCode::Char('p') => self.dispatch(SessionAction::ShowSaved),
            KeyCode::Char('d') => self.dispatch(SessionAction::Delete),

            _ => {}
        }
    }

    /// Run one session request and route the outcome to a view.
    fn dispatch(&mut self, action: SessionAction) {
        self.error = None;

        let lines = match self.lines_input.parse::<usize>() {
            Ok(n) => n,
            Err(_) if matches!(action, SessionAction::Generate { .. }) => {
                self.error = Some(format!("Enter a line count ({MIN_LINES}-{MAX_LINES})"));
                return;
            }
            // Show/delete don't need a count
            Err(_) => MIN_LINES,
        };

        let request = SessionRequest {
            action,
            lottery_type: self.selected_type(),
            lines,
        };
        debug!(?request, "form dispatch");

        match self.session.handle(&request) {
            Ok(payload) if payload.results.is_empty() => {
                self.view = View::Message(payload.message);
            }
            Ok(payload) => self.view = View::Results(payload),
            // Recoverable: show the message inline and re-prompt
            Err(err @ SessionError::InvalidLineCount { .. }) => {
                self.error = Some(err.to_string());
            }
            // Store failure: report it, the session continues
            Err(err) => self.view = View::Message(format!("Error: {err}")),
        }
    }

    // ── Rendering ───────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let panel = centered_panel(frame, area, "Lottery number Generator");

        match &self.view {
            View::Form => self.render_form(frame, panel),
            View::Results(payload) => render_results(frame, panel, payload),
            View::Message(message) => render_message(frame, panel, message),
        }
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(4), // type
            Constraint::Length(4), // lines
            Constraint::Length(2), // save toggle
            Constraint::Min(1),    // spacer
            Constraint::Length(1), // error
            Constraint::Length(2), // hints
        ])
        .split(area);

        self.render_type_field(frame, layout[0]);
        self.render_lines_field(frame, layout[1]);
        self.render_save_field(frame, layout[2]);

        if let Some(ref err) = self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(err.as_str(), Style::default().fg(theme::ERROR)))
                    .alignment(Alignment::Center),
                layout[4],
            );
        }

        let hints = vec![
            Line::from(Span::styled(
                "Tab field  \u{2190}/\u{2192} game  Space save on/off",
                theme::key_hint(),
            )),
            Line::from(Span::styled(
                "Enter/g generate  p show saved  d delete  q quit",
                theme::key_hint(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(hints).alignment(Alignment::Center),
            layout[5],
        );
    }

    fn render_type_field(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Field::Type;
        let value = Line::from(vec![
            Span::styled("\u{25C2} ", theme::field_border(focused)),
            Span::styled(
                self.selected_type().as_str(),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" \u{25B8}", theme::field_border(focused)),
        ]);
        render_field(frame, area, "Lottery type", value, focused);
    }

    fn render_lines_field(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Field::Lines;
        let text = if focused {
            format!("{}\u{2588}", self.lines_input)
        } else {
            self.lines_input.clone()
        };
        let value = Line::from(Span::styled(text, Style::default().fg(theme::ACCENT)));
        render_field(frame, area, "Lines to generate", value, focused);
    }

    fn render_save_field(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Field::Save;
        let marker = if self.save { "[x]" } else { "[ ]" };
        let line = Line::from(vec![
            Span::styled(marker, theme::field_label(focused)),
            Span::styled(" Save the generated numbers", theme::field_label(focused)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

// ── Shared rendering helpers ────────────────────────────────────────

/// Draw the bordered, centered panel all views live in; returns its
/// inner area.
fn centered_panel(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let panel_w = 56u16.min(area.width.saturating_sub(2));
    let panel_h = 20u16.min(area.height.saturating_sub(1));
    let x = (area.width.saturating_sub(panel_w)) / 2;
    let y = (area.height.saturating_sub(panel_h)) / 2;
    let panel = Rect::new(area.x + x, area.y + y, panel_w, panel_h);

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title.to_string(), theme::title()),
            Span::raw(" "),
        ]))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::HIGHLIGHT));

    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    // One cell of breathing room inside the border
    Rect::new(
        inner.x + 2,
        inner.y + 1,
        inner.width.saturating_sub(4),
        inner.height.saturating_sub(2),
    )
}

/// A labelled single-value field with a focus-aware border.
fn render_field(frame: &mut Frame, area: Rect, label: &str, value: Line, focused: bool) {
    if area.height < 4 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Span::styled(label, theme::field_label(focused))),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::field_border(focused));
    let block_area = Rect::new(area.x, area.y + 1, area.width, 3);
    let inner = block.inner(block_area);
    frame.render_widget(block, block_area);
    frame.render_widget(Paragraph::new(value), inner);
}

fn render_results(frame: &mut Frame, area: Rect, payload: &DisplayPayload) {
    let layout = Layout::vertical([
        Constraint::Length(2), // game name
        Constraint::Min(1),    // lines
        Constraint::Length(2), // message
        Constraint::Length(1), // hint
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            payload.lottery_type.as_str(),
            theme::title(),
        ))
        .alignment(Alignment::Center),
        layout[0],
    );

    let lines: Vec<Line> = payload
        .results
        .iter()
        .enumerate()
        .map(|(index, line)| {
            Line::from(vec![
                Span::styled(
                    format!("Line {}: ", index + 1),
                    Style::default().fg(theme::TEXT),
                ),
                Span::styled(line.to_string(), Style::default().fg(theme::ACCENT)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), layout[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(
            payload.message.as_str(),
            Style::default().fg(theme::SUCCESS),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        layout[2],
    );

    frame.render_widget(
        Paragraph::new(Span::styled("Enter to continue", theme::key_hint()))
            .alignment(Alignment::Center),
        layout[3],
    );
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let layout = Layout::vertical([
        Constraint::Min(1),    // message
        Constraint::Length(1), // hint
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(message, Style::default().fg(theme::TEXT)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        layout[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled("Enter to continue", theme::key_hint()))
            .alignment(Alignment::Center),
        layout[1],
    );
}
