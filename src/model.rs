//! Data model for the transcoder front ends.
//!
//! This module contains:
//! - Records (an identifier plus text or DNA payload) used by batch mode
//! - The terminal UI application state

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::transcoder::{Direction, Transcoder};

/// Default pause before an interactive operation runs.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

/// How long an error notification stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// A single message or sequence with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The record identifier (from a FASTA header, without '>')
    pub id: String,
    /// Plain text or DNA, depending on the direction
    pub data: String,
}

impl Record {
    /// Creates a new record.
    pub fn new(id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Returns the length of the payload in bytes.
    ///
    /// Encoded payloads are ASCII, so this is also their base count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An operation waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub direction: Direction,
    /// Input as it was when the operation was requested
    pub input: String,
    pub started: Instant,
}

/// The last successful operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub direction: Direction,
    pub output: String,
}

/// Error notification shown over the main view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

/// The complete application state.
#[derive(Debug)]
pub struct AppState {
    /// Text typed by the user
    pub input: String,
    /// Direction used when the user presses Enter
    pub direction: Direction,
    /// Operation in flight, if any
    pub pending: Option<Pending>,
    /// Last successful result
    pub outcome: Option<Outcome>,
    /// Error notification
    pub toast: Option<Toast>,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Pause before an operation runs
    pub delay: Duration,
    transcoder: &'static Transcoder,
}

impl AppState {
    /// Creates a new state using the built-in transcoder.
    pub fn new(delay: Duration) -> Self {
        Self {
            input: String::new(),
            direction: Direction::Encode,
            pending: None,
            outcome: None,
            toast: None,
            show_help: false,
            should_quit: false,
            delay,
            transcoder: Transcoder::standard(),
        }
    }

    /// Returns true while an operation is waiting to run.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Appends a character to the input field.
    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Deletes the last character of the input field.
    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Empties the input field.
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Switches the direction used by Enter.
    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }

    /// Starts an operation. Ignored while another one is pending.
    ///
    /// The input is captured now, so edits made during the delay do not
    /// change what gets transcoded. The previous result is cleared right
    /// away; the operation itself runs from [`AppState::tick`] once the
    /// delay has elapsed.
    pub fn request(&mut self, direction: Direction, now: Instant) {
        if self.is_busy() {
            return;
        }
        debug!("Requested {} of {} chars", direction, self.input.chars().count());
        self.outcome = None;
        self.toast = None;
        self.pending = Some(Pending {
            direction,
            input: self.input.clone(),
            started: now,
        });
        self.tick(now);
    }

    /// Advances time: runs a due operation and expires an old notification.
    pub fn tick(&mut self, now: Instant) {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now.saturating_duration_since(pending.started) >= self.delay);
        if due {
            if let Some(pending) = self.pending.take() {
                self.run(pending.direction, &pending.input, now);
            }
        }

        let expired = self
            .toast
            .as_ref()
            .is_some_and(|toast| now.saturating_duration_since(toast.shown_at) >= TOAST_DURATION);
        if expired {
            self.toast = None;
        }
    }

    fn run(&mut self, direction: Direction, input: &str, now: Instant) {
        match self.transcoder.apply(direction, input) {
            Ok(output) => {
                info!("{} produced {} chars", direction, output.len());
                self.outcome = Some(Outcome { direction, output });
            }
            Err(e) => {
                info!("{} failed: {}", direction, e);
                self.toast = Some(Toast {
                    message: e.to_string(),
                    shown_at: now,
                });
            }
        }
    }

    /// Dismisses the error notification.
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Shows or hides the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Hides the help overlay.
    pub fn dismiss_help(&mut self) {
        self.show_help = false;
    }
}
