//! Keyboard event handling.
//!
//! Key bindings:
//! - printable keys: edit the input field
//! - `Backspace`: delete the last character
//! - `Ctrl+U`: clear the input field
//! - `Enter`: run the selected direction
//! - `Ctrl+E`: encode
//! - `Ctrl+D`: decode
//! - `Tab`: switch the direction used by `Enter`
//! - `F1`: toggle help
//! - `Esc`: quit
//! - `Ctrl+C`: quit
//!
//! While a notification is shown, any key other than `Ctrl+C` only
//! dismisses it.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::AppState;
use crate::transcoder::Direction;

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Add character to the input field
    InputChar(char),
    /// Delete last character of the input field
    InputBackspace,
    /// Clear the input field
    ClearInput,
    /// Run the selected direction
    Submit,
    /// Run a specific direction
    Run(Direction),
    /// Switch the direction used by Submit
    ToggleDirection,
    /// Show or hide help
    ToggleHelp,
    /// Dismiss the help overlay
    DismissHelp,
    /// Dismiss the error notification
    DismissToast,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on what is on screen.
pub fn handle_event(event: Event, show_help: bool, has_toast: bool) -> Action {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key_event(key_event, show_help, has_toast)
        }
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event.
fn handle_key_event(key: KeyEvent, show_help: bool, has_toast: bool) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    if has_toast {
        return Action::DismissToast;
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('e') => Action::Run(Direction::Encode),
            KeyCode::Char('d') => Action::Run(Direction::Decode),
            KeyCode::Char('u') => Action::ClearInput,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Submit,
        KeyCode::Tab => Action::ToggleDirection,
        KeyCode::F(1) => Action::ToggleHelp,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should quit.
pub fn apply_action(state: &mut AppState, action: Action, now: Instant) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::InputChar(c) => {
            state.input_char(c);
        }
        Action::InputBackspace => {
            state.input_backspace();
        }
        Action::ClearInput => {
            state.clear_input();
        }
        Action::Submit => {
            state.request(state.direction, now);
        }
        Action::Run(direction) => {
            state.request(direction, now);
        }
        Action::ToggleDirection => {
            state.toggle_direction();
        }
        Action::ToggleHelp => {
            state.toggle_help();
        }
        Action::DismissHelp => {
            state.dismiss_help();
        }
        Action::DismissToast => {
            state.dismiss_toast();
        }
        Action::Resize(_, _) => {
            // Layout is recomputed on every draw
        }
    }

    !state.should_quit
}
