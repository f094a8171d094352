//! Application controller.
//!
//! This module orchestrates the main application loop:
//! - Terminal initialization and cleanup
//! - Event polling and handling
//! - Timed completion of pending operations
//! - Rendering

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::event::{apply_action, handle_event, poll_event};
use crate::model::AppState;
use crate::ui::glyphs::Glyphs;
use crate::ui::render;

/// The main application controller.
pub struct App {
    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state
    state: AppState,
    /// Glyph set used for rendering
    glyphs: Glyphs,
    /// Event poll timeout, also the spinner refresh rate
    tick_rate: Duration,
}

impl App {
    /// Creates a new application with the given state.
    pub fn new(state: AppState, glyphs: Glyphs) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state,
            glyphs,
            tick_rate: Duration::from_millis(50),
        })
    }

    /// Runs the main application loop.
    pub fn run(&mut self) -> Result<()> {
        info!("Interactive session started (delay {:?})", self.state.delay);

        loop {
            let now = Instant::now();
            self.state.tick(now);

            self.terminal.draw(|frame| {
                render(frame, &self.state, &self.glyphs, now);
            })?;

            if let Some(event) = poll_event(self.tick_rate) {
                let action = handle_event(event, self.state.show_help, self.state.toast.is_some());
                if !apply_action(&mut self.state, action, Instant::now()) {
                    break;
                }
            }
        }

        info!("Interactive session ended");
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Convenience function to run the interactive transcoder.
pub fn run_app(state: AppState, glyphs: Glyphs) -> Result<()> {
    let mut app = App::new(state, glyphs)?;
    app.run()
}
