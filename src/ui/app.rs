//! Main TUI application state and logic

use crate::demo::{DemoRunner, ProcessRunner, SystemRunner};
use crate::explorer::{Explorer, Screen, Selection, Transition};
use crate::ui::{panes, tty};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use tracing::{info, warn};

/// Longest selection the prompt accepts
const MAX_INPUT_LEN: usize = 8;

/// Lines moved by PageUp/PageDown
const PAGE_STEP: usize = 10;

/// The main application state
pub struct App<R: ProcessRunner = SystemRunner> {
    /// Menu/detail state machine over the loaded catalog
    pub explorer: Explorer,

    pub demo_runner: DemoRunner<R>,

    /// Selection typed so far, committed with Enter
    pub input: String,

    /// Highlighted technique in the main menu
    pub menu_cursor: usize,

    /// Per-screen scroll offsets
    pub menu_scroll: usize,
    pub detail_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a problem
    pub status_is_error: bool,

    /// Demo requested by the last key, run by the event loop
    pub pending_demo: Option<usize>,
}

impl<R: ProcessRunner> App<R> {
    pub fn new(explorer: Explorer, demo_runner: DemoRunner<R>) -> Self {
        let status_message = format!("{} techniques loaded", explorer.catalog().len());
        App {
            explorer,
            demo_runner,
            input: String::new(),
            menu_cursor: 0,
            menu_scroll: 0,
            detail_scroll: 0,
            should_quit: false,
            status_message,
            status_is_error: false,
            pending_demo: None,
        }
    }

    /// Run the TUI application until the user leaves the main menu
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }

            if let Some(index) = self.pending_demo.take() {
                self.run_demo(index)?;
                terminal.clear()?;
            }
        }

        Ok(())
    }

    /// Leave the TUI, compile and run the demo on the real console, come back.
    fn run_demo(&mut self, index: usize) -> io::Result<()> {
        let Some(tech) = self.explorer.catalog().get(index) else {
            return Ok(());
        };

        tty::suspend()?;
        let result = {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut stdout = io::stdout();
            self.demo_runner.run(tech, &mut input, &mut stdout)
        };
        tty::resume()?;

        match result {
            Ok(outcome) => {
                info!(?outcome, "demo finished");
                self.set_status(format!("Demo finished ({})", self.demo_runner.compiler()));
            }
            Err(e) => {
                warn!(error = %e, "demo run failed");
                self.set_error(format!("Demo failed: {}", e));
            }
        }
        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let total = self.explorer.catalog().len();
        match self.explorer.screen() {
            Screen::MainMenu => {
                panes::render_menu_pane(
                    frame,
                    chunks[0],
                    self.explorer.catalog().techniques(),
                    self.menu_cursor,
                    &mut self.menu_scroll,
                );
                panes::render_prompt(frame, chunks[1], &[("1-N", "open"), ("0", "exit")], &self.input);
                panes::render_status_bar(
                    frame,
                    chunks[2],
                    &self.status_message,
                    ((self.menu_cursor + 1).min(total), total),
                    self.status_is_error,
                    false,
                );
            }
            Screen::Detail(index) => {
                if let Some(tech) = self.explorer.catalog().get(index) {
                    panes::render_detail_pane(frame, chunks[0], tech, &mut self.detail_scroll);
                }
                panes::render_prompt(
                    frame,
                    chunks[1],
                    &[("1", "Run code demo"), ("0", "Back to menu")],
                    &self.input,
                );
                panes::render_status_bar(
                    frame,
                    chunks[2],
                    &self.status_message,
                    (index + 1, total),
                    self.status_is_error,
                    true,
                );
            }
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let in_detail = matches!(self.explorer.screen(), Screen::Detail(_));

        match key.code {
            KeyCode::Char('q') if self.input.is_empty() && !in_detail => {
                self.apply(&Selection::Number(0));
            }
            KeyCode::Esc => {
                // Esc discards a half-typed selection before it acts as 0
                if self.input.is_empty() {
                    self.apply(&Selection::Number(0));
                } else {
                    self.input.clear();
                }
            }
            KeyCode::Char(c) => {
                if self.input.chars().count() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                if self.input.is_empty() {
                    // Enter alone opens the highlighted technique
                    if !in_detail {
                        let n = self.menu_cursor as i64 + 1;
                        self.apply(&Selection::Number(n));
                    }
                } else {
                    let selection = Selection::parse(&self.input);
                    self.input.clear();
                    self.apply(&selection);
                }
            }
            KeyCode::Up => self.move_by(-1),
            KeyCode::Down => self.move_by(1),
            KeyCode::PageUp => self.move_by(-(PAGE_STEP as isize)),
            KeyCode::PageDown => self.move_by(PAGE_STEP as isize),
            KeyCode::Home => self.move_by(isize::MIN),
            KeyCode::End => self.move_by(isize::MAX),
            _ => {}
        }
    }

    /// Feed one selection to the explorer and react to the transition
    fn apply(&mut self, selection: &Selection) {
        match self.explorer.select(selection) {
            Transition::Stay => match selection {
                Selection::Invalid(raw) => {
                    self.set_error(format!("Please enter a number (got '{}')", raw.trim()))
                }
                Selection::Number(n) => self.set_error(format!("Invalid choice: {}", n)),
            },
            Transition::Open(index) => {
                self.menu_cursor = index;
                self.detail_scroll = 0;
                let name = self
                    .explorer
                    .current()
                    .map(|t| t.name.clone())
                    .unwrap_or_default();
                self.set_status(name);
            }
            Transition::Back => self.set_status("Back to menu"),
            Transition::RunDemo(index) => {
                self.pending_demo = Some(index);
                self.set_status("Running demo...");
            }
            Transition::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Arrow/page keys: move the menu cursor or scroll the detail page
    fn move_by(&mut self, delta: isize) {
        match self.explorer.screen() {
            Screen::MainMenu => {
                let last = self.explorer.catalog().len().saturating_sub(1);
                self.menu_cursor = offset(self.menu_cursor, delta).min(last);
            }
            Screen::Detail(_) => {
                // Upper bound is clamped by the detail pane at render time
                self.detail_scroll = offset(self.detail_scroll, delta);
            }
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }
}

fn offset(value: usize, delta: isize) -> usize {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta as usize)
    }
}
