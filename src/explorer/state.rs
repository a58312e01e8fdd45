//! Menu state machine
//!
//! Two screens: the main menu (numbered list of techniques plus `0` to exit)
//! and the detail view of one technique (`1` runs the demo, `0` goes back).
//! Input arrives as a [`Selection`] and each one yields a [`Transition`] that
//! tells the caller what to do next. Nothing here touches the terminal or
//! exits the process.

use crate::catalog::{Catalog, Technique};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    /// Detail view of the technique at this 0-based index
    Detail(usize),
}

/// One parsed answer to a numbered prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Number(i64),
    /// Anything that is not an integer; carries the raw text
    Invalid(String),
}

impl Selection {
    /// Parse an integer-like token. Surrounding whitespace and a leading sign
    /// are accepted; anything else is [`Selection::Invalid`].
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(n) => Selection::Number(n),
            Err(_) => Selection::Invalid(input.to_string()),
        }
    }
}

/// What the caller should do after a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Input ignored; redraw the current screen unchanged
    Stay,
    /// Entered the detail view for this index
    Open(usize),
    /// Returned from a detail view to the main menu
    Back,
    /// Run the demo of this technique, then redraw the same detail view
    RunDemo(usize),
    /// Leave the explorer
    Quit,
}

pub struct Explorer {
    catalog: Catalog,
    screen: Screen,
}

impl Explorer {
    pub fn new(catalog: Catalog) -> Self {
        Explorer {
            catalog,
            screen: Screen::MainMenu,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Technique shown by the detail view, if one is open
    pub fn current(&self) -> Option<&Technique> {
        match self.screen {
            Screen::MainMenu => None,
            Screen::Detail(index) => self.catalog.get(index),
        }
    }

    /// Apply one selection to the current screen.
    pub fn select(&mut self, selection: &Selection) -> Transition {
        let Selection::Number(n) = *selection else {
            debug!(?selection, "ignoring non-numeric selection");
            return Transition::Stay;
        };

        let transition = match self.screen {
            Screen::MainMenu => match n {
                0 => Transition::Quit,
                n if n >= 1 && (n as u64) <= self.catalog.len() as u64 => {
                    let index = (n - 1) as usize;
                    self.screen = Screen::Detail(index);
                    Transition::Open(index)
                }
                _ => Transition::Stay,
            },
            Screen::Detail(index) => match n {
                0 => {
                    self.screen = Screen::MainMenu;
                    Transition::Back
                }
                1 => Transition::RunDemo(index),
                _ => Transition::Stay,
            },
        };

        debug!(selection = n, ?transition, "menu selection");
        transition
    }
}
