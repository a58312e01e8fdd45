//! Terminal-independent explorer logic.
//!
//! - [`state`] — the menu/detail state machine driven by numeric selections
//! - [`detail`] — the ordered layout of a technique's detail view
//!
//! The [`ui`](crate::ui) module draws these with ratatui and feeds key input
//! back in as [`Selection`]s.

pub mod detail;
pub mod state;

pub use detail::{detail_lines, DetailLine};
pub use state::{Explorer, Screen, Selection, Transition};
