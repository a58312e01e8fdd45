//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four parts:
//!
//! - **[`app`]** — application state, keyboard event loop, typed selections
//! - **[`panes`]** — stateless render functions (menu, detail, prompt, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//! - **[`tty`]** — terminal setup/teardown and suspension around demo runs
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`Explorer`] and a [`DemoRunner`] and call [`App::run`].
//!
//! [`Explorer`]: crate::explorer::Explorer
//! [`DemoRunner`]: crate::demo::DemoRunner
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;
pub mod tty;

pub use app::App;
