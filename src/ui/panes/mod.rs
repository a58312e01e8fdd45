//! TUI pane rendering modules
//!
//! - [`menu`]: numbered technique list for the main menu
//! - [`detail`]: scrollable technique page
//! - [`code`]: C++ highlighting for demo code lines
//! - [`prompt`]: option keys and the typed selection
//! - [`status`]: status bar with keybindings

pub mod code;
pub mod detail;
pub mod menu;
pub mod prompt;
pub mod status;

pub use detail::render_detail_pane;
pub use menu::render_menu_pane;
pub use prompt::render_prompt;
pub use status::render_status_bar;
