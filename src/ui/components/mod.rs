//! UI Components
//!
//! Widgets for the editor panes and the bottom bars.

pub mod pane;
pub mod statusline;

// Re-exports
pub use pane::PaneWidget;
pub use statusline::{HelpBar, StatusLine};
