//! UI Module
//!
//! Named text panes and the ratatui renderer drawing them.

pub mod components;
pub mod renderer;
pub mod view;
pub mod views;

use thiserror::Error;

/// View lookup errors
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Unknown view: {0}")]
    Unknown(String),
}

pub type ViewResult<T> = Result<T, ViewError>;

// Re-exports
pub use renderer::{Renderer, UiState};
pub use view::View;
pub use views::{ViewSet, CMDLINE, ERROR, MAIN};
