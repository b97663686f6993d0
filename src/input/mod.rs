//! Input Module
//!
//! Input modes, the keybinding registry and cursor navigation.

pub mod keymap;
pub mod modes;
pub mod navigation;

use thiserror::Error;

use crate::ui::ViewError;

/// Mode and focus errors
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Mode not declared: {0}")]
    UndeclaredMode(Mode),

    #[error(transparent)]
    View(#[from] ViewError),
}

pub type InputResult<T> = Result<T, InputError>;

// Re-exports
pub use keymap::{Handler, Keymap};
pub use modes::{Mode, ModeState};
