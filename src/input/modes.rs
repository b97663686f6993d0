//! Input Modes
//!
//! The flat current-mode flag and the set of modes declared at startup.

use std::fmt;

use super::{InputError, InputResult};

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// File management and navigation
    File,
    /// Text entry into the main view
    Edit,
    /// Command line entry
    Cmd,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::File, Mode::Edit, Mode::Cmd];

    /// Name the mode is registered under
    pub fn name(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Edit => "edit",
            Self::Cmd => "cmd",
        }
    }

    /// Get mode indicator for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::File => "FILE",
            Self::Edit => "EDIT",
            Self::Cmd => "COMMAND",
        }
    }

    /// Whether typed characters reach the main view
    pub fn edits_main(&self) -> bool {
        matches!(self, Self::Edit)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current mode plus the modes a switch may target
#[derive(Debug, Clone)]
pub struct ModeState {
    current: Mode,
    declared: Vec<Mode>,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            current: Mode::File,
            declared: Vec::new(),
        }
    }
}

impl ModeState {
    /// Create new mode state with no declared modes
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode state with every mode declared, starting in `file`
    pub fn declared_all() -> Self {
        let mut state = Self::new();
        for mode in Mode::ALL {
            state.declare(mode);
        }
        state
    }

    pub fn declare(&mut self, mode: Mode) {
        if !self.declared.contains(&mode) {
            self.declared.push(mode);
        }
    }

    pub fn is_declared(&self, mode: Mode) -> bool {
        self.declared.contains(&mode)
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    /// Make `mode` current; refused if it was never declared
    pub fn set_current(&mut self, mode: Mode) -> InputResult<()> {
        if !self.is_declared(mode) {
            return Err(InputError::UndeclaredMode(mode));
        }
        self.current = mode;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_file_mode() {
        let state = ModeState::declared_all();
        assert_eq!(state.current(), Mode::File);
    }

    #[test]
    fn test_mode_transitions() {
        let mut state = ModeState::declared_all();

        state.set_current(Mode::Edit).unwrap();
        assert_eq!(state.current(), Mode::Edit);

        state.set_current(Mode::Cmd).unwrap();
        assert_eq!(state.current(), Mode::Cmd);

        state.set_current(Mode::File).unwrap();
        assert_eq!(state.current(), Mode::File);
    }

    #[test]
    fn test_undeclared_mode_is_refused() {
        let mut state = ModeState::new();
        state.declare(Mode::File);

        let err = state.set_current(Mode::Edit).unwrap_err();
        assert!(matches!(err, InputError::UndeclaredMode(Mode::Edit)));
        assert_eq!(state.current(), Mode::File);
    }

    #[test]
    fn test_edits_main() {
        assert!(!Mode::File.edits_main());
        assert!(Mode::Edit.edits_main());
        assert!(!Mode::Cmd.edits_main());
    }
}
