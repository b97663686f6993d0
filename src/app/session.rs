//! Session
//!
//! Editor state every handler works against: current mode, the views with
//! their focus pointer, and the file being edited.

use std::fmt::Display;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::input::{InputResult, Mode, ModeState};
use crate::ui::{View, ViewResult, ViewSet, CMDLINE, ERROR, MAIN};

#[derive(Debug)]
pub struct Session {
    pub modes: ModeState,
    pub views: ViewSet,
    /// File last opened or saved under a name, if any
    pub current_file: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            modes: ModeState::declared_all(),
            views: ViewSet::editor(),
            current_file: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    /// Name of the focused view
    pub fn focused(&self) -> Option<&str> {
        self.views.current_name()
    }

    /// Switch the current mode.
    ///
    /// Leaving a mode while the command line has focus clears the command
    /// line. Entering `cmd` moves focus to the command line; leaving it
    /// hands focus back to the main view.
    pub fn switch_mode(&mut self, target: Mode) -> InputResult<()> {
        let previous = self.mode();
        self.modes.set_current(target)?;

        if self.focused() == Some(CMDLINE) {
            self.views.get_mut(CMDLINE)?.clear();
        }
        if target == Mode::Cmd {
            self.focus_view(CMDLINE)?;
        } else if previous == Mode::Cmd && self.focused() == Some(CMDLINE) {
            self.focus_view(MAIN)?;
        }

        info!(from = %previous, to = %target, "mode switched");
        Ok(())
    }

    /// Give `name` input focus and raise it to the top of the render stack
    pub fn focus_view(&mut self, name: &str) -> InputResult<()> {
        self.views.set_current(name)?;
        self.views.set_on_top(name)?;
        debug!(view = name, "focus changed");
        Ok(())
    }

    pub fn main(&self) -> ViewResult<&View> {
        self.views.get(MAIN)
    }

    pub fn main_mut(&mut self) -> ViewResult<&mut View> {
        self.views.get_mut(MAIN)
    }

    /// Text currently typed into the command line
    pub fn command_line(&self) -> String {
        self.views.get(CMDLINE).map(View::buffer).unwrap_or_default()
    }

    pub fn clear_command_line(&mut self) {
        if let Ok(view) = self.views.get_mut(CMDLINE) {
            view.clear();
        }
    }

    /// Record `path` as the file being edited and show it as the main title
    pub fn track_file(&mut self, path: PathBuf) -> ViewResult<()> {
        self.main_mut()?.title = path.to_string_lossy().into_owned();
        self.current_file = Some(path);
        Ok(())
    }

    /// Empty the main view and forget the current file
    pub fn close_file(&mut self) -> ViewResult<()> {
        let main = self.main_mut()?;
        main.clear();
        main.title.clear();
        self.current_file = None;
        Ok(())
    }

    /// Replace the error view's content with `err`
    pub fn report_error(&mut self, err: &dyn Display) {
        if let Ok(view) = self.views.get_mut(ERROR) {
            view.set_content(&err.to_string());
        }
    }

    pub fn clear_error(&mut self) {
        if let Ok(view) = self.views.get_mut(ERROR) {
            view.clear();
        }
    }

    #[cfg(test)]
    pub fn error_text(&self) -> String {
        self.views.get(ERROR).map(View::buffer).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.mode(), Mode::File);
        assert_eq!(session.focused(), Some(MAIN));
        assert!(session.current_file.is_none());
    }

    #[test]
    fn test_focus_raises_view() {
        let mut session = Session::new();
        session.focus_view(CMDLINE).unwrap();
        assert_eq!(session.focused(), Some(CMDLINE));
        assert_eq!(session.views.top_name(), Some(CMDLINE));

        session.focus_view(MAIN).unwrap();
        assert_eq!(session.views.top_name(), Some(MAIN));
    }

    #[test]
    fn test_focus_unknown_view_fails() {
        let mut session = Session::new();
        assert!(session.focus_view("sidebar").is_err());
        assert_eq!(session.focused(), Some(MAIN));
    }

    #[test]
    fn test_switch_to_cmd_focuses_command_line() {
        let mut session = Session::new();
        session.switch_mode(Mode::Cmd).unwrap();
        assert_eq!(session.mode(), Mode::Cmd);
        assert_eq!(session.focused(), Some(CMDLINE));
    }

    #[test]
    fn test_leaving_cmd_clears_command_line() {
        let mut session = Session::new();
        session.switch_mode(Mode::Cmd).unwrap();
        for c in "sa x".chars() {
            session.views.get_mut(CMDLINE).unwrap().edit_write(c);
        }

        session.switch_mode(Mode::File).unwrap();
        assert_eq!(session.command_line(), "");
        assert_eq!(session.views.get(CMDLINE).unwrap().cursor(), (0, 0));
        assert_eq!(session.focused(), Some(MAIN));
    }

    #[test]
    fn test_switch_to_undeclared_mode_fails() {
        let mut session = Session::new();
        session.modes = ModeState::new();
        session.modes.declare(Mode::File);

        assert!(session.switch_mode(Mode::Edit).is_err());
        assert_eq!(session.mode(), Mode::File);
    }

    #[test]
    fn test_file_and_edit_keep_focus() {
        let mut session = Session::new();
        session.switch_mode(Mode::Edit).unwrap();
        assert_eq!(session.focused(), Some(MAIN));
        session.switch_mode(Mode::File).unwrap();
        assert_eq!(session.focused(), Some(MAIN));
    }

    #[test]
    fn test_error_reporting() {
        let mut session = Session::new();
        session.report_error(&"Missing filename");
        assert_eq!(session.error_text(), "Missing filename");
        session.clear_error();
        assert_eq!(session.error_text(), "");
    }
}
