use anyhow::Context;
use tracing::{debug, info};

use crate::command::{self, files, Outcome};
use crate::input::{navigation, Handler, Mode};
use crate::ui::View;

use super::Session;

impl Session {
    pub fn run_handler(&mut self, handler: &Handler) -> anyhow::Result<Outcome> {
        match handler {
            Handler::Quit => return Ok(Outcome::Quit),
            Handler::FocusView { view } => self.focus_view(view)?,
            Handler::SwitchMode { target } => self.switch_mode(*target)?,
            Handler::CursorHome => self.with_focused(navigation::cursor_home),
            Handler::CursorEnd => self.with_focused(navigation::cursor_end),
            Handler::PageUp => self.with_focused(navigation::page_up),
            Handler::PageDown => self.with_focused(navigation::page_down),
            Handler::SaveMain => self.save_main()?,
            Handler::Search => self.search_main()?,
            Handler::SubmitCommand { then } => return self.submit_command(*then),
        }

        Ok(Outcome::Continue)
    }

    fn with_focused(&mut self, f: impl FnOnce(&mut View)) {
        if let Some(view) = self.views.current_mut() {
            f(view);
        }
    }

    /// Write the main view over the current file; nothing to do without one
    fn save_main(&mut self) -> anyhow::Result<()> {
        let Some(path) = self.current_file.clone() else {
            debug!("no current file to save");
            return Ok(());
        };

        let contents = self.main()?.buffer();
        files::overwrite_file(&path, &contents)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        info!(path = %path.display(), "buffer saved");
        Ok(())
    }

    /// Search the main view for the text in the command line
    fn search_main(&mut self) -> anyhow::Result<()> {
        let line = self.command_line();
        let needle = line.trim();
        let found = navigation::search(self.main_mut()?, needle);
        debug!(needle, found, "search");
        Ok(())
    }

    /// Run the command line through the interpreter and clear it
    fn submit_command(&mut self, then: Option<Mode>) -> anyhow::Result<Outcome> {
        let line = self.command_line();
        let outcome = command::validate_cmd(self, &line);
        self.clear_command_line();

        if outcome == Outcome::Continue {
            if let Some(mode) = then {
                self.switch_mode(mode)?;
            }
        }
        Ok(outcome)
    }
}
