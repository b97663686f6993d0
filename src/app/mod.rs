//! Application State
//!
//! Ties the editor session, the keymap and the renderer together.

mod actions;
mod config;
mod input;
mod session;

use ratatui::Frame;
use tracing::warn;

use crate::command::Command;
use crate::input::Keymap;
use crate::ui::{Renderer, UiState};

pub use config::AppConfig;
pub use session::Session;

pub struct App {
    pub config: AppConfig,
    pub session: Session,
    pub keymap: Keymap,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            keymap: Keymap::editor(),
            should_quit: false,
        }
    }

    /// Load the file named on the command line, reporting failures in the
    /// error view
    pub fn open_initial_file(&mut self) {
        let Some(path) = self.config.initial_file.clone() else {
            return;
        };
        if let Err(err) = (Command::Open { path }).execute(&mut self.session) {
            warn!(error = %err, "could not open initial file");
            self.session.report_error(&err);
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let mut state = UiState {
            mode: self.session.mode(),
            views: &mut self.session.views,
        };

        Renderer::render(frame, &mut state);
    }
}
