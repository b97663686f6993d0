use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use crate::command::Outcome;
use crate::ui::{CMDLINE, MAIN};

use super::App;

impl App {
    /// Route a key press. Returns true when the session must end.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let mode = self.session.mode();
        let handler = self.keymap.resolve(mode, self.session.focused(), &key).cloned();

        match handler {
            Some(handler) => match self.session.run_handler(&handler) {
                Ok(Outcome::Quit) => self.should_quit = true,
                Ok(Outcome::Continue) => {}
                Err(err) => {
                    warn!(?handler, error = %err, "key handler failed");
                    self.session.report_error(&format!("{:#}", err));
                }
            },
            None => self.handle_text_input(key),
        }

        self.should_quit
    }

    fn focused_is_editable(&self) -> bool {
        match self.session.focused() {
            Some(CMDLINE) => true,
            Some(MAIN) => self.session.mode().edits_main(),
            _ => false,
        }
    }

    /// Unbound keys: cursor keys move in any view, the rest edit text in
    /// editable views
    fn handle_text_input(&mut self, key: KeyEvent) {
        let editable = self.focused_is_editable();
        let multiline = self.session.focused() == Some(MAIN);
        let Some(view) = self.session.views.current_mut() else {
            return;
        };

        match (key.code, key.modifiers) {
            (KeyCode::Left, _) => view.move_cursor(-1, 0),
            (KeyCode::Right, _) => view.move_cursor(1, 0),
            (KeyCode::Up, _) => view.move_cursor(0, -1),
            (KeyCode::Down, _) => view.move_cursor(0, 1),
            _ if !editable => {}
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => view.edit_write(c),
            (KeyCode::Enter, _) if multiline => view.edit_newline(),
            (KeyCode::Backspace, _) => view.edit_backspace(),
            (KeyCode::Delete, _) => view.edit_delete(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppConfig;
    use crate::input::Mode;

    fn app() -> App {
        App::new(AppConfig {
            initial_file: None,
            log_dir: std::env::temp_dir(),
        })
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    fn main_text(app: &App) -> String {
        app.session.views.get(MAIN).unwrap().buffer()
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        for mode in Mode::ALL {
            let mut app = app();
            app.session.switch_mode(mode).unwrap();
            assert!(app.handle_key_event(key_ctrl('c')));
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_file_mode_does_not_type_into_main() {
        let mut app = app();
        type_str(&mut app, "abc");
        assert_eq!(main_text(&app), "");
    }

    #[test]
    fn test_tab_enters_edit_mode_and_types() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.session.mode(), Mode::Edit);

        type_str(&mut app, "hi");
        app.handle_key_event(key(KeyCode::Enter));
        type_str(&mut app, "there");
        assert_eq!(main_text(&app), "hi\nthere");

        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.session.mode(), Mode::File);
    }

    #[test]
    fn test_ctrl_t_toggles_command_line_focus() {
        let mut app = app();
        app.handle_key_event(key_ctrl('t'));
        assert_eq!(app.session.focused(), Some(CMDLINE));
        assert_eq!(app.session.views.top_name(), Some(CMDLINE));

        app.handle_key_event(key_ctrl('t'));
        assert_eq!(app.session.focused(), Some(MAIN));
        assert_eq!(app.session.mode(), Mode::File);
    }

    #[test]
    fn test_command_line_round_trip() {
        let mut app = app();
        app.handle_key_event(key_ctrl('t'));
        type_str(&mut app, "setwrap true");
        assert_eq!(app.session.command_line(), "setwrap true");

        assert!(!app.handle_key_event(key(KeyCode::Enter)));
        assert!(app.session.views.get(MAIN).unwrap().wrap);
        assert_eq!(app.session.command_line(), "");
    }

    #[test]
    fn test_colon_opens_command_mode_and_esc_cancels() {
        let mut app = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char(':'), KeyModifiers::SHIFT));
        assert_eq!(app.session.mode(), Mode::Cmd);
        assert_eq!(app.session.focused(), Some(CMDLINE));

        type_str(&mut app, "q!");
        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.session.mode(), Mode::File);
        assert_eq!(app.session.focused(), Some(MAIN));
        assert_eq!(app.session.command_line(), "");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_command_from_command_mode() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Char(':')));
        type_str(&mut app, "q!");
        assert!(app.handle_key_event(key(KeyCode::Enter)));
    }

    #[test]
    fn test_backspace_in_command_line() {
        let mut app = app();
        app.handle_key_event(key_ctrl('t'));
        type_str(&mut app, "qx");
        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.session.command_line(), "q");
    }

    #[test]
    fn test_arrows_move_in_file_mode() {
        let mut app = app();
        app.session.views.get_mut(MAIN).unwrap().set_content("abc\ndef");
        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Right));
        assert_eq!(app.session.views.get(MAIN).unwrap().cursor(), (1, 1));
    }

    #[test]
    fn test_handler_error_is_reported() {
        let mut app = app();
        app.session.current_file = Some(std::env::temp_dir().join("stretto-missing-dir").join("x.txt"));
        app.handle_key_event(key_ctrl('s'));
        assert!(app.session.error_text().contains("Failed to save"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app();
        let mut release = key_ctrl('c');
        release.kind = KeyEventKind::Release;
        assert!(!app.handle_key_event(release));
    }
}
