//! Keymap
//!
//! Keybinding registry keyed by (mode, view, key, modifiers) and the default
//! editor bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::modes::Mode;
use crate::ui::views::{CMDLINE, MAIN};

/// Handlers a key can be bound to. Each variant carries its own
/// configuration so a binding reads the same in the table as it behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// End the session
    Quit,
    /// Focus a view and raise it to the top
    FocusView { view: &'static str },
    /// Make `target` the current mode
    SwitchMode { target: Mode },
    CursorHome,
    CursorEnd,
    PageUp,
    PageDown,
    /// Write the main view to the current file
    SaveMain,
    /// Forward search for the command line's text
    Search,
    /// Run the command line, then optionally switch mode
    SubmitCommand { then: Option<Mode> },
}

/// Which views a binding applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewScope {
    /// Any view while the mode is active
    Any,
    Named(&'static str),
}

impl ViewScope {
    fn matches(&self, view: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Named(name) => view == Some(*name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub mode: Mode,
    pub scope: ViewScope,
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub handler: Handler,
}

impl Binding {
    fn matches_key(&self, key: &KeyEvent) -> bool {
        self.code == key.code && self.modifiers == normalized_modifiers(key)
    }
}

/// Shift is implied by the character itself for printable keys
fn normalized_modifiers(key: &KeyEvent) -> KeyModifiers {
    match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    }
}

/// Keybinding registry
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Binding>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        mode: Mode,
        scope: ViewScope,
        code: KeyCode,
        modifiers: KeyModifiers,
        handler: Handler,
    ) {
        self.bindings.push(Binding { mode, scope, code, modifiers, handler });
    }

    /// Handler for `key` in `mode` with `view` focused. A binding naming the
    /// focused view wins over a wildcard one.
    pub fn resolve(&self, mode: Mode, view: Option<&str>, key: &KeyEvent) -> Option<&Handler> {
        let candidates: Vec<&Binding> = self
            .bindings
            .iter()
            .filter(|b| b.mode == mode && b.matches_key(key) && b.scope.matches(view))
            .collect();

        candidates
            .iter()
            .find(|b| matches!(b.scope, ViewScope::Named(_)))
            .or_else(|| candidates.first())
            .copied()
            .map(|b| &b.handler)
    }

    /// Default editor bindings
    pub fn editor() -> Self {
        use Handler::*;
        use KeyCode as K;
        use ViewScope::{Any, Named};

        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let mut km = Self::new();

        for mode in Mode::ALL {
            km.register(mode, Any, K::Char('c'), ctrl, Quit);
        }

        km.register(Mode::File, Any, K::Char('t'), ctrl, FocusView { view: CMDLINE });
        km.register(Mode::File, Named(CMDLINE), K::Char('t'), ctrl, FocusView { view: MAIN });

        for mode in [Mode::File, Mode::Edit] {
            km.register(mode, Any, K::Home, none, CursorHome);
            km.register(mode, Any, K::End, none, CursorEnd);
            km.register(mode, Any, K::PageUp, none, PageUp);
            km.register(mode, Any, K::PageDown, none, PageDown);
        }

        km.register(Mode::File, Named(MAIN), K::Char('s'), ctrl, SaveMain);
        km.register(Mode::File, Named(MAIN), K::Tab, none, SwitchMode { target: Mode::Edit });
        km.register(Mode::File, Named(MAIN), K::Char('f'), ctrl, Search);
        km.register(Mode::File, Named(MAIN), K::Char(':'), none, SwitchMode { target: Mode::Cmd });
        km.register(Mode::File, Named(CMDLINE), K::Enter, none, SubmitCommand { then: None });

        km.register(Mode::Edit, Named(MAIN), K::Tab, none, SwitchMode { target: Mode::File });

        km.register(Mode::Cmd, Named(CMDLINE), K::Enter, none, SubmitCommand { then: Some(Mode::File) });
        km.register(Mode::Cmd, Named(CMDLINE), K::Esc, none, SwitchMode { target: Mode::File });

        km
    }
}
