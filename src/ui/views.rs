//! View Set
//!
//! Owns every pane, the render stack order and the input focus pointer.

use super::view::View;
use super::{ViewError, ViewResult};

/// Primary editing pane
pub const MAIN: &str = "main";
/// Command-entry pane
pub const CMDLINE: &str = "cmdline";
/// Pane errors are reported into
pub const ERROR: &str = "error";

/// Views in render-stack order (last is on top) plus the focused view.
#[derive(Debug, Default)]
pub struct ViewSet {
    views: Vec<View>,
    current: Option<String>,
}

impl ViewSet {
    /// The three panes the editor works with, `main` focused
    pub fn editor() -> Self {
        Self {
            views: [MAIN, CMDLINE, ERROR].into_iter().map(View::new).collect(),
            current: Some(MAIN.to_string()),
        }
    }

    pub fn get(&self, name: &str) -> ViewResult<&View> {
        self.views
            .iter()
            .find(|v| v.name() == name)
            .ok_or_else(|| ViewError::Unknown(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> ViewResult<&mut View> {
        self.views
            .iter_mut()
            .find(|v| v.name() == name)
            .ok_or_else(|| ViewError::Unknown(name.to_string()))
    }

    /// Name of the view holding input focus
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_mut(&mut self) -> Option<&mut View> {
        let name = self.current.clone()?;
        self.get_mut(&name).ok()
    }

    pub fn set_current(&mut self, name: &str) -> ViewResult<()> {
        self.get(name)?;
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Move `name` to the top of the render stack
    pub fn set_on_top(&mut self, name: &str) -> ViewResult<()> {
        let idx = self
            .views
            .iter()
            .position(|v| v.name() == name)
            .ok_or_else(|| ViewError::Unknown(name.to_string()))?;
        let view = self.views.remove(idx);
        self.views.push(view);
        Ok(())
    }

    /// Views bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.iter()
    }

    #[cfg(test)]
    pub fn top_name(&self) -> Option<&str> {
        self.views.last().map(View::name)
    }
}
