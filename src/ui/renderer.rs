//! Renderer
//!
//! Lays the panes out, records each pane's visible size back into its view,
//! and draws them in render-stack order.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    Frame,
};

use super::components::{HelpBar, PaneWidget, StatusLine};
use super::views::{ViewSet, CMDLINE, ERROR, MAIN};
use crate::input::Mode;

pub struct UiState<'a> {
    pub mode: Mode,
    pub views: &'a mut ViewSet,
}

/// Screen areas of the panes and bars
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub main: Rect,
    pub cmdline: Rect,
    pub error: Rect,
    pub status: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn new(size: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        Self {
            main: chunks[0],
            cmdline: chunks[1],
            error: chunks[2],
            status: chunks[3],
            help: chunks[4],
        }
    }

    /// Outer area and whether the pane is bordered
    fn pane(&self, name: &str) -> Option<(Rect, bool)> {
        match name {
            MAIN => Some((self.main, true)),
            CMDLINE => Some((self.cmdline, true)),
            ERROR => Some((self.error, false)),
            _ => None,
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &mut UiState) {
        let layout = ScreenLayout::new(frame.area());
        Self::resize_views(&layout, state.views);

        let focused = state.views.current_name().map(str::to_string);
        for view in state.views.iter() {
            let Some((area, bordered)) = layout.pane(view.name()) else {
                continue;
            };
            let is_focused = focused.as_deref() == Some(view.name());

            let mut pane = PaneWidget::new(view).focused(is_focused);
            pane = match view.name() {
                MAIN if view.title.is_empty() => pane.title("[No Name]"),
                CMDLINE => pane.title("Command"),
                ERROR => pane.borderless().style(Style::default().fg(Color::Red)),
                _ => pane,
            };
            frame.render_widget(pane, area);

            if is_focused {
                let inner = PaneWidget::inner(area, bordered);
                if let Some(pos) = cursor_position(inner, view.cursor(), view.origin()) {
                    frame.set_cursor_position(pos);
                }
            }
        }

        render_status_line(frame, layout.status, state);
        frame.render_widget(HelpBar::for_mode(state.mode), layout.help);
    }

    /// Store each pane's text area size in its view
    pub fn resize_views(layout: &ScreenLayout, views: &mut ViewSet) {
        for name in [MAIN, CMDLINE, ERROR] {
            let Some((area, bordered)) = layout.pane(name) else { continue };
            let inner = PaneWidget::inner(area, bordered);
            if let Ok(view) = views.get_mut(name) {
                view.set_size(inner.width as usize, inner.height as usize);
            }
        }
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.mode);
    if let Ok(main) = state.views.get(MAIN) {
        let (x, y) = main.cursor();
        status = status.file_name(&main.title).cursor(x, y).wrap(main.wrap);
    }
    frame.render_widget(status, area);
}

/// Screen position of a buffer cursor, if it is inside the visible area
fn cursor_position(inner: Rect, cursor: (usize, usize), origin: (usize, usize)) -> Option<Position> {
    let (cx, cy) = cursor;
    let (ox, oy) = origin;
    let col = cx.checked_sub(ox)?;
    let row = cy.checked_sub(oy)?;
    if col >= inner.width as usize || row >= inner.height as usize {
        return None;
    }
    Some(Position::new(inner.x + col as u16, inner.y + row as u16))
}
