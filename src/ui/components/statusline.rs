//! Status Line Component
//!
//! Displays mode indicator, current file and cursor position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::Mode;

/// Status line widget
pub struct StatusLine<'a> {
    mode: Mode,
    file_name: Option<&'a str>,
    cursor: Option<(usize, usize)>,
    wrap: bool,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            file_name: None,
            cursor: None,
            wrap: false,
        }
    }

    pub fn file_name(mut self, name: &'a str) -> Self {
        if !name.is_empty() {
            self.file_name = Some(name);
        }
        self
    }

    pub fn cursor(mut self, x: usize, y: usize) -> Self {
        self.cursor = Some((x, y));
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        // Mode indicator
        let mode_style = match self.mode {
            Mode::File => Style::default().fg(Color::Black).bg(Color::Blue),
            Mode::Edit => Style::default().fg(Color::Black).bg(Color::Green),
            Mode::Cmd => Style::default().fg(Color::Black).bg(Color::Red),
        };

        let mode_text = format!(" {} ", self.mode.indicator());
        buf.set_string(x, area.y, &mode_text, mode_style.add_modifier(Modifier::BOLD));
        x += mode_text.len() as u16;

        buf.set_string(x, area.y, " ", Style::default().bg(Color::DarkGray));
        x += 1;

        let name = self.file_name.unwrap_or("[No Name]");
        buf.set_string(x, area.y, name, Style::default().fg(Color::White).bg(Color::DarkGray));

        let mut right_parts: Vec<String> = Vec::new();
        if self.wrap {
            right_parts.push("wrap".to_string());
        }
        if let Some((cx, cy)) = self.cursor {
            right_parts.push(format!("{}:{}", cy + 1, cx + 1));
        }

        let right_text = right_parts.join(" ");
        let right_x = area.x + area.width.saturating_sub(right_text.len() as u16 + 1);
        buf.set_string(right_x, area.y, &right_text, Style::default().fg(Color::Gray).bg(Color::DarkGray));
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn for_mode(mode: Mode) -> Self {
        let hints = match mode {
            Mode::File => vec![
                ("Tab", "edit"),
                (":", "command"),
                ("C-t", "cmdline"),
                ("C-s", "save"),
                ("C-f", "find"),
                ("C-c", "quit"),
            ],
            Mode::Edit => vec![
                ("Tab", "file mode"),
                ("PgUp/PgDn", "scroll"),
                ("C-c", "quit"),
            ],
            Mode::Cmd => vec![
                ("Esc", "cancel"),
                ("Enter", "execute"),
                ("C-c", "quit"),
            ],
        };
        Self { hints }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
