//! Pane widget: draws a `View` inside a rounded block.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::view::View;

pub struct PaneWidget<'a> {
    view: &'a View,
    title: Option<&'a str>,
    focused: bool,
    bordered: bool,
    style: Style,
}

impl<'a> PaneWidget<'a> {
    pub fn new(view: &'a View) -> Self {
        Self {
            view,
            title: None,
            focused: false,
            bordered: true,
            style: Style::default(),
        }
    }

    /// Title shown instead of the view's own
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn borderless(mut self) -> Self {
        self.bordered = false;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Area left for text once the border is drawn
    pub fn inner(area: Rect, bordered: bool) -> Rect {
        if bordered {
            Block::default().borders(Borders::ALL).inner(area)
        } else {
            area
        }
    }
}

impl Widget for PaneWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self.view.lines().iter().map(|l| Line::raw(l.as_str())).collect();
        let (ox, oy) = self.view.origin();

        let mut paragraph = Paragraph::new(lines)
            .style(self.style)
            .scroll((oy as u16, ox as u16));

        if self.view.wrap {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }

        if self.bordered {
            let border_color = if self.focused { Color::Magenta } else { Color::DarkGray };
            let title = self.title.unwrap_or(&self.view.title);
            let block = Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color));
            paragraph = paragraph.block(block);
        }

        paragraph.render(area, buf);
    }
}
