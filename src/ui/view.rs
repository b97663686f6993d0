//! View
//!
//! A named pane holding a line buffer, a cursor, a scroll origin and the
//! presentation flags the renderer reads (title, wrap).

/// Text pane addressed by name.
///
/// Cursor and origin are `(column, row)` pairs in buffer coordinates, counted
/// in characters. The buffer always holds at least one (possibly empty) line.
#[derive(Debug, Clone)]
pub struct View {
    name: String,
    lines: Vec<String>,
    cursor: (usize, usize),
    origin: (usize, usize),
    size: (usize, usize),
    /// Pane title; the main view keeps the current filename here
    pub title: String,
    /// Soft-wrap long lines when rendering
    pub wrap: bool,
}

impl View {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            lines: vec![String::new()],
            cursor: (0, 0),
            origin: (0, 0),
            size: (0, 0),
            title: String::new(),
            wrap: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whole buffer, lines joined with `\n`
    pub fn buffer(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at buffer row `y`
    pub fn line(&self, y: usize) -> Option<&str> {
        self.lines.get(y).map(String::as_str)
    }

    /// Number of characters on row `y` (0 for rows past the end)
    pub fn line_len(&self, y: usize) -> usize {
        self.line(y).map_or(0, |l| l.chars().count())
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Drop all content and reset cursor and origin
    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor = (0, 0);
        self.origin = (0, 0);
    }

    /// Replace the whole buffer, resetting cursor and origin
    pub fn set_content(&mut self, content: &str) {
        self.lines = content.split('\n').map(str::to_string).collect();
        self.cursor = (0, 0);
        self.origin = (0, 0);
    }

    /// Replace the buffer while keeping the cursor as close as possible
    pub fn replace_lines(&mut self, lines: Vec<String>) {
        self.lines = if lines.is_empty() { vec![String::new()] } else { lines };
        let (x, y) = self.cursor;
        self.set_cursor(x, y);
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Place the cursor, clamped to the buffer, scrolling it into view
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        let y = y.min(self.lines.len() - 1);
        let x = x.min(self.line_len(y));
        self.cursor = (x, y);
        self.scroll_to_cursor();
    }

    /// Move the cursor by a relative offset
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let (x, y) = self.cursor;
        self.set_cursor(x.saturating_add_signed(dx), y.saturating_add_signed(dy));
    }

    pub fn origin(&self) -> (usize, usize) {
        self.origin
    }

    pub fn set_origin(&mut self, x: usize, y: usize) {
        self.origin = (x, y);
    }

    /// Visible `(width, height)`, as laid out by the last frame
    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.size = (width, height);
    }

    /// Type a character at the cursor; `\n` splits the line
    pub fn edit_write(&mut self, c: char) {
        if c == '\n' {
            self.edit_newline();
            return;
        }
        let (x, y) = self.cursor;
        let at = byte_index(&self.lines[y], x);
        self.lines[y].insert(at, c);
        self.set_cursor(x + 1, y);
    }

    /// Split the current line at the cursor
    pub fn edit_newline(&mut self) {
        let (x, y) = self.cursor;
        let at = byte_index(&self.lines[y], x);
        let rest = self.lines[y].split_off(at);
        self.lines.insert(y + 1, rest);
        self.set_cursor(0, y + 1);
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn edit_backspace(&mut self) {
        let (x, y) = self.cursor;
        if x > 0 {
            let at = byte_index(&self.lines[y], x - 1);
            self.lines[y].remove(at);
            self.set_cursor(x - 1, y);
        } else if y > 0 {
            let line = self.lines.remove(y);
            let prev_len = self.line_len(y - 1);
            self.lines[y - 1].push_str(&line);
            self.set_cursor(prev_len, y - 1);
        }
    }

    /// Delete the character under the cursor, joining with the next line at
    /// end of line
    pub fn edit_delete(&mut self) {
        let (x, y) = self.cursor;
        if x < self.line_len(y) {
            let at = byte_index(&self.lines[y], x);
            self.lines[y].remove(at);
        } else if y + 1 < self.lines.len() {
            let next = self.lines.remove(y + 1);
            self.lines[y].push_str(&next);
        }
    }

    fn scroll_to_cursor(&mut self) {
        let (x, y) = self.cursor;
        let (width, height) = self.size;
        let (mut ox, mut oy) = self.origin;

        if height > 0 {
            if y < oy {
                oy = y;
            } else if y >= oy + height {
                oy = y + 1 - height;
            }
        }
        if width > 0 && !self.wrap {
            if x < ox {
                ox = x;
            } else if x >= ox + width {
                ox = x + 1 - width;
            }
        }
        self.origin = (ox, oy);
    }
}

/// Byte offset of character column `col`, or the line length past the end
pub fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}
