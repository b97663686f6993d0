//! Navigation
//!
//! Cursor movement handlers shared by the file and edit modes.

use crate::ui::view::{byte_index, View};

/// Move the cursor to the start of its line
pub fn cursor_home(view: &mut View) {
    let (_, y) = view.cursor();
    view.set_cursor(0, y);
}

/// Move the cursor past the last character of its line
pub fn cursor_end(view: &mut View) {
    let (_, y) = view.cursor();
    view.set_cursor(view.line_len(y), y);
}

/// Scroll up one screen. The origin never goes above the first line; when it
/// is already there the cursor jumps to the start of the buffer instead.
pub fn page_up(view: &mut View) {
    let (ox, oy) = view.origin();
    let (_, height) = view.size();
    let (x, y) = view.cursor();

    if oy < height {
        view.set_origin(ox, 0);
        if oy == 0 {
            view.set_cursor(0, 0);
        } else {
            view.set_cursor(x, y.saturating_sub(oy));
        }
    } else {
        view.set_origin(ox, oy - height);
        view.set_cursor(x, y.saturating_sub(height));
    }
}

/// Scroll down one screen, keeping the cursor on the same screen row
pub fn page_down(view: &mut View) {
    let (ox, oy) = view.origin();
    let (_, height) = view.size();
    let (x, y) = view.cursor();

    let last = view.line_count().saturating_sub(1);
    let new_oy = (oy + height).min(last).max(oy);
    view.set_origin(ox, new_oy);
    view.set_cursor(x, y + (new_oy - oy));
}

/// Forward search for `needle`: first match strictly after the cursor on the
/// cursor's line, else the first match on any later line. Stops at the end
/// of the buffer without wrapping. Returns whether the cursor moved.
pub fn search(view: &mut View, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let (x, y) = view.cursor();
    let hit = view
        .lines()
        .iter()
        .enumerate()
        .skip(y)
        .find_map(|(row, line)| {
            let skip = if row == y { x + 1 } else { 0 };
            let start = byte_index(line, skip);
            line[start..]
                .find(needle)
                .map(|b| (skip + line[start..start + b].chars().count(), row))
        });

    match hit {
        Some((col, row)) => {
            view.set_cursor(col, row);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with(content: &str, height: usize) -> View {
        let mut view = View::new("main");
        view.set_size(80, height);
        view.set_content(content);
        view
    }

    fn numbered_lines(n: usize) -> String {
        (0..n).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_cursor_home_and_end() {
        let mut view = view_with("hello world\nab", 10);
        view.set_cursor(4, 0);

        cursor_end(&mut view);
        assert_eq!(view.cursor(), (11, 0));

        cursor_home(&mut view);
        assert_eq!(view.cursor(), (0, 0));
    }

    #[test]
    fn test_page_down_moves_origin_and_cursor() {
        let mut view = view_with(&numbered_lines(30), 10);
        view.set_cursor(2, 3);

        page_down(&mut view);
        assert_eq!(view.origin(), (0, 10));
        assert_eq!(view.cursor(), (2, 13));
    }

    #[test]
    fn test_page_down_clamps_at_last_line() {
        let mut view = view_with(&numbered_lines(5), 10);
        page_down(&mut view);
        assert_eq!(view.origin().1, 4);
        assert_eq!(view.cursor().1, 4);
    }

    #[test]
    fn test_page_up_scrolls_back() {
        let mut view = view_with(&numbered_lines(30), 10);
        view.set_cursor(0, 25);
        view.set_origin(0, 20);

        page_up(&mut view);
        assert_eq!(view.origin(), (0, 10));
        assert_eq!(view.cursor(), (0, 15));
    }

    #[test]
    fn test_page_up_clamps_origin_at_zero() {
        let mut view = view_with(&numbered_lines(30), 10);
        view.set_cursor(3, 8);
        view.set_origin(0, 4);

        page_up(&mut view);
        assert_eq!(view.origin(), (0, 0));
        assert_eq!(view.cursor(), (3, 4));
    }

    #[test]
    fn test_page_up_at_top_moves_cursor_to_start() {
        let mut view = view_with(&numbered_lines(30), 10);
        view.set_cursor(4, 6);

        page_up(&mut view);
        assert_eq!(view.origin(), (0, 0));
        assert_eq!(view.cursor(), (0, 0));
    }

    #[test]
    fn test_search_on_same_line_skips_cursor_position() {
        let mut view = view_with("un deux trois deux", 10);
        view.set_cursor(3, 0);

        assert!(search(&mut view, "deux"));
        assert_eq!(view.cursor(), (14, 0));
    }

    #[test]
    fn test_search_on_later_line() {
        let mut view = view_with("un\ntrois\n  deux", 10);

        assert!(search(&mut view, "deux"));
        assert_eq!(view.cursor(), (2, 2));
    }

    #[test]
    fn test_search_single_char_line() {
        let mut view = view_with("abc\nx", 10);
        assert!(search(&mut view, "x"));
        assert_eq!(view.cursor(), (0, 1));
    }

    #[test]
    fn test_search_without_match_leaves_cursor() {
        let mut view = view_with("un\ndeux", 10);
        view.set_cursor(0, 1);

        assert!(!search(&mut view, "deux"));
        assert_eq!(view.cursor(), (0, 1));
        assert!(!search(&mut view, ""));
    }

    #[test]
    fn test_search_counts_characters() {
        let mut view = view_with("été deux", 10);
        assert!(search(&mut view, "deux"));
        assert_eq!(view.cursor(), (4, 0));
    }
}
