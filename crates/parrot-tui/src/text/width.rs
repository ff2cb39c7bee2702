//! Text width utilities.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get the visual width of a string in terminal cells.
///
/// Accounts for wide characters (CJK, emoji) that take 2 cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pick the slice of `chars` that fits in `max_width` cells and keeps
/// `cursor` visible, preferring to show the text just before the cursor.
///
/// Returns the half-open char range `(start, end)`. One cell is reserved
/// for the cursor itself.
pub fn window_around(chars: &[char], cursor: usize, max_width: usize) -> (usize, usize) {
    let budget = max_width.saturating_sub(1);
    let cursor = cursor.min(chars.len());

    let mut start = cursor;
    let mut used = 0;
    while start > 0 {
        let w = chars[start - 1].width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start -= 1;
    }

    let mut end = cursor;
    while end < chars.len() {
        let w = chars[end].width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        end += 1;
    }

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_width_ascii() {
        assert_eq!(visual_width("hello"), 5);
        assert_eq!(visual_width(""), 0);
    }

    #[test]
    fn test_visual_width_wide_chars() {
        assert_eq!(visual_width("你好"), 4);
        assert_eq!(visual_width("hello你好"), 9);
    }

    #[test]
    fn test_window_fits_entirely() {
        let chars: Vec<char> = "hello".chars().collect();
        assert_eq!(window_around(&chars, 5, 20), (0, 5));
    }

    #[test]
    fn test_window_follows_cursor_at_end() {
        let chars: Vec<char> = "abcdefghij".chars().collect();
        assert_eq!(window_around(&chars, 10, 5), (6, 10));
    }

    #[test]
    fn test_window_cursor_at_start() {
        let chars: Vec<char> = "abcdefghij".chars().collect();
        assert_eq!(window_around(&chars, 0, 5), (0, 4));
    }

    #[test]
    fn test_window_wide_chars() {
        let chars: Vec<char> = "你好世界".chars().collect();
        assert_eq!(window_around(&chars, 4, 5), (2, 4));
    }
}
