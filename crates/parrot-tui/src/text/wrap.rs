//! Text wrapping for message bubbles.

/// Wrap plain text to the specified width.
///
/// Explicit newlines start a new line; empty lines are kept so that a
/// message never renders as nothing.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(
            textwrap::wrap(paragraph, width)
                .into_iter()
                .map(std::borrow::Cow::into_owned),
        );
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_short() {
        assert_eq!(wrap_text("Hello", 10), vec!["Hello"]);
    }

    #[test]
    fn test_wrap_text_long() {
        let lines = wrap_text("Hello world this is a long line", 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 10);
        }
    }

    #[test]
    fn test_wrap_text_keeps_newlines() {
        assert_eq!(wrap_text("one\n\ntwo", 20), vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("abc", 0), vec!["abc"]);
    }

    #[test]
    fn test_wrap_text_unicode() {
        let text = "Hello 🎉 world 你好 this is a test with émojis and ünïcödé";
        let lines = wrap_text(text, 15);
        assert!(lines.len() > 1);
        let rejoined: String = lines.join(" ");
        assert!(rejoined.contains("🎉"));
        assert!(rejoined.contains("你好"));
        assert!(rejoined.contains("émojis"));
    }
}
