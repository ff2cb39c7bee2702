//! Page header with title and subtitle.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Paragraph, Widget},
};

use crate::theme::Theme;

/// Rows taken by the header.
pub const HEADER_HEIGHT: u16 = 4;

/// Colored header band.
///
/// ```text
/// ┌──────────────────────────────┐
/// │                              │
/// │  Chatbot Assistant           │
/// │  Ask me anything             │
/// │                              │
/// └──────────────────────────────┘
/// ```
pub struct Header<'a> {
    title: &'a str,
    subtitle: &'a str,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, subtitle: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            subtitle,
            theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .padding(Padding::new(2, 2, 1, 0))
            .style(Style::default().bg(self.theme.header_bg));

        let lines = vec![
            Line::styled(
                self.title,
                Style::default()
                    .fg(self.theme.header_text)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.subtitle, Style::default().fg(self.theme.header_subtext)),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_header_renders_title_and_subtitle() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, HEADER_HEIGHT);
        let mut buf = Buffer::empty(area);
        Header::new("Chatbot Assistant", "Ask me anything", &theme).render(area, &mut buf);

        let text = buffer_to_string(&buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "  Chatbot Assistant");
        assert_eq!(lines[2], "  Ask me anything");
        assert_eq!(buf[(0, 0)].bg, theme.header_bg);
    }
}
