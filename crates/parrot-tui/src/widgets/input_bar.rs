//! Input bar with a send button.
//!
//! Single-line text entry at the bottom of the page. The send button is
//! drawn disabled while the input is blank.

use parrot_engine::InputBuffer;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::text::window_around;
use crate::theme::Theme;

/// Rows taken by the input bar.
pub const INPUT_HEIGHT: u16 = 3;

/// Columns taken by the send button.
const BUTTON_WIDTH: u16 = 10;

/// Input bar widget.
pub struct InputBar<'a> {
    input: &'a InputBuffer,
    placeholder: &'a str,
    theme: &'a Theme,
    can_send: bool,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(input: &'a InputBuffer, theme: &'a Theme) -> Self {
        Self {
            input,
            placeholder: "",
            theme,
            can_send: !input.is_blank(),
        }
    }

    /// Text shown while the input is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Override whether the send button is drawn enabled.
    #[must_use]
    pub fn can_send(mut self, can_send: bool) -> Self {
        self.can_send = can_send;
        self
    }

    /// Split the bar into the text box and the send button.
    pub fn split(area: Rect) -> (Rect, Rect) {
        let [text, button] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(BUTTON_WIDTH)])
                .spacing(1)
                .areas(area);
        (text, button)
    }

    /// Area of the send button when the bar is drawn in `area`.
    pub fn button_area(area: Rect) -> Rect {
        Self::split(area).1
    }

    /// Build the visible line, scrolled horizontally to keep the cursor shown.
    fn build_line(&self, width: usize) -> Line<'static> {
        let cursor_style = Style::default().fg(self.theme.border_focused);

        if self.input.is_empty() {
            return Line::from(vec![
                Span::styled("█", cursor_style),
                Span::styled(
                    self.placeholder.to_string(),
                    Style::default().fg(self.theme.muted),
                ),
            ]);
        }

        let chars: Vec<char> = self.input.content().chars().collect();
        let cursor = self.input.cursor();
        let (start, end) = window_around(&chars, cursor, width);

        let before: String = chars[start..cursor].iter().collect();
        let after: String = chars[cursor..end].iter().collect();
        let text_style = Style::default().fg(self.theme.text);
        Line::from(vec![
            Span::styled(before, text_style),
            Span::styled("█", cursor_style),
            Span::styled(after, text_style),
        ])
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text_area, button_area) = Self::split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.base));
        let inner = block.inner(text_area);
        block.render(text_area, buf);
        Paragraph::new(self.build_line(usize::from(inner.width))).render(inner, buf);

        let fill = if self.can_send {
            self.theme.button
        } else {
            self.theme.button_disabled
        };
        let mut label_style = Style::default().fg(self.theme.button_text).bg(fill);
        if self.can_send {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        Paragraph::new(vec![Line::from(""), Line::from("➤ Send")])
            .alignment(Alignment::Center)
            .style(label_style)
            .render(button_area, buf);
    }
}
