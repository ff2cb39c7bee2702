//! Scrollable list of message bubbles.
//!
//! User messages are right-aligned, bot messages left-aligned. The list
//! follows the newest message until the user scrolls up, and resumes
//! following once they scroll back to the end.

use parrot_engine::Message;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, StatefulWidget, Widget},
};

use crate::text::{visual_width, wrap_text};
use crate::theme::Theme;

/// Scroll position of the message list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageListState {
    /// First visible line.
    pub offset: usize,
    /// Pin the view to the newest message.
    pub follow: bool,
    /// Largest valid offset at the last render.
    max_offset: usize,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self {
            offset: 0,
            follow: true,
            max_offset: 0,
        }
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the newest message visible from the next render on.
    pub fn scroll_to_bottom(&mut self) {
        self.follow = true;
        self.offset = self.max_offset;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        let from = if self.follow {
            self.max_offset
        } else {
            self.offset
        };
        self.offset = from.saturating_sub(lines);
        self.follow = self.offset >= self.max_offset;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset);
        if self.offset >= self.max_offset {
            self.follow = true;
        }
    }
}

/// Message list widget.
pub struct MessageList<'a> {
    messages: &'a [Message],
    theme: &'a Theme,
    bubble_width: u16,
}

impl<'a> MessageList<'a> {
    pub fn new(messages: &'a [Message], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            bubble_width: 48,
        }
    }

    /// Maximum bubble width in columns, padding included.
    #[must_use]
    pub fn bubble_width(mut self, width: u16) -> Self {
        self.bubble_width = width;
        self
    }

    /// Lay out every message as bubble lines for a given inner width.
    fn build_lines(&self, width: u16) -> Vec<Line<'static>> {
        let bubble = self.bubble_width.min(width);
        let text_width = usize::from(bubble.saturating_sub(2)).max(1);

        let mut lines = Vec::new();
        for (idx, msg) in self.messages.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::from(""));
            }

            let (style, alignment) = if msg.is_user() {
                (
                    Style::default()
                        .bg(self.theme.user_bubble)
                        .fg(self.theme.user_text),
                    Alignment::Right,
                )
            } else {
                (
                    Style::default()
                        .bg(self.theme.bot_bubble)
                        .fg(self.theme.bot_text),
                    Alignment::Left,
                )
            };

            let wrapped = wrap_text(&msg.text, text_width);
            let inner = wrapped.iter().map(|l| visual_width(l)).max().unwrap_or(0);
            for text in wrapped {
                let pad = inner.saturating_sub(visual_width(&text));
                let content = format!(" {text}{} ", " ".repeat(pad));
                lines.push(Line::from(Span::styled(content, style)).alignment(alignment));
            }
        }
        lines
    }
}

impl StatefulWidget for MessageList<'_> {
    type State = MessageListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .padding(Padding::new(2, 2, 1, 0))
            .style(Style::default().bg(self.theme.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = self.build_lines(inner.width);
        state.max_offset = lines.len().saturating_sub(usize::from(inner.height));
        if state.follow {
            state.offset = state.max_offset;
        } else {
            state.offset = state.offset.min(state.max_offset);
        }

        let scroll = u16::try_from(state.offset).unwrap_or(u16::MAX);
        Paragraph::new(lines)
            .scroll((scroll, 0))
            .render(inner, buf);
    }
}
