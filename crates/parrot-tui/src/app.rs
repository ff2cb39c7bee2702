//! Application state and update logic for the parrot TUI.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use parrot_engine::{
    Config, Effect, Event as ViewEvent, InputEdit, Key, KeyPress, Message, PendingReply, Session,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, StatefulWidget, Widget},
};

use crate::event::Action;
use crate::theme::Theme;
use crate::widgets::{
    Header, InputBar, MessageList, MessageListState, HEADER_HEIGHT, INPUT_HEIGHT,
};

/// Lines moved per PageUp/PageDown.
const PAGE_SCROLL: usize = 10;

/// Lines moved per mouse wheel notch.
const WHEEL_SCROLL: usize = 3;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Scroll position of the message list.
    pub list_state: MessageListState,

    session: Session,
    config: Config,
    theme: Theme,

    /// Where the send button was last drawn, for mouse hit tests.
    send_button: Rect,
}

impl App {
    /// Create the app for a configuration.
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            list_state: MessageListState::new(),
            session: Session::new(&config),
            theme: Theme::from_name(config.theme),
            config,
            send_button: Rect::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle a user action.
    pub fn handle_action(&mut self, action: Action) {
        let effects = match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::Enter { shift } => self.session.handle_key(KeyPress {
                key: Key::Enter,
                shift,
            }),
            Action::Submit => self.session.submit(),
            Action::Insert(c) => self.session.edit(InputEdit::Insert(c)),
            Action::Backspace => self.session.edit(InputEdit::Backspace),
            Action::Delete => self.session.edit(InputEdit::Delete),
            Action::Left => self.session.edit(InputEdit::MoveLeft),
            Action::Right => self.session.edit(InputEdit::MoveRight),
            Action::Home => self.session.edit(InputEdit::MoveHome),
            Action::End => self.session.edit(InputEdit::MoveEnd),
            Action::ScrollUp => {
                self.list_state.scroll_up(1);
                return;
            }
            Action::ScrollDown => {
                self.list_state.scroll_down(1);
                return;
            }
            Action::PageUp => {
                self.list_state.scroll_up(PAGE_SCROLL);
                return;
            }
            Action::PageDown => {
                self.list_state.scroll_down(PAGE_SCROLL);
                return;
            }
            Action::None => return,
        };
        self.apply(effects);
    }

    /// Handle wheel scrolling and clicks on the send button.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.list_state.scroll_up(WHEEL_SCROLL),
            MouseEventKind::ScrollDown => self.list_state.scroll_down(WHEEL_SCROLL),
            MouseEventKind::Down(MouseButton::Left) => {
                if self
                    .send_button
                    .contains(Position::new(mouse.column, mouse.row))
                {
                    self.handle_action(Action::Submit);
                }
            }
            _ => {}
        }
    }

    /// Wait for the next reply timer to fire.
    pub async fn recv_reply(&mut self) -> Option<PendingReply> {
        self.session.recv_reply().await
    }

    /// Append a reply whose timer fired.
    pub fn on_reply(&mut self, reply: PendingReply) {
        let effects = self.session.dispatch(ViewEvent::ReplyDue(reply));
        self.apply(effects);
    }

    /// Timers are owned by the session; only view effects are handled here.
    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            if effect == Effect::ScrollToBottom {
                self.list_state.scroll_to_bottom();
            }
        }
    }

    /// Draw the whole page into `buf`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let page = centered(area, self.config.max_width);

        let [header_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(INPUT_HEIGHT + 1),
        ])
        .areas(page);

        Header::new(&self.config.title, &self.config.subtitle, &self.theme)
            .render(header_area, buf);

        MessageList::new(self.session.messages(), &self.theme)
            .bubble_width(self.config.bubble_width)
            .render(list_area, buf, &mut self.list_state);

        let footer = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.border))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(self.theme.base));
        let input_area = footer.inner(footer_area);
        footer.render(footer_area, buf);

        self.send_button = InputBar::button_area(input_area);
        let conversation = self.session.conversation();
        InputBar::new(conversation.input(), &self.theme)
            .placeholder(&self.config.placeholder)
            .can_send(conversation.can_send())
            .render(input_area, buf);
    }

    /// End the session, cancelling pending replies, and return the transcript.
    pub fn shutdown(self) -> Vec<Message> {
        self.session.shutdown()
    }
}

/// Center a column of at most `max_width` within `area`.
fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width.max(1));
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, render_app_to_string};
    use crossterm::event::KeyModifiers;
    use parrot_engine::Sender;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::Insert(c));
        }
    }

    #[test]
    fn test_initial_render() {
        let mut app = create_test_app();
        let screen = render_app_to_string(&mut app, 80, 24);
        assert!(screen.contains("Chatbot Assistant"));
        assert!(screen.contains("Ask me anything"));
        assert!(screen.contains("Hello! How can I help you today?"));
        assert!(screen.contains("Type your message..."));
        assert!(screen.contains("Send"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_sends_and_reply_arrives() {
        let mut app = create_test_app();
        type_text(&mut app, "hi");
        app.handle_action(Action::Enter { shift: false });

        let messages = app.session().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].text, "hi");
        assert!(app.session().conversation().input().is_empty());

        let reply = app.recv_reply().await.unwrap();
        app.on_reply(reply);
        let last = app.session().messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains("hi"));

        let screen = render_app_to_string(&mut app, 80, 24);
        assert!(screen.contains("This is a demo"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shift_enter_does_not_send() {
        let mut app = create_test_app();
        type_text(&mut app, "hold");
        app.handle_action(Action::Enter { shift: true });

        assert_eq!(app.session().messages().len(), 1);
        assert_eq!(app.session().conversation().input().content(), "hold");
    }

    #[tokio::test(start_paused = true)]
    async fn test_line_feed_does_not_send() {
        use crate::event::key_to_action;
        use crossterm::event::{KeyCode, KeyEvent};

        let mut app = create_test_app();
        type_text(&mut app, "hold");
        app.handle_action(key_to_action(KeyEvent::new(
            KeyCode::Char('j'),
            KeyModifiers::CONTROL,
        )));

        assert_eq!(app.session().messages().len(), 1);
        assert_eq!(app.session().conversation().input().content(), "hold");
    }

    #[test]
    fn test_blank_enter_is_noop() {
        let mut app = create_test_app();
        type_text(&mut app, "   ");
        app.handle_action(Action::Enter { shift: false });
        assert_eq!(app.session().messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_send_button() {
        let mut app = create_test_app();
        render_app_to_string(&mut app, 80, 24);
        type_text(&mut app, "clicked");

        let button = app.send_button;
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: button.x + 1,
            row: button.y + 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.session().messages().len(), 2);

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.session().messages().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_scrolls_to_bottom() {
        let mut app = create_test_app();
        for i in 0..8 {
            type_text(&mut app, &format!("message {i}"));
            app.handle_action(Action::Enter { shift: false });
        }
        render_app_to_string(&mut app, 60, 16);

        app.handle_action(Action::PageUp);
        assert!(!app.list_state.follow);

        type_text(&mut app, "latest");
        app.handle_action(Action::Enter { shift: false });
        assert!(app.list_state.follow);

        let screen = render_app_to_string(&mut app, 60, 16);
        assert!(screen.contains("latest"));
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_returns_transcript() {
        let mut app = create_test_app();
        type_text(&mut app, "bye");
        app.handle_action(Action::Submit);
        let transcript = app.shutdown();
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_centered_caps_width() {
        let page = centered(Rect::new(0, 0, 120, 10), 100);
        assert_eq!(page, Rect::new(10, 0, 100, 10));

        let narrow = centered(Rect::new(0, 0, 40, 10), 100);
        assert_eq!(narrow, Rect::new(0, 0, 40, 10));
    }
}
