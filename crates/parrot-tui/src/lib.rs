//! parrot-tui: Terminal UI for the parrot demo chat page
//!
//! This crate draws the page around the engine's view-model:
//! - Header, message bubbles, input bar with send button
//! - Key and mouse mapping
//! - Event loop that interleaves terminal input with reply timers

mod app;
mod event;
#[cfg(test)]
pub mod test_utils;
mod text;
mod theme;
mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use parrot_engine;
pub use theme::Theme;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use parrot_engine::Config;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::debug;

/// RAII guard for terminal state restoration.
struct TerminalGuard {
    /// Keyboard enhancement flags were pushed and must be popped.
    keyboard_enhanced: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on exit. Pending replies are cancelled.
pub async fn run_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut guard = TerminalGuard {
        keyboard_enhanced: false,
    };

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Shift+Enter is only distinguishable from Enter with the kitty protocol.
    // Legacy terminals fall back to the Ctrl+J mapping in `key_to_action`.
    if supports_keyboard_enhancement().unwrap_or(false) {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        guard.keyboard_enhanced = true;
    }
    debug!(
        keyboard_enhanced = guard.keyboard_enhanced,
        "terminal ready"
    );
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // 4 Hz tick rate = 250ms
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    let transcript = app.shutdown();
    debug!(messages = transcript.len(), "chat closed");

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            app.render(area, frame.buffer_mut());
        })?;

        tokio::select! {
            event = events.next() => match event {
                Some(Event::Key(key)) => app.handle_action(key_to_action(key)),
                Some(Event::Mouse(mouse)) => app.handle_mouse(mouse),
                // Redraw happens at the top of the loop
                Some(Event::Tick | Event::Resize(_, _)) => {}
                None => break,
            },
            Some(reply) = app.recv_reply() => app.on_reply(reply),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
