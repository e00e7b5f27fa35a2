//! TUI run loop: terminal setup, event handling, draw.
//!
//! Key events are read in a dedicated thread so the main loop never blocks on terminal
//! input; the reveal keeps ticking while the user is idle.

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use parley_core::SessionEvent;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc as tokio_mpsc;

use crate::branding::Branding;
use crate::runtime_events::apply_session_event;
use crate::state::{Screen, TuiState};
use crate::theme::Appearance;
use crate::view;

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);
const IDLE_SLEEP: Duration = Duration::from_millis(16);

/// What the loop does after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Run the TUI with runtime: receive [SessionEvent] on `event_rx`, send user messages on Enter via `user_msg_tx`.
/// If `log_rx` is provided, runtime log lines (tracing) are pushed to the debug traces screen (Ctrl+D).
pub fn run_tui_with_runtime(
    mut event_rx: tokio_mpsc::Receiver<SessionEvent>,
    user_msg_tx: tokio_mpsc::Sender<String>,
    log_rx: Option<tokio_mpsc::Receiver<String>>,
    branding: Branding,
    appearance: Appearance,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::new().with_appearance(appearance).with_branding(branding);
    state.push_trace_line("[log] TUI started. Runtime logs (Ctrl+D) show tracing output.".to_string());
    let result = run_loop(&mut terminal, &mut state, &mut event_rx, &user_msg_tx, log_rx);

    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    event_rx: &mut tokio_mpsc::Receiver<SessionEvent>,
    user_msg_tx: &tokio_mpsc::Sender<String>,
    mut log_rx: Option<tokio_mpsc::Receiver<String>>,
) -> anyhow::Result<()> {
    let (key_tx, key_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(Duration::from_millis(50)).unwrap_or(false)
                && let Ok(ev) = event::read()
                && key_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    loop {
        // Drain runtime log lines into debug traces (multi-line logs split into separate lines)
        if let Some(ref mut rx) = log_rx {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }
        while let Ok(event) = event_rx.try_recv() {
            apply_session_event(state, event);
        }
        state.tick(Instant::now());

        if !state.is_busy()
            && let Some(set_at) = state.status_set_at
            && set_at.elapsed() > STATUS_TIMEOUT
        {
            state.set_status(String::new());
        }

        if state.needs_redraw {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        match key_rx.try_recv() {
            Ok(Event::Key(key)) => {
                if key.kind == KeyEventKind::Press && handle_key(state, key, user_msg_tx) == KeyOutcome::Quit {
                    break;
                }
            }
            Ok(Event::Resize(_, _)) => {
                state.cache_dirty = true;
                state.needs_redraw = true;
            }
            Ok(Event::Mouse(me)) => match (me.kind, state.screen) {
                (MouseEventKind::ScrollUp, Screen::DebugTraces) => state.trace_scroll_up(3),
                (MouseEventKind::ScrollDown, Screen::DebugTraces) => state.trace_scroll_down(3),
                (MouseEventKind::ScrollUp, Screen::Main) => state.scroll_up(3),
                (MouseEventKind::ScrollDown, Screen::Main) => state.scroll_down(3),
                _ => {}
            },
            Ok(_) => {}
            Err(mpsc::TryRecvError::Empty) => std::thread::sleep(IDLE_SLEEP),
            Err(mpsc::TryRecvError::Disconnected) => break,
        }
    }
    Ok(())
}

/// Apply one key press. Enter hands the input to the runtime; the message shows
/// up once the runtime has stored it.
pub fn handle_key(state: &mut TuiState, key: KeyEvent, user_msg_tx: &tokio_mpsc::Sender<String>) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return KeyOutcome::Quit,
        KeyCode::Char('d') if ctrl => state.toggle_debug_screen(),
        _ if state.screen == Screen::DebugTraces => match key.code {
            KeyCode::Esc => state.toggle_debug_screen(),
            KeyCode::Up => state.trace_scroll_up(1),
            KeyCode::Down => state.trace_scroll_down(1),
            KeyCode::PageUp => state.trace_scroll_up(10),
            KeyCode::PageDown => state.trace_scroll_down(10),
            _ => {}
        },
        KeyCode::Char('y') if ctrl => copy_to_clipboard(state),
        KeyCode::PageUp if state.focus.is_none() => state.scroll_up(5),
        KeyCode::PageDown if state.focus.is_none() => state.scroll_down(5),
        KeyCode::Tab => {
            state.focus_next();
        }
        KeyCode::BackTab => {
            state.focus_prev();
        }
        _ if state.focus.is_some() => edit_code_view(state, key),
        KeyCode::Esc => state.skip_reveal(),
        KeyCode::Char('q') if state.input_buffer.is_empty() => return KeyOutcome::Quit,
        KeyCode::Enter => submit_input(state, user_msg_tx),
        KeyCode::Char('u') if ctrl => state.input_clear_line(),
        KeyCode::Char(c) if !ctrl => state.input_insert(c),
        KeyCode::Backspace => state.input_backspace(),
        KeyCode::Delete => state.input_delete(),
        KeyCode::Left => state.input_cursor_left(),
        KeyCode::Right => state.input_cursor_right(),
        KeyCode::Home => state.input_cursor_home(),
        KeyCode::End => state.input_cursor_end(),
        KeyCode::Up => state.scroll_up(1),
        KeyCode::Down => state.scroll_down(1),
        _ => {}
    }
    KeyOutcome::Continue
}

fn edit_code_view(state: &mut TuiState, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        state.clear_focus();
        return;
    }
    state.edit_focused(|view| match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => view.insert_char(c),
        KeyCode::Enter => view.newline(),
        KeyCode::Backspace => view.backspace(),
        KeyCode::Left => view.move_left(),
        KeyCode::Right => view.move_right(),
        KeyCode::Up => view.move_up(),
        KeyCode::Down => view.move_down(),
        KeyCode::Home => view.move_home(),
        KeyCode::End => view.move_end(),
        KeyCode::PageUp => view.scroll_by(-(view.visible_height() as isize)),
        KeyCode::PageDown => view.scroll_by(view.visible_height() as isize),
        _ => {}
    });
}

fn submit_input(state: &mut TuiState, user_msg_tx: &tokio_mpsc::Sender<String>) {
    if state.is_busy() {
        return;
    }
    let line = state.input_take();
    if line.trim().is_empty() {
        return;
    }
    if let Err(e) = user_msg_tx.try_send(line) {
        tracing::warn!(error = %e, "could not hand message to runtime");
        state.push_error(format!("Message not sent: {}", e), None);
    }
}

/// Copy the focused code view, else the last reply (Ctrl+Y).
fn copy_to_clipboard(state: &mut TuiState) {
    let Some(text) = state.copy_text().filter(|t| !t.is_empty()) else {
        return;
    };
    match cli_clipboard::set_contents(text) {
        Ok(()) => state.set_status("Copied to clipboard"),
        Err(e) => {
            tracing::debug!(error = %e, "clipboard unavailable");
            state.set_status("Clipboard unavailable");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code_view::WidgetKey;
    use parley_core::{Message, Role};

    fn press(state: &mut TuiState, tx: &tokio_mpsc::Sender<String>, code: KeyCode) -> KeyOutcome {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE), tx)
    }

    fn ctrl(state: &mut TuiState, tx: &tokio_mpsc::Sender<String>, c: char) -> KeyOutcome {
        handle_key(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), tx)
    }

    fn type_str(state: &mut TuiState, tx: &tokio_mpsc::Sender<String>, s: &str) {
        for c in s.chars() {
            press(state, tx, KeyCode::Char(c));
        }
    }

    #[test]
    fn enter_sends_input_as_typed() {
        let (tx, mut rx) = tokio_mpsc::channel(4);
        let mut state = TuiState::new();
        type_str(&mut state, &tx, "  hello ");
        press(&mut state, &tx, KeyCode::Enter);
        assert_eq!(rx.try_recv().unwrap(), "  hello ");
        assert!(state.input_buffer.is_empty());
        // nothing shown until the runtime stores it
        assert!(state.messages.is_empty());
    }

    #[test]
    fn blank_input_is_not_sent() {
        let (tx, mut rx) = tokio_mpsc::channel(4);
        let mut state = TuiState::new();
        type_str(&mut state, &tx, "   ");
        press(&mut state, &tx, KeyCode::Enter);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn enter_is_ignored_while_busy() {
        let (tx, mut rx) = tokio_mpsc::channel(4);
        let mut state = TuiState::new();
        state.pending = true;
        type_str(&mut state, &tx, "next");
        press(&mut state, &tx, KeyCode::Enter);
        assert!(rx.try_recv().is_err());
        assert_eq!(state.input_buffer, "next");
    }

    #[test]
    fn closed_runtime_shows_error() {
        let (tx, rx) = tokio_mpsc::channel(4);
        drop(rx);
        let mut state = TuiState::new();
        type_str(&mut state, &tx, "hi");
        press(&mut state, &tx, KeyCode::Enter);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn quit_keys() {
        let (tx, _rx) = tokio_mpsc::channel(4);
        let mut state = TuiState::new();
        assert_eq!(ctrl(&mut state, &tx, 'c'), KeyOutcome::Quit);
        assert_eq!(press(&mut state, &tx, KeyCode::Char('q')), KeyOutcome::Quit);
        type_str(&mut state, &tx, "a");
        assert_eq!(press(&mut state, &tx, KeyCode::Char('q')), KeyOutcome::Continue);
        assert_eq!(state.input_buffer, "aq");
    }

    #[test]
    fn ctrl_d_toggles_debug_screen() {
        let (tx, _rx) = tokio_mpsc::channel(4);
        let mut state = TuiState::new();
        ctrl(&mut state, &tx, 'd');
        assert_eq!(state.screen, Screen::DebugTraces);
        // typing goes nowhere on the debug screen
        press(&mut state, &tx, KeyCode::Char('x'));
        assert!(state.input_buffer.is_empty());
        press(&mut state, &tx, KeyCode::Esc);
        assert_eq!(state.screen, Screen::Main);
    }

    #[test]
    fn tab_focuses_and_keys_edit_the_view() {
        let (tx, mut rx) = tokio_mpsc::channel(4);
        let mut state = TuiState::new();
        let msg = Message::assistant("```py\nx = 1\n```").unwrap();
        state.push_message(1, &msg, false, Instant::now());

        press(&mut state, &tx, KeyCode::Tab);
        assert_eq!(state.focus, Some(WidgetKey::new(1, 0)));
        press(&mut state, &tx, KeyCode::End);
        type_str(&mut state, &tx, "0");
        press(&mut state, &tx, KeyCode::Enter);
        type_str(&mut state, &tx, "q");

        let view = &state.code_views[&WidgetKey::new(1, 0)];
        assert_eq!(view.text(), "x = 10\nq");
        assert!(view.is_edited());
        // keys went to the view, not the input or the runtime
        assert!(state.input_buffer.is_empty());
        assert!(rx.try_recv().is_err());

        press(&mut state, &tx, KeyCode::Esc);
        assert_eq!(state.focus, None);
    }

    #[test]
    fn page_keys_scroll_the_focused_view() {
        let (tx, _rx) = tokio_mpsc::channel(4);
        let mut state = TuiState::new();
        let body: String = (0..30).map(|i| format!("line {}\n", i)).collect();
        let msg = Message::assistant(format!("```text\n{}```", body)).unwrap();
        state.push_message(0, &msg, false, Instant::now());
        press(&mut state, &tx, KeyCode::Tab);

        press(&mut state, &tx, KeyCode::PageDown);
        let view = &state.code_views[&WidgetKey::new(0, 0)];
        assert_eq!(view.visible_rows().start, view.visible_height());
        // chat scroll untouched
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn esc_skips_reveal() {
        let (tx, _rx) = tokio_mpsc::channel(4);
        let mut state = TuiState::new();
        state.push_message(1, &Message::assistant("one two three").unwrap(), true, Instant::now());
        assert!(state.is_busy());
        press(&mut state, &tx, KeyCode::Esc);
        assert!(!state.is_busy());
        assert!(matches!(
            state.messages[0],
            crate::state::ChatItem::Message(ref m) if m.role == Role::Assistant
        ));
    }

    #[test]
    fn page_keys_scroll() {
        let (tx, _rx) = tokio_mpsc::channel(4);
        let mut state = TuiState::new();
        press(&mut state, &tx, KeyCode::PageUp);
        assert_eq!(state.scroll, 5);
        press(&mut state, &tx, KeyCode::PageDown);
        assert_eq!(state.scroll, 0);
        assert!(state.auto_scroll);
    }
}
