use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use std::time::Duration;

use crate::core::action::Action;
use crate::core::page::PageAction;
use crate::core::spinner::SpinnerAction;

/// TUI-specific input events, decoded from crossterm.
///
/// Vim keys and arrows collapse into the same variant, so each program only
/// has to say what a direction means to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Ctrl+C, quits every program
    ForceQuit,

    // Arrows or h/j/k/l
    Left,
    Right,
    Up,
    Down,

    // Ctrl+arrows or Ctrl+h/j/k/l
    CtrlLeft,
    CtrlRight,
    CtrlUp,
    CtrlDown,

    InputChar(char),
    Resize(u16, u16),
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(decode(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

fn decode(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

/// Translate one key press. Releases (sent by terminals with the kitty
/// protocol) and unbound keys map to `None`.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code, key_event.modifiers
    );

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match (ctrl, key_event.code) {
        (true, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (true, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::CtrlLeft),
        (true, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::CtrlRight),
        (true, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CtrlUp),
        (true, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CtrlDown),
        (true, _) => None,
        (false, KeyCode::Left | KeyCode::Char('h')) => Some(TuiEvent::Left),
        (false, KeyCode::Right | KeyCode::Char('l')) => Some(TuiEvent::Right),
        (false, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::Up),
        (false, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::Down),
        (false, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        _ => None,
    }
}

// ============================================================================
// Per-program bindings
// ============================================================================

pub fn board_action(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Left => Some(Action::FocusLeft),
        TuiEvent::Right => Some(Action::FocusRight),
        TuiEvent::Up => Some(Action::FocusUp),
        TuiEvent::Down => Some(Action::FocusDown),
        TuiEvent::CtrlUp => Some(Action::RaisePriority),
        TuiEvent::CtrlDown => Some(Action::LowerPriority),
        TuiEvent::CtrlRight => Some(Action::MoveTaskToNextColumn),
        TuiEvent::CtrlLeft => Some(Action::MoveTaskToPreviousColumn),
        TuiEvent::Resize(width, height) => Some(Action::Resize { width, height }),
        TuiEvent::InputChar(_) => None,
    }
}

pub fn spinner_action(event: TuiEvent) -> Option<SpinnerAction> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::InputChar('q') => Some(SpinnerAction::Quit),
        TuiEvent::Down => Some(SpinnerAction::SelectNext),
        TuiEvent::Up => Some(SpinnerAction::SelectPrevious),
        TuiEvent::InputChar(' ') => Some(SpinnerAction::Reset),
        _ => None,
    }
}

pub fn page_action(event: TuiEvent) -> Option<PageAction> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::InputChar('q') => Some(PageAction::Quit),
        TuiEvent::Resize(width, height) => Some(PageAction::Resize { width, height }),
        _ => None,
    }
}
