//! # Actions
//!
//! Everything that can happen to the board becomes an `Action`.
//! User presses `ctrl+l`? That's `Action::MoveTaskToNextColumn`.
//! Terminal resizes? That's `Action::Resize { width, height }`.
//!
//! The `update()` function takes the board and an action, applies it in
//! place, and returns an `Effect` telling the event loop whether anything
//! beyond a redraw is needed. No I/O happens here.
//!
//! ```text
//! Board + Action  →  update()  →  Board' + Effect
//! ```
//!
//! This makes everything testable: apply a list of actions, compare boards.

use log::debug;

use crate::core::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FocusLeft,
    FocusRight,
    FocusDown,
    FocusUp,
    RaisePriority,
    LowerPriority,
    MoveTaskToNextColumn,
    MoveTaskToPreviousColumn,
    Resize { width: u16, height: u16 },
    Quit,
}

/// What the event loop should do after an `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Board changed (or may have); redraw.
    Redraw,
    /// The action's precondition did not hold; the board is untouched.
    None,
    Quit,
}

/// Apply `action` to `board`. Never fails: an action whose precondition
/// does not hold is an identity transition.
pub fn update(board: &mut Board, action: Action) -> Effect {
    let changed = match action {
        Action::FocusLeft => board.focus_left(),
        Action::FocusRight => board.focus_right(),
        Action::FocusDown => board.focus_down(),
        Action::FocusUp => board.focus_up(),
        Action::RaisePriority => board.raise_priority(),
        Action::LowerPriority => board.lower_priority(),
        Action::MoveTaskToNextColumn => board.move_task_to_next_column(),
        Action::MoveTaskToPreviousColumn => board.move_task_to_previous_column(),
        Action::Resize { width, height } => {
            board.resize(width, height);
            true
        }
        Action::Quit => return Effect::Quit,
    };

    if changed {
        debug!(
            "Applied {:?}: column={} task={:?}",
            action,
            board.focused_column_index(),
            board.focused_column().focused_task_index()
        );
        Effect::Redraw
    } else {
        debug!("Ignored {:?}: precondition not met", action);
        Effect::None
    }
}
