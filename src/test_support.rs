//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::board::{Board, COLUMN_TITLES};
use crate::core::column::Column;

/// Builds a column from string literals.
pub fn column(title: &str, tasks: &[&str]) -> Column {
    Column::new(title, tasks.iter().map(|t| t.to_string()).collect())
}

/// Builds a board with the standard titles and the given tasks.
pub fn board_with(todo: &[&str], in_progress: &[&str], done: &[&str]) -> Board {
    Board::new([
        column(COLUMN_TITLES[0], todo),
        column(COLUMN_TITLES[1], in_progress),
        column(COLUMN_TITLES[2], done),
    ])
}

/// The task labels of a column, borrowed as `&str` for easy comparison.
pub fn labels(column: &Column) -> Vec<&str> {
    column.tasks().iter().map(String::as_str).collect()
}

/// Runs every action through `update()` in order.
pub fn apply_all(board: &mut Board, actions: &[Action]) {
    for action in actions {
        update(board, *action);
    }
}
