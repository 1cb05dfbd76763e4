//! # Board State
//!
//! The kanban board: exactly three columns, the focused column index, and
//! the last viewport size reported by the terminal.
//!
//! ```text
//! Board
//! ├── columns: [Column; 3]      // TODO, IN PROGRESS, DONE
//! ├── focused_column: usize     // always < 3
//! └── viewport: Viewport        // last resize, read by the renderer
//! ```
//!
//! Every method here is a guarded transition: it either applies its effect
//! and returns `true`, or leaves the board untouched and returns `false`.
//! Nothing fails. State changes reach the board through `update()` in
//! action.rs.

use crate::core::column::{Column, Direction};

pub const COLUMN_COUNT: usize = 3;

pub const COLUMN_TITLES: [&str; COLUMN_COUNT] = ["TODO", "IN PROGRESS", "DONE"];

/// Terminal size as last reported by a resize event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Read-only projection of one column, handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnView<'a> {
    pub title: &'a str,
    pub tasks: &'a [String],
    pub focused_task: Option<usize>,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: [Column; COLUMN_COUNT],
    focused_column: usize,
    viewport: Viewport,
}

impl Default for Board {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Board {
    pub fn new(columns: [Column; COLUMN_COUNT]) -> Self {
        Self {
            columns,
            focused_column: 0,
            viewport: Viewport::default(),
        }
    }

    /// The startup board: six tasks spread over the three columns.
    pub fn seeded() -> Self {
        let tasks = |names: &[&str]| -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        };
        Self::new([
            Column::new(COLUMN_TITLES[0], tasks(&["Task 1", "Task 2", "Task 3"])),
            Column::new(COLUMN_TITLES[1], tasks(&["Task 4", "Task 5"])),
            Column::new(COLUMN_TITLES[2], tasks(&["Task 6"])),
        ])
    }

    pub fn columns(&self) -> &[Column; COLUMN_COUNT] {
        &self.columns
    }

    pub fn focused_column_index(&self) -> usize {
        self.focused_column
    }

    pub fn focused_column(&self) -> &Column {
        &self.columns[self.focused_column]
    }

    fn focused_column_mut(&mut self) -> &mut Column {
        &mut self.columns[self.focused_column]
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Everything a renderer needs, one entry per column, left to right.
    pub fn column_views(&self) -> impl Iterator<Item = ColumnView<'_>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| ColumnView {
                title: column.title(),
                tasks: column.tasks(),
                focused_task: column.focused_task_index(),
                is_focused: index == self.focused_column,
            })
    }

    fn last_column_index(&self) -> usize {
        COLUMN_COUNT - 1
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    pub fn focus_left(&mut self) -> bool {
        if self.focused_column > 0 {
            self.focused_column -= 1;
            true
        } else {
            false
        }
    }

    pub fn focus_right(&mut self) -> bool {
        if self.focused_column < self.last_column_index() {
            self.focused_column += 1;
            true
        } else {
            false
        }
    }

    pub fn focus_down(&mut self) -> bool {
        self.focused_column_mut().focus_next()
    }

    pub fn focus_up(&mut self) -> bool {
        self.focused_column_mut().focus_previous()
    }

    // ------------------------------------------------------------------------
    // Reordering within a column
    // ------------------------------------------------------------------------

    /// Swap the focused task with the one above it and keep the cursor on it.
    pub fn raise_priority(&mut self) -> bool {
        let column = self.focused_column_mut();
        if column.swap_with_neighbor(Direction::Up) {
            column.focus_previous();
            true
        } else {
            false
        }
    }

    /// Swap the focused task with the one below it and keep the cursor on it.
    pub fn lower_priority(&mut self) -> bool {
        let column = self.focused_column_mut();
        if column.swap_with_neighbor(Direction::Down) {
            column.focus_next();
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------------
    // Moving tasks between columns
    // ------------------------------------------------------------------------

    pub fn move_task_to_next_column(&mut self) -> bool {
        if self.focused_column >= self.last_column_index() {
            return false;
        }
        self.move_focused_task_to(self.focused_column + 1)
    }

    pub fn move_task_to_previous_column(&mut self) -> bool {
        if self.focused_column == 0 {
            return false;
        }
        self.move_focused_task_to(self.focused_column - 1)
    }

    /// Relocate the focused task to the bottom of `target` and follow it.
    fn move_focused_task_to(&mut self, target: usize) -> bool {
        let Some(task) = self.focused_column_mut().extract_focused() else {
            return false;
        };
        let destination = &mut self.columns[target];
        destination.append_task(task);
        destination.focus_last();
        self.focused_column = target;
        true
    }

    // ------------------------------------------------------------------------
    // Viewport
    // ------------------------------------------------------------------------

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{board_with, labels};

    #[test]
    fn test_seeded_board_layout() {
        let board = Board::seeded();
        assert_eq!(board.focused_column_index(), 0);
        assert_eq!(board.focused_column().focused_task(), Some("Task 1"));
        let titles: Vec<&str> = board.columns().iter().map(|c| c.title()).collect();
        assert_eq!(titles, COLUMN_TITLES);
        assert_eq!(labels(&board.columns()[1]), vec!["Task 4", "Task 5"]);
        assert_eq!(board.viewport(), Viewport::default());
    }

    #[test]
    fn test_column_focus_is_bounded() {
        let mut board = Board::seeded();
        assert!(!board.focus_left());
        assert!(board.focus_right());
        assert!(board.focus_right());
        assert!(!board.focus_right());
        assert_eq!(board.focused_column_index(), 2);
    }

    #[test]
    fn test_task_focus_follows_focused_column() {
        let mut board = Board::seeded();
        assert!(board.focus_down());
        assert!(board.focus_down());
        assert!(!board.focus_down());
        assert_eq!(board.focused_column().focused_task(), Some("Task 3"));

        // Each column remembers its own cursor.
        board.focus_right();
        assert_eq!(board.focused_column().focused_task(), Some("Task 4"));
        board.focus_left();
        assert_eq!(board.focused_column().focused_task(), Some("Task 3"));
    }

    #[test]
    fn test_lower_priority_cursor_follows_task() {
        let mut board = Board::seeded();
        assert!(board.lower_priority());
        assert_eq!(
            labels(&board.columns()[0]),
            vec!["Task 2", "Task 1", "Task 3"]
        );
        assert_eq!(board.focused_column().focused_task_index(), Some(1));
        assert_eq!(board.focused_column().focused_task(), Some("Task 1"));
    }

    #[test]
    fn test_raise_priority_at_top_is_noop() {
        let mut board = Board::seeded();
        let before = board.clone();
        assert!(!board.raise_priority());
        assert_eq!(board, before);
    }

    #[test]
    fn test_lower_priority_at_bottom_is_noop() {
        let mut board = Board::seeded();
        board.focus_right();
        board.focus_down();
        let before = board.clone();
        assert!(!board.lower_priority());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_to_next_column_follows_task() {
        let mut board = Board::seeded();
        assert!(board.move_task_to_next_column());
        assert_eq!(labels(&board.columns()[0]), vec!["Task 2", "Task 3"]);
        assert_eq!(
            labels(&board.columns()[1]),
            vec!["Task 4", "Task 5", "Task 1"]
        );
        assert_eq!(board.focused_column_index(), 1);
        assert_eq!(board.focused_column().focused_task_index(), Some(2));
    }

    #[test]
    fn test_move_from_last_column_right_is_noop() {
        let mut board = Board::seeded();
        board.focus_right();
        board.focus_right();
        let before = board.clone();
        assert!(!board.move_task_to_next_column());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_from_first_column_left_is_noop() {
        let mut board = Board::seeded();
        let before = board.clone();
        assert!(!board.move_task_to_previous_column());
        assert_eq!(board, before);
    }

    #[test]
    fn test_moves_from_empty_column_are_noops() {
        let mut board = board_with(&[], &["x"], &[]);
        let before = board.clone();
        assert!(!board.move_task_to_next_column());
        assert!(!board.raise_priority());
        assert!(!board.lower_priority());
        assert!(!board.focus_down());
        assert!(!board.focus_up());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_into_empty_column() {
        let mut board = board_with(&["a", "b"], &[], &[]);
        assert!(board.move_task_to_next_column());
        assert_eq!(board.focused_column().focused_task(), Some("a"));
        assert!(board.move_task_to_next_column());
        assert!(board.columns()[1].is_empty());
        assert_eq!(labels(&board.columns()[2]), vec!["a"]);
        assert_eq!(board.focused_column_index(), 2);
    }

    #[test]
    fn test_column_views_report_focus() {
        let mut board = Board::seeded();
        board.focus_right();
        board.focus_right();
        board.move_task_to_previous_column();

        let views: Vec<ColumnView> = board.column_views().collect();
        assert_eq!(views.len(), COLUMN_COUNT);
        assert!(!views[0].is_focused);
        assert!(views[1].is_focused);
        assert_eq!(views[1].focused_task, Some(2));
        assert_eq!(views[1].tasks.last().map(String::as_str), Some("Task 6"));
        assert_eq!(views[2].focused_task, None);
        assert_eq!(views[2].title, "DONE");
    }

    #[test]
    fn test_resize_records_viewport() {
        let mut board = Board::seeded();
        board.resize(120, 40);
        assert_eq!(
            board.viewport(),
            Viewport {
                width: 120,
                height: 40,
            }
        );
    }
}
