//! # Column
//!
//! One kanban column: a title, an ordered list of task labels, and the index
//! of the task the cursor rests on.
//!
//! ```text
//! Column
//! ├── title: String          // display only ("TODO", "DONE", ...)
//! ├── tasks: Vec<String>     // top = highest priority
//! └── focused: usize         // meaningful only while tasks is non-empty
//! ```
//!
//! The column knows nothing about its neighbours. Cross-column moves are
//! composed by the board out of `extract_focused()` and `append_task()`.

/// Which neighbour a swap exchanges the focused task with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward index 0 (higher priority).
    Up,
    /// Toward the end of the list (lower priority).
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    title: String,
    tasks: Vec<String>,
    focused: usize,
}

impl Column {
    pub fn new(title: impl Into<String>, tasks: Vec<String>) -> Self {
        Self {
            title: title.into(),
            tasks,
            focused: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Index of the focused task, or `None` for an empty column.
    pub fn focused_task_index(&self) -> Option<usize> {
        if self.tasks.is_empty() {
            None
        } else {
            Some(self.focused)
        }
    }

    pub fn focused_task(&self) -> Option<&str> {
        self.focused_task_index()
            .map(|index| self.tasks[index].as_str())
    }

    /// Move the cursor one task down. Returns false at the last task.
    pub fn focus_next(&mut self) -> bool {
        if self.focused + 1 < self.tasks.len() {
            self.focused += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor one task up. Returns false at the first task.
    pub fn focus_previous(&mut self) -> bool {
        if !self.tasks.is_empty() && self.focused > 0 {
            self.focused -= 1;
            true
        } else {
            false
        }
    }

    /// Point the cursor at the last task (no-op on an empty column).
    pub fn focus_last(&mut self) {
        if let Some(last) = self.tasks.len().checked_sub(1) {
            self.focused = last;
        }
    }

    /// Exchange the focused task with its neighbour in `direction`.
    ///
    /// Only the tasks move: the numeric focus index stays where it was, so
    /// right after a successful swap it points at the *other* task. Callers
    /// that want the cursor to follow the moved task must step the index
    /// themselves (the board does this for raise/lower priority).
    ///
    /// Returns false, without touching anything, when there is no neighbour.
    pub fn swap_with_neighbor(&mut self, direction: Direction) -> bool {
        if self.tasks.is_empty() {
            return false;
        }
        let neighbor = match direction {
            Direction::Up if self.focused > 0 => self.focused - 1,
            Direction::Down if self.focused + 1 < self.tasks.len() => self.focused + 1,
            _ => return false,
        };
        self.tasks.swap(self.focused, neighbor);
        true
    }

    /// Remove and return the focused task.
    ///
    /// Afterwards the cursor steps up one slot unless it was already at the
    /// top, in which case it stays at 0 (now the task that shifted up, or
    /// nothing if the column emptied). Returns `None` on an empty column.
    pub fn extract_focused(&mut self) -> Option<String> {
        if self.tasks.is_empty() {
            return None;
        }
        let task = self.tasks.remove(self.focused);
        if self.focused > 0 {
            self.focused -= 1;
        }
        Some(task)
    }

    /// Append a task at the bottom. The cursor is left alone.
    pub fn append_task(&mut self, task: String) {
        self.tasks.push(task);
    }
}
