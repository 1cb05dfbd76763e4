//! Drills library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which drill to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Program {
    /// Three-column task board
    #[default]
    Kanban,
    /// List of items waiting on timers
    Spinner,
    /// Header over a body, sized to the terminal
    Layout,
}
