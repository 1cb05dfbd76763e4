//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is stateless: it receives all data as props
//! (struct fields), renders, and is dropped at the end of the frame.
//!
//! - `ColumnPanel`: One kanban column with its cursor
//! - `SpinnerRow`: One line of the spinner drill
//! - `Header`: Bordered, centered title box for the layout drill
//! - `HelpBar`: Key binding hints at the bottom of the screen
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by directly accessing
//! core state. This makes dependencies explicit and components testable.
//!
//! **Example:**
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! ColumnPanel::new(view, &theme).render(frame, area);
//!
//! // Bad: Hidden dependency on the board
//! ColumnPanel::new(&board).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── column_panel.rs  (Kanban column)
//! ├── spinner_row.rs   (Spinner list line)
//! ├── header.rs        (Page header box)
//! └── help_bar.rs      (Key binding hints)
//! ```

pub mod column_panel;
pub mod header;
pub mod help_bar;
pub mod spinner_row;

pub use column_panel::ColumnPanel;
pub use header::Header;
pub use help_bar::HelpBar;
pub use spinner_row::SpinnerRow;
