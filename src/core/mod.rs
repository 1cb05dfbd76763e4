//! # Core Application Logic
//!
//! This module contains the state machines behind each drill.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board / Column       │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: The `Board` struct, three columns and the column cursor
//! - [`column`]: The `Column` struct, task order and the task cursor
//! - [`action`]: The `Action` enum and the board reducer
//! - [`spinner`]: The spinner list drill
//! - [`page`]: The page layout drill
//! - [`config`]: Layered settings (defaults, file, env, CLI)

pub mod action;
pub mod board;
pub mod column;
pub mod config;
pub mod page;
pub mod spinner;
