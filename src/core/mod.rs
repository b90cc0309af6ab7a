//! # Core Application Logic
//!
//! This module contains procex's dashboard logic.
//! It knows nothing about any specific terminal library.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Viewport + geometry  │
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
//! - [`state`]: The `App` struct, all dashboard state in one place
//! - [`action`]: The `Action` enum, everything the user can ask for
//! - [`viewport`]: Selection and scroll math
//! - [`geometry`]: Rows per screen section
//! - [`stats`]: Session counters
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod config;
pub mod geometry;
pub mod state;
pub mod stats;
pub mod viewport;
