//! # TUI Components
//!
//! One component per screen section, top to bottom:
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (title, clock, status + separator)
//! ├── task_table.rs    (column header + scrollable task rows)
//! ├── debug_panel.rs   (session counters, toggled with `d`)
//! └── footer.rs        (key legend)
//! ```
//!
//! All of them are stateless: they receive data as props (struct fields)
//! and borrow anything large from `App` for the duration of one frame.
//! This makes dependencies explicit and every component testable against a
//! `TestBackend`.

pub mod debug_panel;
pub mod footer;
pub mod header;
pub mod task_table;

pub use debug_panel::DebugPanel;
pub use footer::Footer;
pub use header::Header;
pub use task_table::TaskTable;
