//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, installs the resize
//! notifier, and drives the [`EventLoop`].
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop redraws the full frame once per iteration and then blocks in a
//! single bounded wait on standard input:
//!
//! - **Idle**: the wait times out after the refresh interval (1s by default)
//!   and the next iteration redraws with a fresh snapshot.
//! - **Key press**: the wait returns immediately, the key is applied, and
//!   the next frame reflects it without waiting for the tick.
//! - **Resize**: `SIGWINCH` raises a flag and cuts the wait short; the next
//!   iteration re-syncs the terminal size before laying anything out.
//!
//! ## Terminal Restore
//!
//! [`TerminalGuard`] restores the terminal in `Drop`, so every way out of
//! [`run`] (quit, fatal error, `?` early return) leaves the shell usable
//! before the caller prints anything. ratatui's panic hook covers panics.

mod component;
pub mod components;
pub mod event;
pub mod event_loop;
pub mod resize;
pub mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::TaskSource;
use crate::collect::{MockTaskProvider, ProcTaskProvider, TaskProvider};
use crate::core::config::ResolvedConfig;
use crate::core::stats::SessionStats;
use crate::error::AppError;
use crate::tui::event::CrosstermWaiter;
use crate::tui::resize::{ResizeFlag, ResizeNotifier};

pub use event_loop::EventLoop;

struct TerminalGuard;

impl TerminalGuard {
    /// Must be created before the terminal is switched to raw mode so a
    /// failure halfway through initialization is still undone.
    fn new() -> Self {
        Self
    }

    fn hide_cursor(&self) -> std::io::Result<()> {
        execute!(stdout(), Hide)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        ratatui::restore();
        info!("Terminal restored");
    }
}

/// Build a provider for the configured task source.
pub fn build_provider(config: &ResolvedConfig) -> Box<dyn TaskProvider> {
    match config.source {
        TaskSource::Mock => Box::new(MockTaskProvider::new(config.max_tasks)),
        TaskSource::Proc => Box::new(ProcTaskProvider::new(config.max_tasks)),
    }
}

/// Runs the dashboard until the user quits.
///
/// The terminal is back in its original mode by the time this returns,
/// whether it returns stats or an error.
pub fn run(config: &ResolvedConfig) -> Result<SessionStats, AppError> {
    let provider = build_provider(config);

    // Registered before anything is drawn
    let resize = ResizeFlag::new();
    let _notifier = ResizeNotifier::register(&resize).map_err(AppError::Signal)?;

    let guard = TerminalGuard::new();
    let terminal = ratatui::try_init().map_err(AppError::Terminal)?;
    guard.hide_cursor().map_err(AppError::Terminal)?;
    info!("Terminal initialized (raw mode, alternate screen)");

    let waiter = CrosstermWaiter::new(resize.clone());
    let event_loop = EventLoop::new(
        terminal,
        provider,
        waiter,
        resize,
        config.refresh_interval,
        config.show_debug_panel,
    )?;

    let result = event_loop.run();
    drop(guard);
    result
}
