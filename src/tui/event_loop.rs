//! # Event Loop
//!
//! The driver. Each iteration runs the same fixed sequence:
//!
//! ```text
//! ┌─► 1. drain resize flag ── set? ──► re-sync backend size, resize_count += 1
//! │   2. recompute geometry from current size + debug flag
//! │   3. fetch snapshot from the provider
//! │   4. render the full frame
//! │   5. wait (≤ tick) for input
//! │   6. dispatch: Ready → update()  Timeout → tick
//! │                Interrupted → loop   Error → terminate
//! └───────────────────────────────────────────────────────
//! ```
//!
//! Step 1 must finish before step 2 reads the dimensions; otherwise the frame
//! is laid out for a terminal that no longer exists.
//!
//! The loop is generic over the ratatui backend, the provider and the
//! waiter so tests can drive it step by step against a `TestBackend`.

use std::time::Duration;

use log::{debug, error, info, warn};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Rect, Size};

use crate::collect::TaskProvider;
use crate::core::action::{Effect, update};
use crate::core::state::{App, LoopState};
use crate::core::stats::SessionStats;
use crate::error::AppError;
use crate::tui::event::{InputWaiter, WaitOutcome};
use crate::tui::resize::ResizeFlag;
use crate::tui::ui;

pub struct EventLoop<B: Backend, P: TaskProvider, W: InputWaiter> {
    terminal: Terminal<B>,
    provider: P,
    waiter: W,
    resize: ResizeFlag,
    tick: Duration,
    /// Backend size as of the last re-sync.
    dimensions: Size,
    app: App,
}

impl<B, P, W> EventLoop<B, P, W>
where
    B: Backend,
    P: TaskProvider,
    W: InputWaiter,
{
    pub fn new(
        terminal: Terminal<B>,
        provider: P,
        waiter: W,
        resize: ResizeFlag,
        tick: Duration,
        debug_visible: bool,
    ) -> Result<Self, AppError> {
        let dimensions = terminal.size().map_err(AppError::terminal)?;
        let app = App::new(provider.name(), debug_visible);
        Ok(Self {
            terminal,
            provider,
            waiter,
            resize,
            tick,
            dimensions,
            app,
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn waiter(&self) -> &W {
        &self.waiter
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs iterations until the user quits or a fatal error occurs.
    pub fn run(mut self) -> Result<SessionStats, AppError> {
        info!(
            "Event loop starting (source: {}, tick: {:?})",
            self.app.source_name, self.tick
        );
        while self.step()? != LoopState::Terminating {}
        info!("Event loop finished: {:?}", self.app.stats);
        Ok(self.app.stats)
    }

    /// One full iteration. Returns the state the loop is left in.
    pub fn step(&mut self) -> Result<LoopState, AppError> {
        self.drain_resize()?;

        self.app
            .apply_dimensions(self.dimensions.height, self.dimensions.width);

        match self.provider.list() {
            Ok(snapshot) => self.app.replace_snapshot(snapshot),
            Err(e) => {
                // Keep showing the previous snapshot
                warn!("Provider '{}' failed: {}", self.provider.name(), e);
                self.app.stats.record_provider_fault(e.code(), e.to_string());
            }
        }

        let app = &self.app;
        self.terminal
            .draw(|frame| ui::draw_ui(frame, app))
            .map_err(AppError::terminal)?;

        match self.waiter.wait(self.tick) {
            WaitOutcome::Ready(event) => {
                self.app.stats.record_input();
                if let Some(action) = event.action() {
                    if update(&mut self.app, action) == Effect::Quit {
                        info!("Quit requested");
                    }
                }
            }
            WaitOutcome::Timeout => self.app.stats.record_timeout(),
            WaitOutcome::Interrupted => {
                debug!("Wait interrupted by resize");
                self.app.stats.record_interrupt();
            }
            WaitOutcome::Error(e) => {
                error!("Input wait failed: {}", e);
                self.app
                    .stats
                    .record_error(e.raw_os_error().unwrap_or(-1), e.to_string());
                self.app.state = LoopState::Terminating;
                return Err(AppError::wait(e));
            }
        }

        Ok(self.app.state)
    }

    /// Step 1: clear a pending resize and bring the backend up to date.
    ///
    /// A failed re-sync is fatal; the loop is left `Terminating`, never
    /// stuck in `Draining`.
    fn drain_resize(&mut self) -> Result<(), AppError> {
        if !self.resize.take() {
            return Ok(());
        }
        self.app.state = LoopState::Draining;

        match self.resync_size() {
            Ok(size) => {
                self.dimensions = size;
                self.app.stats.record_resize();
                debug!("Resize drained: {}x{}", size.width, size.height);
                self.app.state = LoopState::Running;
                Ok(())
            }
            Err(e) => {
                error!("Resize drain failed: {}", e);
                self.app.stats.record_error(-1, e.to_string());
                self.app.state = LoopState::Terminating;
                Err(e)
            }
        }
    }

    fn resync_size(&mut self) -> Result<Size, AppError> {
        let size = self.terminal.size().map_err(AppError::terminal)?;
        self.terminal
            .resize(Rect::new(0, 0, size.width, size.height))
            .map_err(AppError::terminal)?;
        Ok(size)
    }
}
