//! # Resize Notifier
//!
//! Turns `SIGWINCH` into a flag the event loop drains at the top of each
//! iteration.
//!
//! The signal handler may fire between any two instructions of the main
//! thread, including in the middle of a draw. All it does is an atomic store
//! (`signal_hook::flag::register`); no allocation, no locks, nothing touching
//! the terminal. The loop reads and clears the flag in one `swap`, so a
//! resize is never lost, while several resizes before a drain collapse into
//! one. That is fine because the whole geometry is re-queried on a drain.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

/// Pending-resize flag shared between the signal handler and the loop.
#[derive(Debug, Clone, Default)]
pub struct ResizeFlag(Arc<AtomicBool>);

impl ResizeFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a resize as pending. Safe from any context.
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Reads and clears the flag in one step.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Keeps the `SIGWINCH` handler installed for as long as it lives.
///
/// The handler stays registered across any number of deliveries and is
/// removed on drop.
pub struct ResizeNotifier {
    #[cfg(unix)]
    id: signal_hook::SigId,
}

impl ResizeNotifier {
    #[cfg(unix)]
    pub fn register(flag: &ResizeFlag) -> io::Result<Self> {
        let id = signal_hook::flag::register(signal_hook::consts::SIGWINCH, Arc::clone(&flag.0))?;
        info!("SIGWINCH handler registered");
        Ok(Self { id })
    }

    /// No window-change signal here; resizes arrive through the input
    /// stream instead and the waiter raises the flag.
    #[cfg(not(unix))]
    pub fn register(_flag: &ResizeFlag) -> io::Result<Self> {
        info!("No SIGWINCH on this platform, relying on input-stream resize events");
        Ok(Self {})
    }
}

impl Drop for ResizeNotifier {
    fn drop(&mut self) {
        #[cfg(unix)]
        signal_hook::low_level::unregister(self.id);
    }
}
