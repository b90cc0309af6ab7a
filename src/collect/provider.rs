use thiserror::Error;

use super::types::Snapshot;

/// Errors a provider can hit while building a snapshot.
///
/// None of these are fatal to the dashboard: the event loop keeps the last
/// good snapshot and records the fault for the debug panel.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The underlying data source could not be read.
    #[error("task source unavailable: {0}")]
    Io(#[from] std::io::Error),
    /// The data source returned something we could not make sense of.
    #[error("malformed task record: {0}")]
    Parse(String),
}

impl ProviderError {
    /// OS error code when there is one, `-1` otherwise.
    pub fn code(&self) -> i32 {
        match self {
            ProviderError::Io(e) => e.raw_os_error().unwrap_or(-1),
            ProviderError::Parse(_) => -1,
        }
    }
}

/// Source of monitored tasks.
///
/// `list` is called once per loop iteration on the UI thread, so it must
/// return quickly. A slow provider stalls the whole redraw cadence.
pub trait TaskProvider {
    /// Short name shown in the header (e.g. "mock", "proc").
    fn name(&self) -> &str;

    /// Produces a fresh snapshot, ordered and bounded by `MAX_ENTITIES`.
    fn list(&mut self) -> Result<Snapshot, ProviderError>;
}

impl<T: TaskProvider + ?Sized> TaskProvider for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn list(&mut self) -> Result<Snapshot, ProviderError> {
        (**self).list()
    }
}
