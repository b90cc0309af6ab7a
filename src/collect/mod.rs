//! # Task Collection
//!
//! Everything that produces the list of monitored tasks. The rest of the
//! crate only ever sees a [`Snapshot`] handed back by a [`TaskProvider`].

pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{ProviderError, TaskProvider};
pub use providers::{MockTaskProvider, ProcTaskProvider};
pub use types::{Label, MAX_ENTITIES, MonitoredEntity, Snapshot, TaskState};
