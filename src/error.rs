use std::io;

use thiserror::Error;

use crate::core::config::ConfigError;

/// Failures that end the session.
///
/// Resize interruptions and provider faults never show up here; the event
/// loop absorbs them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Terminal(#[source] io::Error),
    #[error("waiting for input failed (code {code}): {source}")]
    Wait {
        code: i32,
        #[source]
        source: io::Error,
    },
    #[error("failed to register resize handler: {0}")]
    Signal(#[source] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    pub fn terminal<E: std::fmt::Display>(err: E) -> Self {
        AppError::Terminal(io::Error::other(err.to_string()))
    }

    pub fn wait(source: io::Error) -> Self {
        AppError::Wait {
            code: source.raw_os_error().unwrap_or(-1),
            source,
        }
    }
}
