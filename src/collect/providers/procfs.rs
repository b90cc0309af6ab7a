//! Task provider backed by the Linux `/proc` filesystem.
//!
//! Walks `/proc/<pid>/task/<tid>/stat` for every thread of every process.
//! Tasks routinely exit between the directory listing and the `stat` read,
//! so per-task failures are skipped. Only failing to list the root itself is
//! reported as an error.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::collect::provider::{ProviderError, TaskProvider};
use crate::collect::types::{MAX_ENTITIES, MonitoredEntity, Snapshot, TaskState};

pub const DEFAULT_PROC_ROOT: &str = "/proc";

pub struct ProcTaskProvider {
    root: PathBuf,
    limit: usize,
}

impl ProcTaskProvider {
    pub fn new(limit: usize) -> Self {
        Self::with_root(DEFAULT_PROC_ROOT, limit)
    }

    /// Reads from an alternative root laid out like `/proc`.
    pub fn with_root(root: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            root: root.into(),
            limit: limit.min(MAX_ENTITIES),
        }
    }
}

impl TaskProvider for ProcTaskProvider {
    fn name(&self) -> &str {
        "proc"
    }

    fn list(&mut self) -> Result<Snapshot, ProviderError> {
        let mut pids = numeric_entries(&self.root)?;
        pids.sort_unstable();

        let mut entities = Vec::new();
        for pid in pids {
            let task_dir = self.root.join(pid.to_string()).join("task");
            let mut tids = match numeric_entries(&task_dir) {
                Ok(tids) => tids,
                Err(e) => {
                    debug!("Skipping pid {}: {}", pid, e);
                    continue;
                }
            };
            tids.sort_unstable();

            for tid in tids {
                if entities.len() >= self.limit {
                    return Ok(Snapshot::from_entities(entities));
                }
                let stat_path = task_dir.join(tid.to_string()).join("stat");
                // comm may hold any bytes except NUL
                let Ok(raw) = fs::read(&stat_path) else {
                    continue;
                };
                let contents = String::from_utf8_lossy(&raw);
                match parse_stat(&contents) {
                    Ok((command, state)) => {
                        entities.push(MonitoredEntity::new(pid, tid, &command, state));
                    }
                    Err(e) => debug!("Skipping {}: {}", stat_path.display(), e),
                }
            }
        }

        Ok(Snapshot::from_entities(entities))
    }
}

/// Directory entries of `dir` whose names are plain integers.
fn numeric_entries(dir: &Path) -> Result<Vec<u32>, ProviderError> {
    let mut ids = Vec::new();
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        if let Some(id) = entry.file_name().to_str().and_then(|n| n.parse().ok()) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Extracts `(comm, state)` from a `stat` line.
///
/// The command sits between the first `(` and the *last* `)` since it may
/// itself contain parentheses or spaces.
fn parse_stat(line: &str) -> Result<(String, TaskState), ProviderError> {
    let open = line
        .find('(')
        .ok_or_else(|| ProviderError::Parse("missing '('".to_string()))?;
    let close = line
        .rfind(')')
        .filter(|&close| close > open)
        .ok_or_else(|| ProviderError::Parse("missing ')'".to_string()))?;

    let command = line[open + 1..close].to_string();
    let state = line[close + 1..]
        .trim_start()
        .chars()
        .next()
        .map(TaskState::from_code)
        .ok_or_else(|| ProviderError::Parse("missing state field".to_string()))?;

    Ok((command, state))
}
