use std::fmt;
use std::ops::Range;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Upper bound on the number of entities a single snapshot may hold.
pub const MAX_ENTITIES: usize = 1000;

/// Widest label (in terminal columns) kept for a task's command name.
pub const LABEL_MAX_WIDTH: usize = 31;

/// Scheduler state of a task, reduced to the handful the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskState {
    Running,
    Sleeping,
    DiskWait,
    Zombie,
    Stopped,
    Unknown,
}

impl TaskState {
    /// Maps the single-character state code used by `/proc/<pid>/stat`.
    ///
    /// Idle kernel threads (`I`) read as sleeping and tracing stops (`t`)
    /// as stopped. Anything unrecognized becomes `Unknown`.
    pub fn from_code(code: char) -> Self {
        match code {
            'R' => TaskState::Running,
            'S' | 'I' => TaskState::Sleeping,
            'D' => TaskState::DiskWait,
            'Z' => TaskState::Zombie,
            'T' | 't' => TaskState::Stopped,
            _ => TaskState::Unknown,
        }
    }

    /// Human-readable name shown in the STATE column.
    pub fn label(&self) -> &'static str {
        match self {
            TaskState::Running => "Running",
            TaskState::Sleeping => "Sleeping",
            TaskState::DiskWait => "Disk sleep",
            TaskState::Zombie => "Zombie",
            TaskState::Stopped => "Stopped",
            TaskState::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A command name bounded to [`LABEL_MAX_WIDTH`] display columns.
///
/// Longer names are cut and end in `…` so the reader can tell. Width is
/// measured in columns, not chars, so wide glyphs still leave room for
/// the ellipsis in the COMMAND column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    pub fn new(raw: &str) -> Self {
        if raw.width() <= LABEL_MAX_WIDTH {
            return Label(raw.to_string());
        }
        let budget = LABEL_MAX_WIDTH - '…'.width().unwrap_or(1);
        let mut cut = String::new();
        let mut used = 0;
        for c in raw.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            cut.push(c);
            used += w;
        }
        cut.push('…');
        Label(cut)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One process or thread as reported by a provider.
///
/// Fields are private; the dashboard reads them but never changes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoredEntity {
    primary_id: u32,
    sub_id: u32,
    label: Label,
    state: TaskState,
}

impl MonitoredEntity {
    pub fn new(primary_id: u32, sub_id: u32, label: &str, state: TaskState) -> Self {
        Self {
            primary_id,
            sub_id,
            label: Label::new(label),
            state,
        }
    }

    /// Process id.
    pub fn primary_id(&self) -> u32 {
        self.primary_id
    }

    /// Thread id.
    pub fn sub_id(&self) -> u32 {
        self.sub_id
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn state(&self) -> TaskState {
        self.state
    }
}

/// An ordered, size-bounded list of entities fetched for one render cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entities: Vec<MonitoredEntity>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot, dropping anything past [`MAX_ENTITIES`].
    pub fn from_entities(mut entities: Vec<MonitoredEntity>) -> Self {
        entities.truncate(MAX_ENTITIES);
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MonitoredEntity> {
        self.entities.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonitoredEntity> {
        self.entities.iter()
    }

    /// The entities inside `range`, clipped to the snapshot bounds.
    pub fn slice(&self, range: Range<usize>) -> &[MonitoredEntity] {
        let end = range.end.min(self.entities.len());
        let start = range.start.min(end);
        &self.entities[start..end]
    }
}
