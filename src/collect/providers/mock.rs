//! Deterministic task generator used when no real source is wanted.

use crate::collect::provider::{ProviderError, TaskProvider};
use crate::collect::types::{MAX_ENTITIES, MonitoredEntity, Snapshot, TaskState};

const MOCK_COMMANDS: [&str; 20] = [
    "systemd",
    "kthreadd",
    "bash",
    "vim",
    "firefox",
    "chrome",
    "docker",
    "nginx",
    "postgres",
    "python3",
    "gcc",
    "make",
    "ssh",
    "sshd",
    "cron",
    "dbus-daemon",
    "NetworkManager",
    "pulseaudio",
    "Xorg",
    "gnome-shell",
];

// One in ten tasks runs, one in ten waits on disk.
const MOCK_STATES: [char; 10] = ['R', 'S', 'S', 'S', 'D', 'S', 'S', 'S', 'S', 'S'];

const MOCK_PROCESSES: u32 = 50;

/// Fifty fake processes with one to four threads each.
pub struct MockTaskProvider {
    limit: usize,
}

impl MockTaskProvider {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.min(MAX_ENTITIES),
        }
    }
}

impl Default for MockTaskProvider {
    fn default() -> Self {
        Self::new(MAX_ENTITIES)
    }
}

impl TaskProvider for MockTaskProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn list(&mut self) -> Result<Snapshot, ProviderError> {
        let mut entities = Vec::new();

        'processes: for i in 0..MOCK_PROCESSES {
            let pid = 100 + i * 10;
            let threads = 1 + (i % 4);
            let command = MOCK_COMMANDS[i as usize % MOCK_COMMANDS.len()];

            for t in 0..threads {
                if entities.len() >= self.limit {
                    break 'processes;
                }
                let state = TaskState::from_code(MOCK_STATES[entities.len() % MOCK_STATES.len()]);
                entities.push(MonitoredEntity::new(pid, pid + t, command, state));
            }
        }

        Ok(Snapshot::from_entities(entities))
    }
}
