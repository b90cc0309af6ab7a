//! # Session Statistics
//!
//! Passive counters owned by the event loop. The debug panel reads them
//! every frame and the shutdown summary prints them once.

use std::fmt;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Resize drains performed (coalesced notifications count once).
    pub resize_count: u64,
    pub timeout_count: u64,
    pub input_count: u64,
    /// Waits cut short by a resize notification.
    pub interrupt_count: u64,
    pub provider_fault_count: u64,
    /// Code of the most recent fault, `0` when nothing has gone wrong.
    pub last_error_code: i32,
    pub last_error_message: Option<String>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_resize(&mut self) {
        self.resize_count += 1;
    }

    pub fn record_timeout(&mut self) {
        self.timeout_count += 1;
    }

    pub fn record_input(&mut self) {
        self.input_count += 1;
    }

    pub fn record_interrupt(&mut self) {
        self.interrupt_count += 1;
    }

    pub fn record_provider_fault(&mut self, code: i32, message: impl Into<String>) {
        self.provider_fault_count += 1;
        self.record_error(code, message);
    }

    /// Remembers a fault. A code of `0` would read as "no error", so it is
    /// stored as `-1` instead.
    pub fn record_error(&mut self, code: i32, message: impl Into<String>) {
        self.last_error_code = if code == 0 { -1 } else { code };
        self.last_error_message = Some(message.into());
    }

    pub fn has_error(&self) -> bool {
        self.last_error_code != 0
    }

    /// One-line description of the last error for the debug panel.
    pub fn last_error_description(&self) -> String {
        match (&self.last_error_message, self.has_error()) {
            (Some(message), true) => format!("{} ({})", self.last_error_code, message),
            _ => "0 (none)".to_string(),
        }
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Session summary:")?;
        writeln!(f, "  resizes:    {}", self.resize_count)?;
        writeln!(f, "  timeouts:   {}", self.timeout_count)?;
        writeln!(f, "  inputs:     {}", self.input_count)?;
        write!(f, "  interrupts: {}", self.interrupt_count)?;
        if self.provider_fault_count > 0 {
            write!(f, "\n  provider faults: {}", self.provider_fault_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = SessionStats::new();
        assert_eq!(stats.resize_count, 0);
        assert_eq!(stats.interrupt_count, 0);
        assert!(!stats.has_error());
        assert_eq!(stats.last_error_description(), "0 (none)");
    }

    #[test]
    fn test_counters_increment() {
        let mut stats = SessionStats::new();
        stats.record_resize();
        stats.record_timeout();
        stats.record_timeout();
        stats.record_input();
        stats.record_interrupt();
        assert_eq!(
            (stats.resize_count, stats.timeout_count, stats.input_count, stats.interrupt_count),
            (1, 2, 1, 1)
        );
    }

    #[test]
    fn test_zero_code_still_reads_as_error() {
        let mut stats = SessionStats::new();
        stats.record_error(0, "mystery");
        assert!(stats.has_error());
        assert_eq!(stats.last_error_code, -1);
    }

    #[test]
    fn test_provider_fault_sets_last_error() {
        let mut stats = SessionStats::new();
        stats.record_provider_fault(2, "No such file or directory");
        assert_eq!(stats.provider_fault_count, 1);
        assert_eq!(stats.last_error_description(), "2 (No such file or directory)");
    }

    #[test]
    fn test_summary_lists_every_counter() {
        let mut stats = SessionStats::new();
        stats.record_resize();
        stats.record_timeout();
        let text = stats.to_string();
        assert!(text.starts_with("Session summary:"));
        assert!(text.contains("resizes:    1"));
        assert!(text.contains("timeouts:   1"));
        assert!(text.contains("inputs:     0"));
        assert!(text.contains("interrupts: 0"));
        assert!(!text.contains("provider faults"));
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let mut stats = SessionStats::new();
        stats.record_input();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["input_count"], 1);
        assert_eq!(json["last_error_code"], 0);
        assert!(json["last_error_message"].is_null());
    }
}
