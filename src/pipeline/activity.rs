//! Activity log
//!
//! Bounded, newest-first record of what the pipeline did. Overflow silently drops the
//! oldest entry.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};

/// Number of entries kept
pub const ACTIVITY_LOG_CAPACITY: usize = 10;

/// Kind of activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Success,
    Error,
    Info,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Success => write!(f, "success"),
            ActivityKind::Error => write!(f, "error"),
            ActivityKind::Info => write!(f, "info"),
        }
    }
}

/// Single activity entry
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub message: String,
    pub time: DateTime<Local>,
    pub kind: ActivityKind,
}

impl ActivityEntry {
    /// Wall-clock time as shown in the log (`HH:MM:SS`)
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

/// Newest-first activity log
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    /// Create an empty log holding at most [`ACTIVITY_LOG_CAPACITY`] entries
    pub fn new() -> Self {
        Self::with_capacity(ACTIVITY_LOG_CAPACITY)
    }

    /// Create an empty log with a custom bound
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record an entry stamped with the current local time
    pub fn push(&mut self, message: impl Into<String>, kind: ActivityKind) {
        self.push_entry(ActivityEntry {
            message: message.into(),
            time: Local::now(),
            kind,
        });
    }

    /// Record a prepared entry
    pub fn push_entry(&mut self, entry: ActivityEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// Entries, newest first, as an owned list
    pub fn to_vec(&self) -> Vec<ActivityEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}
