//! Rolling history of generated passwords

use std::collections::VecDeque;

/// Number of passwords kept in the history
pub const HISTORY_CAPACITY: usize = 5;

/// Most recent passwords, oldest first.
///
/// Lives only for the current session and is never written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: VecDeque<String>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Append a password, evicting the oldest once over capacity
    pub fn record<S: Into<String>>(&mut self, password: S) {
        self.entries.push_back(password.into());
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Most recently recorded entry
    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Entries joined one per line, as shown on screen
    pub fn display_text(&self) -> String {
        self.to_vec().join("\n")
    }
}

/// Record `password` into `log` and hand the log back
pub fn record_history(mut log: HistoryLog, password: &str) -> HistoryLog {
    log.record(password);
    log
}
