//! HUD action log

use std::collections::VecDeque;

use crate::core::types::Tick;

/// Maximum log entries to keep
const MAX_LOG_ENTRIES: usize = 50;

/// An entry in the HUD action log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub tick: Tick,
    pub message: String,
    pub category: LogCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Purchase,
    Demolition,
    Care,
    System,
}

/// Bounded ring buffer of messages the HUD scrolls through
#[derive(Debug, Default)]
pub struct HudLog {
    entries: VecDeque<LogEntry>,
}

impl HudLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tick: Tick, category: LogCategory, message: impl Into<String>) {
        if self.entries.len() >= MAX_LOG_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            tick,
            message: message.into(),
            category,
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
