//! Last-in-first-out record of executed commands.

use super::command::Command;
use chrono::{DateTime, Utc};
use std::rc::Rc;
use std::time::Duration;

/// One executed command, as kept on the history stack.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    /// The command that ran
    pub command: Rc<dyn Command>,
    /// When it ran
    pub executed_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn label(&self) -> &'static str {
        self.command.label()
    }
}

/// Stack of executed commands awaiting possible undo.
///
/// Entries are only ever pushed on top or popped from the top.
///
/// # Example
///
/// ```rust
/// use remote_patterns::core::{CommandHistory, Lamp, LightOnCommand, RecordingTrace};
/// use std::rc::Rc;
///
/// let trace = Rc::new(RecordingTrace::new());
/// let lamp = Rc::new(Lamp::new("Porch", trace));
///
/// let mut history = CommandHistory::new();
/// history.push(Rc::new(LightOnCommand::new(lamp)));
///
/// assert_eq!(history.labels(), vec!["light-on"]);
/// assert!(history.pop().is_some());
/// assert!(history.pop().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: Vec<HistoryEntry>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a command that has just been executed.
    pub fn push(&mut self, command: Rc<dyn Command>) {
        self.entries.push(HistoryEntry {
            command,
            executed_at: Utc::now(),
        });
    }

    /// Remove and return the most recently executed command.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// Most recent entry without removing it.
    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in execution order, oldest first.
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(HistoryEntry::label).collect()
    }

    /// Time between the oldest and newest entry.
    ///
    /// Returns `None` when the history is empty.
    pub fn span(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.executed_at
            .signed_duration_since(first.executed_at)
            .to_std()
            .ok()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
