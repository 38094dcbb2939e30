//! Output sinks for the user-visible trace.
//!
//! Devices and the remote control never print directly. Every line they
//! produce goes through a [`Trace`], so demos can write to stdout while tests
//! capture the exact transcript.

use std::cell::RefCell;
use std::fmt::Debug;

/// Receiver for trace lines, one call per line.
///
/// # Example
///
/// ```rust
/// use remote_patterns::core::{RecordingTrace, Trace};
///
/// let trace = RecordingTrace::new();
/// trace.emit("Living room Lamp is ON".to_string());
/// assert_eq!(trace.lines(), vec!["Living room Lamp is ON"]);
/// ```
pub trait Trace: Debug {
    /// Emit a single line, without trailing newline.
    fn emit(&self, line: String);
}

/// Trace that prints each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutTrace;

impl Trace for StdoutTrace {
    fn emit(&self, line: String) {
        println!("{line}");
    }
}

/// Trace that keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingTrace {
    lines: RefCell<Vec<String>>,
}

impl RecordingTrace {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Most recent line, if any.
    pub fn last(&self) -> Option<String> {
        self.lines.borrow().last().cloned()
    }

    /// Drop every recorded line.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Trace for RecordingTrace {
    fn emit(&self, line: String) {
        self.lines.borrow_mut().push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_keeps_lines_in_order() {
        let trace = RecordingTrace::new();
        trace.emit("first".to_string());
        trace.emit("second".to_string());

        assert_eq!(trace.lines(), vec!["first", "second"]);
        assert_eq!(trace.last().as_deref(), Some("second"));
    }

    #[test]
    fn clear_empties_recorder() {
        let trace = RecordingTrace::new();
        trace.emit("line".to_string());
        trace.clear();

        assert!(trace.lines().is_empty());
        assert!(trace.last().is_none());
    }
}
