//! The invoker side of the command pattern.
//!
//! [`RemoteControl`] owns four bound commands and the history of what it
//! executed. It never talks to devices directly.

mod control;

pub use control::{RemoteControl, UndoOutcome, NOTHING_TO_UNDO, UNDO_NOTICE};
