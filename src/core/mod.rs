//! Devices, reversible commands and the undo history.
//!
//! This module contains the building blocks of the command pattern:
//! - Receivers via the `Device` trait (`Lamp`, `CeilingFan`)
//! - Reversible operations via the `Command` trait
//! - The last-in-first-out `CommandHistory`
//! - `Trace` sinks for the user-visible output

mod command;
mod device;
mod history;
mod trace;

pub use command::{Command, FanOffCommand, FanOnCommand, LightOffCommand, LightOnCommand};
pub use device::{CeilingFan, Device, Lamp, PowerState};
pub use history::{CommandHistory, HistoryEntry};
pub use trace::{RecordingTrace, StdoutTrace, Trace};
