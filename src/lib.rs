//! Remote Patterns: classic design patterns, centred on an undoable remote control
//!
//! The centrepiece is the command pattern. A [`RemoteControl`] holds four
//! commands bound to a lamp and a ceiling fan, runs them on request, and keeps
//! a last-in-first-out history so the most recent command can be undone.
//! The remaining patterns of the collection live under [`patterns`].
//!
//! # Core Concepts
//!
//! - **Device**: a located receiver with an ON/OFF power state
//! - **Command**: a reversible operation bound to exactly one device
//! - **History**: the stack of executed commands awaiting undo
//! - **Trace**: where the user-visible lines go
//!
//! # Example
//!
//! ```rust
//! use remote_patterns::core::{CeilingFan, Device, Lamp, RecordingTrace};
//! use remote_patterns::remote::{RemoteControl, UndoOutcome};
//! use std::rc::Rc;
//!
//! let trace = Rc::new(RecordingTrace::new());
//! let lamp = Rc::new(Lamp::new("Living room", trace.clone()));
//! let fan = Rc::new(CeilingFan::new("Bedroom", trace.clone()));
//! let mut remote = RemoteControl::for_devices(lamp.clone(), fan.clone(), trace.clone());
//!
//! remote.light_on();
//! remote.fan_on();
//! remote.undo();
//! remote.undo();
//! assert_eq!(remote.undo(), UndoOutcome::NothingToUndo);
//!
//! assert!(!lamp.is_on() && !fan.is_on());
//! assert_eq!(
//!     trace.lines(),
//!     vec![
//!         "Living room Lamp is ON",
//!         "Bedroom Ceiling Fan is ON",
//!         "Undoing last command...",
//!         "Bedroom Ceiling Fan is OFF",
//!         "Undoing last command...",
//!         "Living room Lamp is OFF",
//!         "No commands to undo.",
//!     ]
//! );
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod patterns;
pub mod remote;

// Re-export commonly used types
pub use builder::{BuildError, RemoteControlBuilder};
pub use config::{ConfigError, HomeConfig};
pub use crate::core::{Command, CommandHistory, Device, PowerState, Trace};
pub use remote::{RemoteControl, UndoOutcome};
