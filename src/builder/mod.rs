//! Builder API for ergonomic remote control construction.
//!
//! This module provides a fluent builder for binding commands to buttons and
//! the [`device_kind!`](crate::device_kind) macro for declaring devices with
//! minimal boilerplate.

pub mod error;
pub mod macros;
pub mod remote;

pub use error::BuildError;
pub use remote::RemoteControlBuilder;

use crate::core::{Device, Trace};
use crate::remote::RemoteControl;
use std::rc::Rc;

/// Build a remote with the standard light and fan commands.
///
/// Equivalent to [`RemoteControl::for_devices`], kept here next to the builder
/// for callers that start from devices rather than commands.
///
/// # Example
///
/// ```
/// use remote_patterns::builder::standard_remote;
/// use remote_patterns::core::{CeilingFan, Device, Lamp, RecordingTrace};
/// use std::rc::Rc;
///
/// let trace = Rc::new(RecordingTrace::new());
/// let lamp = Rc::new(Lamp::new("Den", trace.clone()));
/// let fan = Rc::new(CeilingFan::new("Den", trace.clone()));
///
/// let mut remote = standard_remote(lamp.clone(), fan, trace);
/// remote.light_on();
/// assert!(lamp.is_on());
/// ```
pub fn standard_remote(
    lamp: Rc<dyn Device>,
    fan: Rc<dyn Device>,
    trace: Rc<dyn Trace>,
) -> RemoteControl {
    RemoteControl::for_devices(lamp, fan, trace)
}
