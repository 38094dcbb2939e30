//! Receivers driven by commands.
//!
//! A device has a fixed kind name, a location chosen at construction and a
//! two-valued power state. Devices start switched off.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Observable power state of a device.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum PowerState {
    On,
    #[default]
    Off,
}

impl PowerState {
    /// The other state.
    pub fn opposite(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("ON"),
            Self::Off => f.write_str("OFF"),
        }
    }
}

/// A switchable receiver.
///
/// Switching takes `&self`: devices are shared between the commands bound to
/// them, so implementations keep their power state in a `Cell`.
///
/// Use [`device_kind!`](crate::device_kind) to declare new kinds instead of
/// implementing this by hand.
pub trait Device: Debug {
    /// Kind name, constant for every instance of the kind.
    fn name(&self) -> &str;

    /// Where the device is installed.
    fn location(&self) -> &str;

    /// Current power state.
    fn power(&self) -> PowerState;

    /// Switch on and announce `"<location> <name> is ON"`.
    fn turn_on(&self);

    /// Switch off and announce `"<location> <name> is OFF"`.
    fn turn_off(&self);

    fn is_on(&self) -> bool {
        self.power().is_on()
    }
}

crate::device_kind! {
    /// Lighting device.
    ///
    /// ```rust
    /// use remote_patterns::core::{Device, Lamp, PowerState, RecordingTrace};
    /// use std::rc::Rc;
    ///
    /// let trace = Rc::new(RecordingTrace::new());
    /// let lamp = Lamp::new("Living room", trace.clone());
    ///
    /// lamp.turn_on();
    /// assert_eq!(lamp.power(), PowerState::On);
    /// assert_eq!(trace.last().as_deref(), Some("Living room Lamp is ON"));
    /// ```
    pub struct Lamp => "Lamp";
}

crate::device_kind! {
    /// Fanning device.
    pub struct CeilingFan => "Ceiling Fan";
}
