//! Reversible operations bound to a single device.

use super::device::Device;
use std::fmt::Debug;
use std::rc::Rc;

/// A bound action with both a forward and an inverse effect.
///
/// `undo` always performs the opposite switch of `execute` on the same
/// device, so `execute` followed by `undo` leaves the device as it was
/// for the on/off pair modelled here.
///
/// # Example
///
/// ```rust
/// use remote_patterns::core::{Command, Device, Lamp, LightOnCommand, RecordingTrace};
/// use std::rc::Rc;
///
/// let trace = Rc::new(RecordingTrace::new());
/// let lamp = Rc::new(Lamp::new("Study", trace.clone()));
/// let command = LightOnCommand::new(lamp.clone());
///
/// command.execute();
/// assert!(lamp.is_on());
///
/// command.undo();
/// assert!(!lamp.is_on());
/// ```
pub trait Command: Debug {
    fn execute(&self);

    fn undo(&self);

    /// Stable identifier used in logs and history inspection.
    fn label(&self) -> &'static str;
}

/// Turns a light on; undo turns it off.
#[derive(Debug, Clone)]
pub struct LightOnCommand {
    light: Rc<dyn Device>,
}

impl LightOnCommand {
    pub fn new(light: Rc<dyn Device>) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self) {
        self.light.turn_on();
    }

    fn undo(&self) {
        self.light.turn_off();
    }

    fn label(&self) -> &'static str {
        "light-on"
    }
}

/// Turns a light off; undo turns it on.
#[derive(Debug, Clone)]
pub struct LightOffCommand {
    light: Rc<dyn Device>,
}

impl LightOffCommand {
    pub fn new(light: Rc<dyn Device>) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self) {
        self.light.turn_off();
    }

    fn undo(&self) {
        self.light.turn_on();
    }

    fn label(&self) -> &'static str {
        "light-off"
    }
}

/// Turns a fan on; undo turns it off.
#[derive(Debug, Clone)]
pub struct FanOnCommand {
    fan: Rc<dyn Device>,
}

impl FanOnCommand {
    pub fn new(fan: Rc<dyn Device>) -> Self {
        Self { fan }
    }
}

impl Command for FanOnCommand {
    fn execute(&self) {
        self.fan.turn_on();
    }

    fn undo(&self) {
        self.fan.turn_off();
    }

    fn label(&self) -> &'static str {
        "fan-on"
    }
}

/// Turns a fan off; undo turns it on.
#[derive(Debug, Clone)]
pub struct FanOffCommand {
    fan: Rc<dyn Device>,
}

impl FanOffCommand {
    pub fn new(fan: Rc<dyn Device>) -> Self {
        Self { fan }
    }
}

impl Command for FanOffCommand {
    fn execute(&self) {
        self.fan.turn_off();
    }

    fn undo(&self) {
        self.fan.turn_on();
    }

    fn label(&self) -> &'static str {
        "fan-off"
    }
}
