//! Builder for constructing remote controls.

use crate::builder::error::BuildError;
use crate::core::{Command, StdoutTrace, Trace};
use crate::remote::RemoteControl;
use std::rc::Rc;

/// Builder for binding remote control buttons with a fluent API.
#[derive(Default)]
pub struct RemoteControlBuilder {
    light_on: Option<Rc<dyn Command>>,
    light_off: Option<Rc<dyn Command>>,
    fan_on: Option<Rc<dyn Command>>,
    fan_off: Option<Rc<dyn Command>>,
    trace: Option<Rc<dyn Trace>>,
}

impl RemoteControlBuilder {
    /// Create a new builder with no buttons bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the light-on button (required).
    pub fn light_on(mut self, command: Rc<dyn Command>) -> Self {
        self.light_on = Some(command);
        self
    }

    /// Bind the light-off button (required).
    pub fn light_off(mut self, command: Rc<dyn Command>) -> Self {
        self.light_off = Some(command);
        self
    }

    /// Bind the fan-on button (required).
    pub fn fan_on(mut self, command: Rc<dyn Command>) -> Self {
        self.fan_on = Some(command);
        self
    }

    /// Bind the fan-off button (required).
    pub fn fan_off(mut self, command: Rc<dyn Command>) -> Self {
        self.fan_off = Some(command);
        self
    }

    /// Where undo notices go. Defaults to stdout.
    pub fn trace(mut self, trace: Rc<dyn Trace>) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Build the remote control.
    /// Returns an error naming the first unbound button.
    pub fn build(self) -> Result<RemoteControl, BuildError> {
        let light_on = self
            .light_on
            .ok_or(BuildError::MissingCommand { button: "light_on" })?;
        let light_off = self
            .light_off
            .ok_or(BuildError::MissingCommand { button: "light_off" })?;
        let fan_on = self
            .fan_on
            .ok_or(BuildError::MissingCommand { button: "fan_on" })?;
        let fan_off = self
            .fan_off
            .ok_or(BuildError::MissingCommand { button: "fan_off" })?;
        let trace: Rc<dyn Trace> = match self.trace {
            Some(trace) => trace,
            None => Rc::new(StdoutTrace),
        };

        Ok(RemoteControl::new(light_on, light_off, fan_on, fan_off, trace))
    }
}
