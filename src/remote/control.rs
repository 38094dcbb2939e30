//! Remote control that executes commands and undoes them in reverse order.

use crate::builder::RemoteControlBuilder;
use crate::core::{
    Command, CommandHistory, Device, FanOffCommand, FanOnCommand, LightOffCommand,
    LightOnCommand, Trace,
};
use std::rc::Rc;
use tracing::{debug, trace};

/// Line emitted before a command is reverted.
pub const UNDO_NOTICE: &str = "Undoing last command...";

/// Line emitted when undo is requested on an empty history.
pub const NOTHING_TO_UNDO: &str = "No commands to undo.";

/// What a call to [`RemoteControl::undo`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The most recent command was reverted
    Undone { label: &'static str },

    /// History was empty; nothing changed
    NothingToUndo,
}

/// Invoker with four pre-bound buttons and an undo history.
pub struct RemoteControl {
    light_on: Rc<dyn Command>,
    light_off: Rc<dyn Command>,
    fan_on: Rc<dyn Command>,
    fan_off: Rc<dyn Command>,
    history: CommandHistory,
    trace: Rc<dyn Trace>,
}

impl RemoteControl {
    /// Create a remote from four bound commands. History starts empty.
    pub fn new(
        light_on: Rc<dyn Command>,
        light_off: Rc<dyn Command>,
        fan_on: Rc<dyn Command>,
        fan_off: Rc<dyn Command>,
        trace: Rc<dyn Trace>,
    ) -> Self {
        Self {
            light_on,
            light_off,
            fan_on,
            fan_off,
            history: CommandHistory::new(),
            trace,
        }
    }

    /// Bind the standard light and fan commands to a lamp and a fan.
    ///
    /// # Example
    ///
    /// ```rust
    /// use remote_patterns::core::{CeilingFan, Device, Lamp, RecordingTrace};
    /// use remote_patterns::remote::{RemoteControl, UndoOutcome};
    /// use std::rc::Rc;
    ///
    /// let trace = Rc::new(RecordingTrace::new());
    /// let lamp = Rc::new(Lamp::new("Living room", trace.clone()));
    /// let fan = Rc::new(CeilingFan::new("Bedroom", trace.clone()));
    /// let mut remote = RemoteControl::for_devices(lamp.clone(), fan, trace.clone());
    ///
    /// remote.light_on();
    /// assert!(lamp.is_on());
    ///
    /// assert_eq!(remote.undo(), UndoOutcome::Undone { label: "light-on" });
    /// assert!(!lamp.is_on());
    /// assert_eq!(remote.undo(), UndoOutcome::NothingToUndo);
    /// ```
    pub fn for_devices(lamp: Rc<dyn Device>, fan: Rc<dyn Device>, trace: Rc<dyn Trace>) -> Self {
        Self::new(
            Rc::new(LightOnCommand::new(Rc::clone(&lamp))),
            Rc::new(LightOffCommand::new(lamp)),
            Rc::new(FanOnCommand::new(Rc::clone(&fan))),
            Rc::new(FanOffCommand::new(fan)),
            trace,
        )
    }

    /// Start a builder for binding buttons one at a time.
    pub fn builder() -> RemoteControlBuilder {
        RemoteControlBuilder::new()
    }

    pub fn light_on(&mut self) {
        let command = Rc::clone(&self.light_on);
        self.press(command);
    }

    pub fn light_off(&mut self) {
        let command = Rc::clone(&self.light_off);
        self.press(command);
    }

    pub fn fan_on(&mut self) {
        let command = Rc::clone(&self.fan_on);
        self.press(command);
    }

    pub fn fan_off(&mut self) {
        let command = Rc::clone(&self.fan_off);
        self.press(command);
    }

    /// Revert the most recently executed command.
    ///
    /// On an empty history this only emits the no-op notice.
    pub fn undo(&mut self) -> UndoOutcome {
        let Some(entry) = self.history.pop() else {
            debug!("undo requested with empty history");
            self.trace.emit(NOTHING_TO_UNDO.to_string());
            return UndoOutcome::NothingToUndo;
        };

        let label = entry.label();
        self.trace.emit(UNDO_NOTICE.to_string());
        entry.command.undo();
        debug!(command = label, depth = self.history.len(), "command undone");
        UndoOutcome::Undone { label }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    fn press(&mut self, command: Rc<dyn Command>) {
        trace!(command = command.label(), "executing");
        command.execute();
        self.history.push(command);
        debug!(depth = self.history.len(), "command recorded");
    }
}

impl std::fmt::Debug for RemoteControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteControl")
            .field("history", &self.history.labels())
            .finish_non_exhaustive()
    }
}
