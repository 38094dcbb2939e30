//! Macros for declaring device kinds.

/// Declare a device kind with a fixed display name.
///
/// Generates the struct, a `NAME` constant, a `new(location, trace)`
/// constructor and the [`Device`](crate::core::Device) implementation.
/// Instances start switched off.
///
/// # Example
///
/// ```
/// use remote_patterns::core::{Device, RecordingTrace};
/// use remote_patterns::device_kind;
/// use std::rc::Rc;
///
/// device_kind! {
///     pub struct Heater => "Heater";
/// }
///
/// let trace = Rc::new(RecordingTrace::new());
/// let heater = Heater::new("Garage", trace.clone());
/// heater.turn_on();
///
/// assert!(heater.is_on());
/// assert_eq!(trace.last().as_deref(), Some("Garage Heater is ON"));
/// ```
#[macro_export]
macro_rules! device_kind {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $display:literal;
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $name {
            location: ::std::string::String,
            power: ::std::cell::Cell<$crate::core::PowerState>,
            trace: ::std::rc::Rc<dyn $crate::core::Trace>,
        }

        impl $name {
            /// Kind name shared by every instance.
            pub const NAME: &'static str = $display;

            /// Create a switched-off device at `location`, reporting to `trace`.
            pub fn new(
                location: impl ::std::convert::Into<::std::string::String>,
                trace: ::std::rc::Rc<dyn $crate::core::Trace>,
            ) -> Self {
                Self {
                    location: location.into(),
                    power: ::std::cell::Cell::new($crate::core::PowerState::Off),
                    trace,
                }
            }

            fn switch(&self, state: $crate::core::PowerState) {
                self.power.set(state);
                self.trace
                    .emit(::std::format!("{} {} is {}", self.location, Self::NAME, state));
            }
        }

        impl $crate::core::Device for $name {
            fn name(&self) -> &str {
                Self::NAME
            }

            fn location(&self) -> &str {
                &self.location
            }

            fn power(&self) -> $crate::core::PowerState {
                self.power.get()
            }

            fn turn_on(&self) {
                self.switch($crate::core::PowerState::On);
            }

            fn turn_off(&self) {
                self.switch($crate::core::PowerState::Off);
            }
        }
    };
}
