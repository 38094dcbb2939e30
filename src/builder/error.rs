//! Build errors for the remote control builder.

use thiserror::Error;

/// Errors that can occur when building a remote control.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No command bound to the {button} button. Call .{button}(command) before .build()")]
    MissingCommand { button: &'static str },
}
