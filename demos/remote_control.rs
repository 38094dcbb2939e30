//! Remote Control with Undo
//!
//! This example demonstrates the command pattern with an undo history.
//!
//! Key concepts:
//! - Commands bound to a single device at construction
//! - An invoker that never talks to devices directly
//! - Last-in-first-out undo, one step at a time
//! - Undo on an empty history is a no-op, not an error
//!
//! Run with: cargo run --example remote_control [-- path/to/home.json]
//! Set RUST_LOG=debug to see the history bookkeeping.

use remote_patterns::core::StdoutTrace;
use remote_patterns::HomeConfig;
use std::rc::Rc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = HomeConfig::load_or_default(std::env::args().nth(1))?;
    let (_lamp, _fan, mut remote) = config.install(Rc::new(StdoutTrace));

    remote.light_on();
    remote.light_off();
    remote.fan_on();
    remote.fan_off();

    remote.undo();
    remote.undo();
    remote.undo();
    remote.undo();
    remote.undo();

    Ok(())
}
