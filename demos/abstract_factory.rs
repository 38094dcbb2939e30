//! Abstract Factory: Platform Widgets
//!
//! This example demonstrates creating families of related objects.
//!
//! Key concepts:
//! - The application only sees `Button` and `Checkbox`
//! - The factory guarantees both widgets share one platform style
//! - Unknown platforms are reported as errors
//!
//! Run with: cargo run --example abstract_factory [-- windows_os|linux_os]

use remote_patterns::patterns::factory::{get_factory, Application};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let os_type = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "linux_os".to_string());

    let factory = get_factory(&os_type)?;
    let app = Application::new(factory.as_ref());
    for line in app.render_ui() {
        println!("{line}");
    }

    Ok(())
}
