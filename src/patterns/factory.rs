//! Abstract factory: families of platform-styled widgets.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors from platform lookup
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Unknown OS type: {0}")]
    UnknownPlatform(String),
}

pub trait Button {
    fn paint(&self) -> String;
}

pub trait Checkbox {
    fn render(&self) -> String;
}

/// Creates one widget family. Widgets from the same factory share a style.
pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

struct WindowsOsButton;

impl Button for WindowsOsButton {
    fn paint(&self) -> String {
        "Rendering a button in Windows OS style.".to_string()
    }
}

struct WindowsOsCheckbox;

impl Checkbox for WindowsOsCheckbox {
    fn render(&self) -> String {
        "Rendering a checkbox in Windows OS style.".to_string()
    }
}

struct LinuxOsButton;

impl Button for LinuxOsButton {
    fn paint(&self) -> String {
        "Rendering a button in Linux OS style.".to_string()
    }
}

struct LinuxOsCheckbox;

impl Checkbox for LinuxOsCheckbox {
    fn render(&self) -> String {
        "Rendering a checkbox in Linux OS style.".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsOsFactory;

impl GuiFactory for WindowsOsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsOsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsOsCheckbox)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LinuxOsFactory;

impl GuiFactory for LinuxOsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LinuxOsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(LinuxOsCheckbox)
    }
}

/// Supported widget platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    WindowsOs,
    LinuxOs,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WindowsOs => "windows_os",
            Self::LinuxOs => "linux_os",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "windows_os" => Ok(Self::WindowsOs),
            "linux_os" => Ok(Self::LinuxOs),
            other => Err(FactoryError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Factory for the given platform.
pub fn factory_for(platform: Platform) -> Box<dyn GuiFactory> {
    debug!(%platform, "selecting widget factory");
    match platform {
        Platform::WindowsOs => Box::new(WindowsOsFactory),
        Platform::LinuxOs => Box::new(LinuxOsFactory),
    }
}

/// Look up a factory by OS identifier (`"windows_os"` or `"linux_os"`).
///
/// # Example
///
/// ```rust
/// use remote_patterns::patterns::factory::{get_factory, Application, FactoryError};
///
/// let app = Application::new(get_factory("linux_os").unwrap().as_ref());
/// assert_eq!(app.render_ui()[0], "Rendering a button in Linux OS style.");
///
/// assert!(matches!(get_factory("beos"), Err(FactoryError::UnknownPlatform(_))));
/// ```
pub fn get_factory(os_type: &str) -> Result<Box<dyn GuiFactory>, FactoryError> {
    Ok(factory_for(os_type.parse()?))
}

/// Client that only knows the abstract widget interfaces.
pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        Self {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    /// Button line first, then checkbox line.
    pub fn render_ui(&self) -> Vec<String> {
        vec![self.button.paint(), self.checkbox.render()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_known_identifiers() {
        assert_eq!("windows_os".parse::<Platform>(), Ok(Platform::WindowsOs));
        assert_eq!("linux_os".parse::<Platform>(), Ok(Platform::LinuxOs));
        assert_eq!(Platform::LinuxOs.to_string(), "linux_os");
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = "macos".parse::<Platform>().unwrap_err();
        assert_eq!(err, FactoryError::UnknownPlatform("macos".to_string()));
        assert_eq!(err.to_string(), "Unknown OS type: macos");
    }

    #[test]
    fn windows_family_is_consistent() {
        let app = Application::new(factory_for(Platform::WindowsOs).as_ref());
        assert_eq!(
            app.render_ui(),
            vec![
                "Rendering a button in Windows OS style.",
                "Rendering a checkbox in Windows OS style.",
            ]
        );
    }

    #[test]
    fn linux_family_is_consistent() {
        let factory = get_factory("linux_os").unwrap();
        let app = Application::new(factory.as_ref());
        assert_eq!(
            app.render_ui(),
            vec![
                "Rendering a button in Linux OS style.",
                "Rendering a checkbox in Linux OS style.",
            ]
        );
    }
}
