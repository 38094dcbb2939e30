//! Home layout configuration for the remote control demo.
//!
//! Every field is optional; anything missing falls back to the default
//! layout (lamp in the living room, fan in the bedroom).

use crate::core::{CeilingFan, Lamp, Trace};
use crate::remote::RemoteControl;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, info};

pub mod error;

pub use error::ConfigError;

/// Default lamp location
pub const DEFAULT_LAMP_LOCATION: &str = "Living room";

/// Default fan location
pub const DEFAULT_FAN_LOCATION: &str = "Bedroom";

/// Where each device is installed.
///
/// # Example
///
/// ```rust
/// use remote_patterns::config::HomeConfig;
///
/// let config = HomeConfig::from_json(r#"{ "fan_location": "Attic" }"#).unwrap();
/// assert_eq!(config.lamp_location, "Living room");
/// assert_eq!(config.fan_location, "Attic");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomeConfig {
    pub lamp_location: String,
    pub fan_location: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            lamp_location: DEFAULT_LAMP_LOCATION.to_string(),
            fan_location: DEFAULT_FAN_LOCATION.to_string(),
        }
    }
}

impl HomeConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading home config");
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        info!(
            lamp = %config.lamp_location,
            fan = %config.fan_location,
            "home config loaded"
        );
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Create the configured devices and a remote bound to them.
    pub fn install(&self, trace: Rc<dyn Trace>) -> (Rc<Lamp>, Rc<CeilingFan>, RemoteControl) {
        let lamp = Rc::new(Lamp::new(self.lamp_location.clone(), Rc::clone(&trace)));
        let fan = Rc::new(CeilingFan::new(self.fan_location.clone(), Rc::clone(&trace)));
        let remote = RemoteControl::for_devices(lamp.clone(), fan.clone(), trace);
        (lamp, fan, remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Device, RecordingTrace};
    use std::io::Write;

    #[test]
    fn defaults_match_standard_layout() {
        let config = HomeConfig::default();
        assert_eq!(config.lamp_location, "Living room");
        assert_eq!(config.fan_location, "Bedroom");
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = HomeConfig::from_json("{}").unwrap();
        assert_eq!(config, HomeConfig::default());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let result = HomeConfig::from_json("{ lamp_location: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = HomeConfig::from_json(r#"{ "toaster_location": "Kitchen" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "lamp_location": "Study", "fan_location": "Loft" }}"#
        )
        .unwrap();

        let config = HomeConfig::load(file.path()).unwrap();
        assert_eq!(config.lamp_location, "Study");
        assert_eq!(config.fan_location, "Loft");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = HomeConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn load_or_default_without_path() {
        let config = HomeConfig::load_or_default(None::<&Path>).unwrap();
        assert_eq!(config, HomeConfig::default());
    }

    #[test]
    fn install_places_devices_at_configured_locations() {
        let trace = Rc::new(RecordingTrace::new());
        let config = HomeConfig {
            lamp_location: "Hall".to_string(),
            fan_location: "Porch".to_string(),
        };

        let (lamp, fan, mut remote) = config.install(trace.clone());
        remote.light_on();
        remote.fan_on();

        assert_eq!(lamp.location(), "Hall");
        assert_eq!(fan.location(), "Porch");
        assert_eq!(
            trace.lines(),
            vec!["Hall Lamp is ON", "Porch Ceiling Fan is ON"]
        );
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = HomeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(HomeConfig::from_json(&json).unwrap(), config);
    }
}
