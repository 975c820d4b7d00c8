use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{BookingError, Result};

/// Runtime settings, resolved in increasing priority: built-in defaults,
/// an optional `roombook.toml` next to the binary, then `ROOMBOOK_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub listen: String,
    /// Path of the JSON document backing the reservation collection.
    pub data_file: String,
}

impl Settings {
    pub fn load() -> Result<Settings> {
        let config = Config::builder()
            .set_default("listen", "0.0.0.0:3000")
            .map_err(|e| BookingError::Config(e.to_string()))?
            .set_default("data_file", "reservations.json")
            .map_err(|e| BookingError::Config(e.to_string()))?
            .add_source(File::with_name("roombook").required(false))
            .add_source(Environment::with_prefix("ROOMBOOK"))
            .build()
            .map_err(|e| BookingError::Config(e.to_string()))?;
        config
            .try_deserialize()
            .map_err(|e| BookingError::Config(e.to_string()))
    }
}
