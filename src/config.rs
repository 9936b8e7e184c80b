//! Runtime configuration sourced from the environment.

use std::{env, path::PathBuf};

use tracing::warn;

/// Serial device the panel is attached to when not overridden.
const DEFAULT_SERIAL_PORT: &str = "/dev/ttyACM0";
/// Link speed expected by the stock panel firmware.
const DEFAULT_BAUD_RATE: u32 = 9600;
/// SQLite database file created next to the binary.
const DEFAULT_DATABASE_PATH: &str = "quiz.db";
/// TCP port the HTTP server binds when not overridden.
const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Path of the serial device for the button/lamp panel.
    pub serial_port: String,
    /// Baud rate for the panel link.
    pub baud_rate: u32,
    /// Location of the SQLite database file.
    pub database_path: PathBuf,
    /// TCP port the HTTP server listens on.
    pub port: u16,
}

impl AppConfig {
    /// Assemble the configuration from environment variables, falling back
    /// to built-in defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            serial_port: env::var("SERIAL_PORT").unwrap_or_else(|_| DEFAULT_SERIAL_PORT.into()),
            baud_rate: parsed_env("SERIAL_BAUD", DEFAULT_BAUD_RATE),
            database_path: env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH)),
            port: env::var("PORT")
                .or_else(|_| env::var("SERVER_PORT"))
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Parse a numeric environment variable, warning when the value is garbage.
fn parsed_env<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!(name, value = %value, "unparsable value; using default");
            default
        }),
        Err(_) => default,
    }
}
