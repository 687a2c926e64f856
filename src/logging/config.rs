//! Process-wide logger configuration.
//!
//! [`configure_logger`] installs the `env_logger` backend once and sets the
//! minimum level. Calling it again only re-applies the level. Level labels
//! (`INFO`, `DEBUG`, `ERROR`, `FATAL`, `WARN`, `PANIC`) and the `stackTrace`
//! field name are fixed; see [`Level::label`] and [`fields::STACK_TRACE`].

use std::io::Write;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use super::fields;
use super::level::Level;
use super::record::LogRecord;
use super::sink::SINK_TARGET;

pub const ENV_DEBUG: &str = "CORRELOG_DEBUG";
pub const ENV_TARGET: &str = "CORRELOG_TARGET";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected true/false")]
    InvalidBool { key: &'static str, value: String },

    #[error("invalid log target {0:?}: expected stderr or stdout")]
    InvalidTarget(String),
}

/// Where the backend writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    #[default]
    Stderr,
    Stdout,
}

impl FromStr for LogTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" => Ok(LogTarget::Stderr),
            "stdout" => Ok(LogTarget::Stdout),
            _ => Err(ConfigError::InvalidTarget(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Emit `DEBUG` records; otherwise `INFO` and above.
    pub debug: bool,
    /// Only honoured by the first configuration call.
    pub target: LogTarget,
}

impl LoggerConfig {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            ..Self::default()
        }
    }

    pub fn min_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    /// Read `CORRELOG_DEBUG` and `CORRELOG_TARGET`. Unset variables keep defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_DEBUG) {
            config.debug = parse_bool(ENV_DEBUG, &value)?;
        }
        if let Some(value) = lookup(ENV_TARGET) {
            config.target = value.parse()?;
        }

        Ok(config)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

/// Set the process-wide minimum level: `DEBUG` when `debug_enabled`, else `INFO`.
///
/// Call once at startup, before any emission. Repeated calls are harmless.
pub fn configure_logger(debug_enabled: bool) {
    configure_logger_with(&LoggerConfig::new(debug_enabled));
}

pub fn configure_logger_with(config: &LoggerConfig) {
    let target = match config.target {
        LogTarget::Stderr => env_logger::Target::Stderr,
        LogTarget::Stdout => env_logger::Target::Stdout,
    };

    // The backend passes everything; `log::max_level` is the only filter.
    let installed = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .target(target)
        .format(write_line)
        .try_init()
        .is_ok();

    log::set_max_level(config.min_level());

    log::debug!(
        "LOGGER_CONFIGURED debug={} target={:?} installed={} stack_field={}",
        config.debug,
        config.target,
        installed,
        fields::STACK_TRACE
    );
}

/// Load [`LoggerConfig`] from the environment and apply it.
pub fn configure_from_env() -> Result<LoggerConfig, ConfigError> {
    let config = LoggerConfig::from_env()?;
    configure_logger_with(&config);
    Ok(config)
}

/// Records from this crate's sinks are already JSON lines; anything logged
/// through plain `log` macros is wrapped into the same shape.
fn write_line(
    buf: &mut env_logger::fmt::Formatter,
    record: &log::Record<'_>,
) -> std::io::Result<()> {
    if record.target() == SINK_TARGET {
        writeln!(buf, "{}", record.args())
    } else {
        let wrapped = LogRecord::new(Level::from(record.level()), record.args().to_string());
        writeln!(buf, "{}", wrapped.to_json_line())
    }
}
