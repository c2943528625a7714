// SPDX-License-Identifier: MIT

//! Switch configuration
//!
//! Tracing can be configured from YAML or from the environment:
//! - `SWITCH_TRACE` - `1/0`, `true/false`, `yes/no`, `on/off`
//! - `SWITCH_TRACE_TARGET` - `stdout` or `log`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::switch::{LogSink, StdoutSink, TraceSink};

pub const TRACE_ENV: &str = "SWITCH_TRACE";
pub const TRACE_TARGET_ENV: &str = "SWITCH_TRACE_TARGET";

/// Where trace lines go
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceTarget {
    /// Print to stdout (default)
    #[default]
    Stdout,
    /// Emit through the `log` facade
    Log,
}

impl TraceTarget {
    /// Build the sink for this target
    pub fn sink(&self) -> Box<dyn TraceSink> {
        match self {
            TraceTarget::Stdout => Box::new(StdoutSink),
            TraceTarget::Log => Box::new(LogSink),
        }
    }
}

/// Configuration applied to a `Switch` at construction
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct SwitchConfig {
    /// Emit registration events
    #[serde(default)]
    pub trace: bool,
    /// Destination of registration events
    #[serde(default)]
    pub trace_target: TraceTarget,
}

impl SwitchConfig {
    /// Parse a configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SwitchConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Read the configuration from `SWITCH_TRACE` / `SWITCH_TRACE_TARGET`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(TRACE_ENV) {
            config.trace = parse_flag(&value).ok_or_else(|| ConfigError::InvalidEnv {
                key: TRACE_ENV.to_string(),
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(TRACE_TARGET_ENV) {
            config.trace_target = match value.trim().to_ascii_lowercase().as_str() {
                "stdout" => TraceTarget::Stdout,
                "log" => TraceTarget::Log,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        key: TRACE_TARGET_ENV.to_string(),
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
