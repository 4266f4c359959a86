//! Tracer configuration loading.
//!
//! Configuration comes from JSON or from environment-style key/value
//! pairs. Environment variables:
//!
//! - `TRACE_MASTER`: `true`/`false` (also `1`/`0`, `yes`/`no`)
//! - `TRACE_DEFAULT_KEY`: key for the wildcard protocol
//! - `TRACE_PROTOCOLS`: comma separated `protocol=key` bindings

use crate::error::{Result, TraceError};
use crate::ids::{Key, Protocol};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_MASTER: &str = "TRACE_MASTER";
pub const ENV_DEFAULT_KEY: &str = "TRACE_DEFAULT_KEY";
pub const ENV_PROTOCOLS: &str = "TRACE_PROTOCOLS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolBinding {
    pub protocol: Protocol,
    pub key: Key,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    pub master: bool,
    pub default_key: Key,
    pub protocols: Vec<ProtocolBinding>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            master: false,
            default_key: Key::default_key(),
            protocols: Vec::new(),
        }
    }
}

impl TracerConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Read the `TRACE_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_iter(std::env::vars())
    }

    /// Read the `TRACE_*` variables from any key/value source. Unrelated
    /// variables are ignored; missing ones keep their defaults.
    pub fn from_env_iter<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (name, value) in vars {
            let value = value.as_ref().trim();
            match name.as_ref() {
                ENV_MASTER => config.master = parse_bool(value)?,
                ENV_DEFAULT_KEY => config.default_key = Key::from(value),
                ENV_PROTOCOLS => config.protocols = parse_bindings(value)?,
                _ => {}
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_key.as_str().is_empty() {
            return Err(TraceError::Configuration("default key must not be empty".to_string()));
        }
        for binding in &self.protocols {
            if binding.protocol.as_str().is_empty() || binding.key.as_str().is_empty() {
                return Err(TraceError::Configuration(format!(
                    "protocol binding '{}={}' must name both protocol and key",
                    binding.protocol, binding.key
                )));
            }
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(TraceError::Configuration(format!(
            "{ENV_MASTER} must be a boolean, got '{other}'"
        ))),
    }
}

fn parse_bindings(raw: &str) -> Result<Vec<ProtocolBinding>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (protocol, key) = entry.split_once('=').ok_or_else(|| {
                TraceError::Configuration(format!(
                    "{ENV_PROTOCOLS} entry '{entry}' is not of the form protocol=key"
                ))
            })?;
            Ok::<_, TraceError>(ProtocolBinding {
                protocol: Protocol::from(protocol.trim()),
                key: Key::from(key.trim()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::DEFAULT_KEY;

    #[test]
    fn defaults_match_a_fresh_tracer() {
        let config = TracerConfig::default();
        assert!(!config.master);
        assert_eq!(config.default_key.as_str(), DEFAULT_KEY);
        assert!(config.protocols.is_empty());
    }

    #[test]
    fn json_fields_are_optional() {
        let config = TracerConfig::from_json_str(r#"{"master": true}"#).expect("config");
        assert!(config.master);
        assert_eq!(config.default_key.as_str(), DEFAULT_KEY);
    }

    #[test]
    fn json_protocols_parse() {
        let config = TracerConfig::from_json_str(
            r#"{
                "default_key": "bgo_trace_id",
                "protocols": [
                    {"protocol": "http", "key": "X-Trace-Id"},
                    {"protocol": "kafka", "key": "kafka-trace"}
                ]
            }"#,
        )
        .expect("config");
        assert_eq!(config.default_key.as_str(), "bgo_trace_id");
        assert_eq!(config.protocols.len(), 2);
        assert_eq!(config.protocols[1].key.as_str(), "kafka-trace");
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = TracerConfig::from_json_str("{master:").unwrap_err();
        assert!(matches!(err, TraceError::Json(_)));
    }

    #[test]
    fn env_pairs_parse() {
        let config = TracerConfig::from_env_iter([
            ("PATH", "/usr/bin"),
            ("TRACE_MASTER", "yes"),
            ("TRACE_PROTOCOLS", " http = X-Trace-Id , kafka=kafka-trace,"),
        ])
        .expect("config");
        assert!(config.master);
        assert_eq!(
            config.protocols,
            vec![
                ProtocolBinding { protocol: "http".into(), key: "X-Trace-Id".into() },
                ProtocolBinding { protocol: "kafka".into(), key: "kafka-trace".into() },
            ]
        );
    }

    #[test]
    fn bad_master_flag_is_rejected() {
        let err = TracerConfig::from_env_iter([("TRACE_MASTER", "maybe")]).unwrap_err();
        assert!(matches!(err, TraceError::Configuration(_)));
    }

    #[test]
    fn binding_without_separator_is_rejected() {
        let err = TracerConfig::from_env_iter([("TRACE_PROTOCOLS", "http")]).unwrap_err();
        assert!(err.to_string().contains("protocol=key"));
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = TracerConfig::from_env_iter([("TRACE_PROTOCOLS", "http=")]).unwrap_err();
        assert!(matches!(err, TraceError::Configuration(_)));
        let err = TracerConfig::from_env_iter([("TRACE_DEFAULT_KEY", " ")]).unwrap_err();
        assert!(matches!(err, TraceError::Configuration(_)));
    }
}
