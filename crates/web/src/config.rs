//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;
use useradmin_console::MountMode;
use useradmin_core::User;

pub const DEFAULT_BIND: &str = "0.0.0.0:5003";
pub const DEFAULT_BASE_PATH: &str = "/users";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be true or false, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },

    #[error("USERADMIN_BIND is not a socket address: {value:?}")]
    InvalidBind {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("USERADMIN_HOST_USER is not a user record: {0}")]
    InvalidHostUser(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebConfig {
    /// `STANDALONE` (default `true`).
    pub mode: MountMode,
    /// `USERADMIN_BIND`.
    pub bind: SocketAddr,
    /// `USERADMIN_BASE_PATH`; only used when embedded.
    pub base_path: String,
    /// `USERADMIN_SEED_FILE`.
    pub seed_file: Option<PathBuf>,
    /// `USERADMIN_HOST_USER`, a JSON user record the demo host signs in as.
    pub host_user: Option<User>,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let standalone = match lookup("STANDALONE") {
            Some(value) => parse_flag("STANDALONE", &value)?,
            None => true,
        };

        let bind_value = lookup("USERADMIN_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_value
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBind {
                value: bind_value.clone(),
                source,
            })?;

        let host_user: Option<User> = lookup("USERADMIN_HOST_USER")
            .filter(|json| !json.trim().is_empty())
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(ConfigError::InvalidHostUser)?;

        Ok(Self {
            mode: MountMode::from_standalone_flag(standalone),
            bind,
            base_path: lookup("USERADMIN_BASE_PATH")
                .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
            seed_file: lookup("USERADMIN_SEED_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            host_user,
        })
    }

    /// Base path the console is actually served under.
    pub fn effective_base_path(&self) -> &str {
        match self.mode {
            MountMode::SelfHosted => "",
            MountMode::HostEmbedded => &self.base_path,
        }
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<WebConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WebConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_standalone_on_dev_port() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.mode, MountMode::SelfHosted);
        assert_eq!(cfg.bind.port(), 5003);
        assert_eq!(cfg.effective_base_path(), "");
        assert!(cfg.seed_file.is_none());
        assert!(cfg.host_user.is_none());
    }

    #[test]
    fn standalone_false_selects_embedded_mode() {
        let cfg = config(&[("STANDALONE", "false"), ("USERADMIN_BASE_PATH", "/admin")]).unwrap();
        assert_eq!(cfg.mode, MountMode::HostEmbedded);
        assert_eq!(cfg.effective_base_path(), "/admin");
    }

    #[test]
    fn rejects_garbage_flag() {
        let err = config(&[("STANDALONE", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFlag { name: "STANDALONE", .. }));
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(matches!(
            config(&[("USERADMIN_BIND", "localhost")]),
            Err(ConfigError::InvalidBind { .. })
        ));
    }

    #[test]
    fn parses_host_user_json() {
        let cfg = config(&[(
            "USERADMIN_HOST_USER",
            r#"{"id":"host-1","name":"Host Admin","email":"host@example.com","role":"admin",
                "status":"active","lastLogin":"2024-01-01T00:00:00Z","createdAt":"2023-01-01T00:00:00Z"}"#,
        )])
        .unwrap();
        assert_eq!(cfg.host_user.map(|u| u.name), Some("Host Admin".to_string()));

        assert!(matches!(
            config(&[("USERADMIN_HOST_USER", "{not json")]),
            Err(ConfigError::InvalidHostUser(_))
        ));
    }
}
