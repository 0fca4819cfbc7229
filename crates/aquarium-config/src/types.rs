//! Configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Environment variable overriding `aquarium_url`.
pub const URL_ENV: &str = "AQUARIUM_URL";
/// Environment variable overriding `login`.
pub const LOGIN_ENV: &str = "AQUARIUM_LOGIN";
/// Environment variable overriding `password`.
pub const PASSWORD_ENV: &str = "AQUARIUM_PASSWORD";
/// Environment variable overriding `authentication_key`.
pub const AUTHENTICATION_KEY_ENV: &str = "AQUARIUM_AUTHENTICATION_KEY";

/// Connection settings for an Aquarium server.
///
/// ```toml
/// aquarium_url = "http://localhost:3000"
/// login = "neptune"
/// authentication_key = "..."
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AquariumConfig {
    /// Base URL of the Aquarium server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aquarium_url: Option<String>,

    /// Login name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Password. Prefer `AQUARIUM_PASSWORD` or the interactive prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Key merged into POST forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication_key: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl AquariumConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Merge another config on top of this one (other takes priority).
    pub fn merge(&mut self, other: AquariumConfig) {
        if other.aquarium_url.is_some() {
            self.aquarium_url = other.aquarium_url;
        }
        if other.login.is_some() {
            self.login = other.login;
        }
        if other.password.is_some() {
            self.password = other.password;
        }
        if other.authentication_key.is_some() {
            self.authentication_key = other.authentication_key;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
    }

    /// Override fields from environment variables.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Override fields from a variable lookup; empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        if let Some(url) = var(URL_ENV) {
            self.aquarium_url = Some(url);
        }
        if let Some(login) = var(LOGIN_ENV) {
            self.login = Some(login);
        }
        if let Some(password) = var(PASSWORD_ENV) {
            self.password = Some(password);
        }
        if let Some(key) = var(AUTHENTICATION_KEY_ENV) {
            self.authentication_key = Some(key);
        }
    }

    /// The server URL, required for every command.
    pub fn require_url(&self) -> Result<&str> {
        self.aquarium_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField {
                field: "aquarium_url".to_string(),
                hint: format!("the config file, {} or --url", URL_ENV),
            })
    }

    /// Login and password, when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.login.as_deref(), self.password.as_deref()) {
            (Some(login), Some(password)) => Some((login, password)),
            _ => None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_full_config() {
        let config = AquariumConfig::from_toml(
            r#"
aquarium_url = "http://localhost:3000"
login = "neptune"
password = "beagle"
authentication_key = "k"
timeout_secs = 10
"#,
        )
        .unwrap();

        assert_eq!(config.require_url().unwrap(), "http://localhost:3000");
        assert_eq!(config.credentials(), Some(("neptune", "beagle")));
        assert_eq!(config.authentication_key.as_deref(), Some("k"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_empty_config() {
        let config = AquariumConfig::from_toml("").unwrap();
        assert_eq!(config, AquariumConfig::new());
        assert!(config.require_url().is_err());
        assert!(config.credentials().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        let err = AquariumConfig::from_toml("timeout_secs = \"ten\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = AquariumConfig {
            aquarium_url: Some("http://a".into()),
            login: Some("neptune".into()),
            ..Default::default()
        };
        base.merge(AquariumConfig {
            aquarium_url: Some("http://b".into()),
            ..Default::default()
        });

        assert_eq!(base.aquarium_url.as_deref(), Some("http://b"));
        assert_eq!(base.login.as_deref(), Some("neptune"));
    }

    #[test]
    fn test_overrides_skip_empty_values() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(URL_ENV, "http://env"), (LOGIN_ENV, ""), (PASSWORD_ENV, "pw")]);
        let mut config = AquariumConfig {
            login: Some("file-user".into()),
            ..Default::default()
        };

        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.aquarium_url.as_deref(), Some("http://env"));
        assert_eq!(config.login.as_deref(), Some("file-user"));
        assert_eq!(config.password.as_deref(), Some("pw"));
        assert!(config.authentication_key.is_none());
    }
}
