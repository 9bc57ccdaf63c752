//! Settings and credential loading.
//!
//! Settings come from an optional `safehire.toml`; every table and key is
//! defaulted so an absent file reproduces the stock behavior. The API key is
//! only ever read from the environment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::error::{SafeHireError, SafeHireResult};
use crate::prompt::PromptOptions;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Settings file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "safehire.toml";

/// Default Gemini API URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub oracle: OracleSettings,
    pub prompt: PromptOptions,
    pub server: ServerSettings,
}

/// Oracle client settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleSettings {
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit path must exist. Without one, `safehire.toml` in `dir` is
    /// used when present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> SafeHireResult<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path)?;
        let settings = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> SafeHireResult<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> SafeHireResult<()> {
        if self.oracle.model.trim().is_empty() {
            return Err(SafeHireError::invalid_config("oracle.model must not be empty"));
        }
        if self.oracle.timeout_secs == 0 {
            return Err(SafeHireError::invalid_config("oracle.timeout_secs must be positive"));
        }
        self.prompt.validate()
    }
}

/// The oracle credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from the process environment.
    pub fn from_env() -> SafeHireResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the key through an arbitrary variable lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> SafeHireResult<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(API_KEY_ENV) {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(SafeHireError::MissingCredential(API_KEY_ENV.to_string())),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(None, dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.oracle.model, "gemini-2.5-flash");
        assert_eq!(settings.server.port, 8501);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[oracle]\nmodel = \"gemini-2.0-pro\"\n\n[prompt.timeline]\nnormal_months = 12\n",
        )
        .unwrap();

        let settings = Settings::load(None, dir.path()).unwrap();
        assert_eq!(settings.oracle.model, "gemini-2.0-pro");
        assert_eq!(settings.oracle.timeout_secs, 60);
        assert_eq!(settings.prompt.timeline.normal_months, 12);
        assert_eq!(settings.prompt.timeline.acceptable_months, 24);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Settings::load(Some(missing.as_path()), dir.path()).unwrap_err();
        assert!(matches!(err, SafeHireError::Io(_)));
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let err = Settings::from_toml_str(
            "[prompt.timeline]\nnormal_months = 30\nacceptable_months = 24\n",
        )
        .unwrap_err();
        assert!(matches!(err, SafeHireError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Settings::from_toml_str("[oracle]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, SafeHireError::InvalidConfig(_)));
    }

    #[test]
    fn test_api_key_lookup() {
        let key = ApiKey::from_lookup(|_| Some(" secret ".to_string())).unwrap();
        assert_eq!(key.expose(), "secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");

        let err = ApiKey::from_lookup(|_| None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "GEMINI_API_KEY is not set. Please configure it in the environment or a .env file."
        );
        assert!(ApiKey::from_lookup(|_| Some("   ".to_string())).is_err());
    }
}
