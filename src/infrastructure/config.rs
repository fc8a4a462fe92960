//! Client configuration.
//!
//! Settings come from compiled-in defaults with environment overrides.

use std::env;
use std::path::PathBuf;

/// Runtime configuration for the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the authentication backend.
    pub backend_url: String,
    /// Location of the durable session file.
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            session_file: PathBuf::from("texttales_session.json"),
        }
    }
}

impl ClientConfig {
    /// Loads configuration, honoring `TEXTTALES_BACKEND_URL` and
    /// `TEXTTALES_SESSION_FILE` when set and non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("TEXTTALES_BACKEND_URL").filter(|v| !v.is_empty()) {
            config.backend_url = url;
        }
        if let Some(path) = lookup("TEXTTALES_SESSION_FILE").filter(|v| !v.is_empty()) {
            config.session_file = PathBuf::from(path);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.session_file, PathBuf::from("texttales_session.json"));
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let config = ClientConfig::from_lookup(|key| match key {
            "TEXTTALES_BACKEND_URL" => Some("https://api.texttales.example".to_string()),
            "TEXTTALES_SESSION_FILE" => Some("/tmp/tt.json".to_string()),
            _ => None,
        });
        assert_eq!(config.backend_url, "https://api.texttales.example");
        assert_eq!(config.session_file, PathBuf::from("/tmp/tt.json"));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config = ClientConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.session_file, PathBuf::from("texttales_session.json"));
    }
}
