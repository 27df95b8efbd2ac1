//! Shell host configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::machine::ShellState;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or has unknown or mistyped keys.
    #[error("failed to parse shell config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The document parsed but a value is out of range.
    #[error("invalid shell config: {0}")]
    Invalid(String),
}

/// Prompt identity, starting cursor, initial session script, and queue sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// User half of the prompt identity.
    pub user: String,
    /// Host half of the prompt identity.
    pub host: String,
    /// Cursor segments of a fresh session.
    pub initial_cwd: Vec<String>,
    /// Commands run, in order, when a session starts with empty history.
    pub startup: Vec<String>,
    /// Pending inputs the session queue holds before rejecting submissions.
    pub queue_capacity: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: "world".to_string(),
            host: "jaylee.xyz".to_string(),
            initial_cwd: Vec::new(),
            startup: vec!["fetch".to_string(), "news".to_string(), "help".to_string()],
            queue_capacity: 16,
        }
    }
}

impl ShellConfig {
    /// Parses and validates a TOML document; omitted keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and [`ConfigError::Invalid`] when the
    /// queue capacity is zero or a cursor segment is empty or contains `/`.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::Invalid(
                "queue_capacity must be at least 1".to_string(),
            ));
        }
        if let Some(segment) = self
            .initial_cwd
            .iter()
            .find(|segment| segment.is_empty() || segment.contains('/'))
        {
            return Err(ConfigError::Invalid(format!(
                "initial_cwd segment `{segment}` must be non-empty and contain no `/`"
            )));
        }
        Ok(())
    }

    /// Fresh state at the configured cursor.
    pub fn initial_state(&self) -> ShellState {
        ShellState::new(self.initial_cwd.clone())
    }

    /// Prompt identity, `user@host`.
    pub fn identity(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(
            ShellConfig::from_toml_str("").expect("parse"),
            ShellConfig::default()
        );
    }

    #[test]
    fn overrides_merge_with_defaults() {
        let config = ShellConfig::from_toml_str(
            r#"
            user = "guest"
            startup = ["help"]
            initial_cwd = ["posts"]
            "#,
        )
        .expect("parse");
        assert_eq!(config.user, "guest");
        assert_eq!(config.host, "jaylee.xyz");
        assert_eq!(config.startup, vec!["help".to_string()]);
        assert_eq!(config.initial_state().cwd_path(), "/posts");
        assert_eq!(config.identity(), "guest@jaylee.xyz");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = ShellConfig::from_toml_str("colour = \"red\"").expect_err("unknown key");
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let error = ShellConfig::from_toml_str("queue_capacity = 0").expect_err("invalid");
        assert!(matches!(error, ConfigError::Invalid(_)));
    }

    #[test]
    fn cursor_segments_must_be_plain_names() {
        let error =
            ShellConfig::from_toml_str("initial_cwd = [\"a/b\"]").expect_err("invalid segment");
        assert!(error.to_string().contains("a/b"));
    }
}
