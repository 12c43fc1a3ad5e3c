use serde::{Deserialize, Serialize};

/// Host-supplied identity for one game session. The id only shows up in log
/// lines, so two browser tabs (or two tests) can be told apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub session_id: String,
}

impl SessionConfig {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.session_id.trim().is_empty() {
            return Err("Session id must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: "local".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized() {
        let config = SessionConfig::default();
        let serialized = serde_yaml_ng::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_yaml_ng::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_config_deserializes_from_yaml() {
        let config: SessionConfig = serde_yaml_ng::from_str("session_id: tab-1").unwrap();
        assert_eq!(config.session_id, "tab-1");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_session_id_fails_validation() {
        assert!(SessionConfig::new("").validate().is_err());
        assert!(SessionConfig::new("   ").validate().is_err());
    }
}
