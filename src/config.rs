use crate::error::Result;
use serde::Deserialize;
use std::time::Duration;

/// Runtime settings for one donation page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    /// Deadline for a single gateway call, in milliseconds.
    pub gateway_timeout_ms: u64,
    pub success_path: String,
    pub cancel_path: String,
    pub home_path: String,
    /// Preset selected when the page mounts and after "donate again".
    pub suggested_preset: Option<u32>,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            gateway_timeout_ms: 30_000,
            success_path: "/success".to_string(),
            cancel_path: "/cancel".to_string(),
            home_path: "/".to_string(),
            suggested_preset: Some(50),
        }
    }
}

impl IntakeConfig {
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn gateway_timeout(&self) -> Duration {
        Duration::from_millis(self.gateway_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = IntakeConfig::from_json(r#"{"gateway_timeout_ms": 500}"#).unwrap();
        assert_eq!(config.gateway_timeout(), Duration::from_millis(500));
        assert_eq!(config.success_path, "/success");
        assert_eq!(config.suggested_preset, Some(50));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(IntakeConfig::from_json("{").is_err());
    }
}
