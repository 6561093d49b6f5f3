use serde::{Deserialize, Serialize};

use crate::customer::SampleData;

pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Kensho configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KenshoConfig {
    /// Chat model name sent to the provider
    pub model: String,

    /// Base URL of an OpenAI-compatible API
    pub base_url: String,

    /// API key; usually supplied through `OPENAI_API_KEY`
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Model turns allowed per agent run
    pub max_turns: usize,

    /// Log level
    pub log_level: String,

    /// Customer records the store is seeded with
    pub sample_data: SampleData,
}

impl Default for KenshoConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: crate::agent::openai::DEFAULT_BASE_URL.to_string(),
            api_key: None,
            max_turns: crate::agent::runner::DEFAULT_MAX_TURNS,
            log_level: "info".to_string(),
            sample_data: SampleData::default(),
        }
    }
}

impl KenshoConfig {
    /// Load from configuration file
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
    }

    /// Overlay `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `KENSHO_MODEL`
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    pub fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            self.base_url = url;
        }
        if let Some(model) = lookup("KENSHO_MODEL") {
            self.model = model;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: KenshoConfig =
            serde_json::from_str(r#"{"model": "gpt-4o-mini", "sample_data": "basic"}"#).unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.sample_data, SampleData::Basic);
        assert_eq!(config.max_turns, 8);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_env_overlay() {
        let env: HashMap<&str, &str> =
            HashMap::from([("OPENAI_API_KEY", "sk-test"), ("KENSHO_MODEL", "gpt-4.1")]);
        let config =
            KenshoConfig::default().apply_env_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "gpt-4.1");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_api_key_is_not_written_back() {
        let config = KenshoConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}
