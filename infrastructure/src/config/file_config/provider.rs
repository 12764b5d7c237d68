//! Provider configuration from TOML (`[provider]` section)

use gapscout_domain::{ApiKey, DEFAULT_TEMPERATURE, LlmClientConfig, Provider};
use serde::{Deserialize, Serialize};

/// Environment variable consulted for the API key when none is configured
pub const DEFAULT_API_KEY_ENV: &str = "GAPSCOUT_API_KEY";

/// Raw provider configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Preset: "groq", "openrouter" or "other"
    pub name: Option<Provider>,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    /// Environment variable name for the API key
    pub api_key_env: String,
    /// Overrides the preset's base URL
    pub base_url: Option<String>,
    /// Overrides the preset's model
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            name: None,
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: None,
            model: None,
            temperature: None,
        }
    }
}

impl FileProviderConfig {
    pub fn provider(&self) -> Provider {
        self.name.unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider().default_base_url())
    }

    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider().default_model())
    }

    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Resolve the API key: explicit flag, then `api_key`, then `$api_key_env`
    pub fn resolve_api_key(&self, flag: Option<&str>) -> ApiKey {
        self.resolve_api_key_with(flag, |name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with<F>(&self, flag: Option<&str>, lookup_env: F) -> ApiKey
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let non_blank = |s: &str| !s.trim().is_empty();

        if let Some(key) = flag.filter(|k| non_blank(k)) {
            return ApiKey::new(key);
        }
        if let Some(key) = self.api_key.as_deref().filter(|k| non_blank(k)) {
            return ApiKey::new(key);
        }
        lookup_env(&self.api_key_env)
            .map(ApiKey::new)
            .unwrap_or_default()
    }

    pub fn to_client_config(&self, api_key: ApiKey) -> LlmClientConfig {
        LlmClientConfig::new(api_key, self.base_url(), self.model())
            .with_temperature(self.temperature())
    }
}
