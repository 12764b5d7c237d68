//! Client configuration value objects

use super::provider::Provider;

/// Sampling temperature used for every generation call
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// API credential; never printed in full
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().trim().to_string())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiKey(<empty>)")
        } else {
            f.write_str("ApiKey(<redacted>)")
        }
    }
}

/// Connection settings for the chat-completion endpoint, immutable per run
#[derive(Debug, Clone, PartialEq)]
pub struct LlmClientConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    pub model_name: String,
    pub temperature: f32,
}

impl LlmClientConfig {
    pub fn new(
        api_key: ApiKey,
        base_url: impl Into<String>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            model_name: model_name.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Config using a provider's default base URL and model
    pub fn for_provider(provider: Provider, api_key: ApiKey) -> Self {
        Self::new(api_key, provider.default_base_url(), provider.default_model())
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_redacted() {
        let key = ApiKey::new("gsk_secret");
        assert_eq!(format!("{key:?}"), "ApiKey(<redacted>)");
        assert_eq!(key.expose(), "gsk_secret");
    }

    #[test]
    fn test_blank_key_is_empty() {
        assert!(ApiKey::new("   ").is_empty());
        let config = LlmClientConfig::for_provider(Provider::Groq, ApiKey::new(""));
        assert!(!config.has_credential());
    }

    #[test]
    fn test_for_provider() {
        let config = LlmClientConfig::for_provider(Provider::Groq, ApiKey::new("k"));
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.model_name, "llama3-8b-8192");
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    }
}
