//! Provider presets

use serde::{Deserialize, Serialize};

/// Known chat-completion providers
///
/// Selecting a provider only changes the suggested base URL and model name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Groq,
    OpenRouter,
    /// Any OpenAI-compatible endpoint (defaults to OpenAI itself)
    Other,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Groq => "groq",
            Provider::OpenRouter => "openrouter",
            Provider::Other => "other",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Groq => "https://api.groq.com/openai/v1",
            Provider::OpenRouter => "https://openrouter.ai/api/v1",
            Provider::Other => "https://api.openai.com/v1",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Groq => "llama3-8b-8192",
            Provider::OpenRouter => "meta-llama/llama-3-8b-instruct",
            Provider::Other => "gpt-3.5-turbo",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Provider::default(), Provider::Groq);
        assert_eq!(
            Provider::OpenRouter.default_base_url(),
            "https://openrouter.ai/api/v1"
        );
        assert_eq!(Provider::Other.default_model(), "gpt-3.5-turbo");
    }
}
