//! Single-exchange chat session over HTTP

use super::types::{ChatMessage, ChatRequest, ChatResponse, provider_error_message};
use async_trait::async_trait;
use gapscout_application::ports::llm_gateway::{GatewayError, LlmSession};
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info};

/// A system prompt bound to one model and endpoint
///
/// Each `send` is an independent request of `[system, user]`; no history
/// is kept between calls.
pub struct OpenAiSession {
    client: Client,
    endpoint: Url,
    model: String,
    temperature: f32,
    system_prompt: String,
}

impl OpenAiSession {
    pub(crate) fn new(
        client: Client,
        endpoint: Url,
        model: String,
        temperature: f32,
        system_prompt: String,
    ) -> Self {
        Self {
            client,
            endpoint,
            model,
            temperature,
            system_prompt,
        }
    }
}

fn convert_send_error(e: reqwest::Error) -> GatewayError {
    if e.is_connect() || e.is_timeout() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

fn convert_status(status: StatusCode, body: &str) -> GatewayError {
    let message = provider_error_message(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GatewayError::AuthenticationFailed(format!("{}: {}", status, message))
        }
        _ => GatewayError::RequestFailed(format!("{}: {}", status, message)),
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage::system(&self.system_prompt),
                ChatMessage::user(content),
            ],
            temperature: self.temperature,
        };

        debug!(
            model = %self.model,
            prompt_chars = content.chars().count(),
            "Calling chat completions"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(convert_send_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            info!(%status, "Chat completion request rejected");
            return Err(convert_status(status, &body));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed.into_content().ok_or(GatewayError::EmptyResponse)
    }
}
