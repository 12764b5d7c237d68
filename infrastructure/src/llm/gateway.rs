//! OpenAI-compatible gateway and its factory

use super::session::OpenAiSession;
use async_trait::async_trait;
use gapscout_application::ports::llm_gateway::{
    GatewayError, LlmClientFactory, LlmGateway, LlmSession,
};
use gapscout_domain::LlmClientConfig;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use tracing::info;

/// Gateway for any endpoint speaking the chat-completions protocol
/// (Groq, OpenRouter, OpenAI and self-hosted servers)
pub struct OpenAiCompatibleGateway {
    client: Client,
    endpoint: Url,
    model: String,
    temperature: f32,
}

impl OpenAiCompatibleGateway {
    /// Validate the settings and build the HTTP client
    ///
    /// No request is sent here; a bad key only shows up on the first call.
    pub fn new(config: &LlmClientConfig) -> Result<Self, GatewayError> {
        let endpoint = completions_endpoint(&config.base_url)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key.expose()))
            .map_err(|_| {
                GatewayError::ClientInitialization(
                    "API key contains characters not allowed in an HTTP header".to_string(),
                )
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::ClientInitialization(e.to_string()))?;

        info!(endpoint = %endpoint, model = %config.model_name, "LLM client configured");

        Ok(Self {
            client,
            endpoint,
            model: config.model_name.clone(),
            temperature: config.temperature,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// `{base_url}/chat/completions`, with the base URL checked for an http(s) scheme
fn completions_endpoint(base_url: &str) -> Result<Url, GatewayError> {
    let base = base_url.trim().trim_end_matches('/');
    let url = Url::parse(&format!("{}/chat/completions", base)).map_err(|e| {
        GatewayError::ClientInitialization(format!("Invalid base URL '{}': {}", base_url, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(GatewayError::ClientInitialization(format!(
            "Unsupported URL scheme '{}' in base URL '{}'",
            other, base_url
        ))),
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatibleGateway {
    async fn create_session_with_system_prompt(
        &self,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenAiSession::new(
            self.client.clone(),
            self.endpoint.clone(),
            self.model.clone(),
            self.temperature,
            system_prompt.to_string(),
        )))
    }
}

/// [`LlmClientFactory`] producing [`OpenAiCompatibleGateway`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenAiClientFactory;

impl LlmClientFactory for OpenAiClientFactory {
    fn connect(&self, config: &LlmClientConfig) -> Result<Box<dyn LlmGateway>, GatewayError> {
        Ok(Box::new(OpenAiCompatibleGateway::new(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapscout_domain::ApiKey;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(base_url: &str) -> LlmClientConfig {
        LlmClientConfig::new(ApiKey::new("test-key"), base_url, "llama3-8b-8192")
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway =
            OpenAiCompatibleGateway::new(&config_for("https://api.groq.com/openai/v1/")).unwrap();
        assert_eq!(
            gateway.endpoint().as_str(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(gateway.model, "llama3-8b-8192");
    }

    #[test]
    fn test_invalid_base_url_fails_at_construction() {
        let err = OpenAiClientFactory
            .connect(&config_for("not a url"))
            .err()
            .unwrap();
        assert!(matches!(err, GatewayError::ClientInitialization(_)));

        let err = OpenAiClientFactory
            .connect(&config_for("ftp://example.com/v1"))
            .err()
            .unwrap();
        assert!(matches!(err, GatewayError::ClientInitialization(msg) if msg.contains("ftp")));
    }

    #[test]
    fn test_invalid_key_fails_at_construction() {
        let config = LlmClientConfig::new(
            ApiKey::new("bad\nkey"),
            "https://api.groq.com/openai/v1",
            "m",
        );
        let err = OpenAiCompatibleGateway::new(&config).err().unwrap();
        assert!(matches!(err, GatewayError::ClientInitialization(_)));
    }

    #[tokio::test]
    async fn test_send_posts_system_and_user_messages() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "llama3-8b-8192",
                "messages": [
                    {"role": "system", "content": "You are a senior SEO strategist."},
                    {"role": "user", "content": "Compare these pages"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("## Gaps")))
            .expect(1)
            .mount(&server)
            .await;

        let gateway =
            OpenAiCompatibleGateway::new(&config_for(&format!("{}/v1", server.uri()))).unwrap();
        let session = gateway
            .create_session_with_system_prompt("You are a senior SEO strategist.")
            .await
            .unwrap();

        let reply = session.send("Compare these pages").await.unwrap();
        assert_eq!(reply, "## Gaps");
    }

    #[tokio::test]
    async fn test_send_uses_configured_temperature() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({"temperature": 0.5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server.uri()).with_temperature(0.5);
        let gateway = OpenAiCompatibleGateway::new(&config).unwrap();
        let session = gateway.create_session_with_system_prompt("s").await.unwrap();
        assert_eq!(session.send("p").await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Invalid API Key", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let gateway = OpenAiCompatibleGateway::new(&config_for(&server.uri())).unwrap();
        let session = gateway.create_session_with_system_prompt("s").await.unwrap();
        let err = session.send("p").await.unwrap_err();
        assert!(
            matches!(&err, GatewayError::AuthenticationFailed(msg) if msg.contains("Invalid API Key")),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_server_error_maps_to_request_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"message": "Rate limit reached"}
            })))
            .mount(&server)
            .await;

        let gateway = OpenAiCompatibleGateway::new(&config_for(&server.uri())).unwrap();
        let session = gateway.create_session_with_system_prompt("s").await.unwrap();
        let err = session.send("p").await.unwrap_err();
        match err {
            GatewayError::RequestFailed(msg) => {
                assert!(msg.contains("429"));
                assert!(msg.contains("Rate limit reached"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_choices_is_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let gateway = OpenAiCompatibleGateway::new(&config_for(&server.uri())).unwrap();
        let session = gateway.create_session_with_system_prompt("s").await.unwrap();
        assert_eq!(session.send("p").await.unwrap_err(), GatewayError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let gateway = OpenAiCompatibleGateway::new(&config_for(&server.uri())).unwrap();
        let session = gateway.create_session_with_system_prompt("s").await.unwrap();
        assert!(matches!(
            session.send("p").await.unwrap_err(),
            GatewayError::InvalidResponse(_)
        ));
    }
}
