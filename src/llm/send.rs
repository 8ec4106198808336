use crate::llm::{CompletionOracle, CompletionRequest, Config, LLMResponse, OracleError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Posts prompts to an OpenAI-compatible chat-completion endpoint.
pub struct ChatCompletionClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ChatCompletionClient {
    pub fn new(config: &Config) -> Result<Self, OracleError> {
        let api_key = config.require_api_key()?.to_string();
        config.validate_url()?;

        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| OracleError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl CompletionOracle for ChatCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, OracleError> {
        let started = Instant::now();
        let body = request.to_llm_request();

        debug!(
            model = %request.model,
            temperature = request.temperature,
            prompt_chars = request.prompt_chars(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "Completion request failed");
            return Err(map_status(status, error_text));
        }

        let llm_response: LLMResponse = response
            .json()
            .await
            .map_err(|e| OracleError::MalformedResponse(e.to_string()))?;

        debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Completion received"
        );

        first_choice(llm_response)
    }
}

fn map_transport_error(e: reqwest::Error) -> OracleError {
    if e.is_timeout() {
        OracleError::Timeout
    } else if e.is_connect() {
        OracleError::Connect(e.to_string())
    } else {
        OracleError::Network(e.to_string())
    }
}

fn map_status(status: StatusCode, body: String) -> OracleError {
    match status.as_u16() {
        401 => OracleError::Unauthorized,
        403 => OracleError::Forbidden,
        429 => OracleError::RateLimited,
        code => OracleError::Http { status: code, body },
    }
}

/// The first choice's content, verbatim. Empty content is still a result.
fn first_choice(response: LLMResponse) -> Result<String, OracleError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(OracleError::NoChoices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    const PATH: &str = "/v1/chat/completions";

    fn client_for(server: &ServerGuard) -> ChatCompletionClient {
        let config = Config {
            api_key: "sk-test".into(),
            api_url: format!("{}{}", server.url(), PATH),
            temperature: 0.5,
            ..Config::default()
        };
        ChatCompletionClient::new(&config).unwrap()
    }

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4".into(),
            temperature: 0.5,
            prompt: prompt.into(),
        }
    }

    #[tokio::test]
    async fn posts_single_user_message_with_bearer_auth() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::Json(json!({
                "model": "gpt-4",
                "temperature": 0.5,
                "messages": [{"role": "user", "content": "plan my week"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices": [{"message": {"role": "assistant", "content": "  Oats at 7.\n"}},
                                {"message": {"role": "assistant", "content": "ignored"}}]}"#,
            )
            .create_async()
            .await;

        let text = client_for(&server)
            .complete(&request("plan my week"))
            .await
            .unwrap();

        assert_eq!(text, "  Oats at 7.\n");
        mock.assert_async().await;
    }

    async fn answer_with_status(status: usize) -> Result<String, OracleError> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(status)
            .with_body("denied")
            .create_async()
            .await;
        client_for(&server).complete(&request("a")).await
    }

    #[tokio::test]
    async fn error_statuses_surface_as_oracle_errors() {
        assert!(matches!(answer_with_status(401).await, Err(OracleError::Unauthorized)));
        assert!(matches!(answer_with_status(429).await, Err(OracleError::RateLimited)));
        assert!(matches!(
            answer_with_status(500).await,
            Err(OracleError::Http { status: 500, ref body }) if body == "denied"
        ));
    }

    #[tokio::test]
    async fn unparseable_body_is_malformed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let result = client_for(&server).complete(&request("a")).await;
        assert!(matches!(result, Err(OracleError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn zero_choices_from_the_server_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create_async()
            .await;

        let result = client_for(&server).complete(&request("a")).await;
        assert!(matches!(result, Err(OracleError::NoChoices)));
    }

    #[test]
    fn client_requires_api_key() {
        let result = ChatCompletionClient::new(&Config::default());
        assert!(matches!(
            result,
            Err(OracleError::Config(crate::llm::ConfigError::MissingApiKey))
        ));
    }

    #[test]
    fn status_codes_map_to_errors() {
        assert!(matches!(
            map_status(StatusCode::UNAUTHORIZED, String::new()),
            OracleError::Unauthorized
        ));
        assert!(matches!(
            map_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            OracleError::RateLimited
        ));
        assert!(matches!(
            map_status(StatusCode::BAD_GATEWAY, "upstream".into()),
            OracleError::Http { status: 502, ref body } if body == "upstream"
        ));
    }

    #[test]
    fn first_choice_is_returned_verbatim() {
        let response: LLMResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "  Eat oats.\n"}},
                            {"message": {"role": "assistant", "content": "ignored"}}]}"#,
        )
        .unwrap();
        assert_eq!(first_choice(response).unwrap(), "  Eat oats.\n");
    }

    #[test]
    fn empty_choices_are_an_error() {
        let response: LLMResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(first_choice(response), Err(OracleError::NoChoices)));
    }
}
