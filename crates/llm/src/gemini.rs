//! Gemini `generateContent` adapter

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use franchise_assistant_config::ModelSettings;
use franchise_assistant_core::{GatewayError, GenerateRequest, ModelGateway, Turn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini REST gateway
#[derive(Clone)]
pub struct GeminiGateway {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
    timeout: Duration,
}

impl std::fmt::Debug for GeminiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGateway")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

impl GeminiGateway {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GatewayError::Configuration("Gemini API key is empty".into()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            temperature,
            timeout,
        })
    }

    pub fn from_settings(settings: &ModelSettings) -> Result<Self, GatewayError> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| GatewayError::Configuration("model.api_key is not set".into()))?;

        Self::new(
            api_key,
            settings.model.clone(),
            settings.base_url.clone(),
            settings.temperature,
            settings.timeout(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    fn build_body(&self, request: &GenerateRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = request.history.iter().map(content_from_turn).collect();
        contents.push(Content {
            role: "user",
            parts: vec![Part {
                text: request.user_text.clone(),
            }],
        });

        GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: request.system_instruction.clone(),
                }],
            },
            contents,
            generation_config: GenerationConfig {
                max_output_tokens: request.max_output_tokens,
                temperature: self.temperature,
            },
        }
    }

    async fn send(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        let body = self.build_body(request);

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            return Err(map_http_error(status, text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        extract_text(parsed)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else {
            GatewayError::Network(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: GenerateRequest) -> Result<String, GatewayError> {
        let started = Instant::now();

        let result = match tokio::time::timeout(self.timeout, self.send(&request)).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout(self.timeout)),
        };

        match &result {
            Ok(text) => tracing::debug!(
                model = %self.model,
                history = request.history.len(),
                chars = text.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Gemini reply received"
            ),
            Err(e) => tracing::warn!(
                model = %self.model,
                kind = e.kind(),
                error = %e,
                "Gemini call failed"
            ),
        }

        result
    }
}

fn content_from_turn(turn: &Turn) -> Content {
    Content {
        role: turn.role.as_str(),
        parts: vec![Part {
            text: turn.text.clone(),
        }],
    }
}

/// First non-empty text of the first candidate
fn extract_text(response: GenerateContentResponse) -> Result<String, GatewayError> {
    let text: String = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(GatewayError::EmptyResponse)
    } else {
        Ok(text)
    }
}

fn map_http_error(status: StatusCode, body: String) -> GatewayError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    GatewayError::Http {
        status: status.as_u16(),
        message,
        retryable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base_url: &str) -> GeminiGateway {
        GeminiGateway::new(
            "test-key",
            "gemini-2.0-flash",
            base_url,
            0.7,
            Duration::from_secs(2),
        )
        .unwrap()
    }

    fn request() -> GenerateRequest {
        GenerateRequest {
            system_instruction: "You are an advisor.".into(),
            history: vec![Turn::user("A: Retail"), Turn::model("Great choice.")],
            user_text: "B: Some experience".into(),
            max_output_tokens: 800,
        }
    }

    #[test]
    fn test_body_shape() {
        let gw = gateway("https://example.test/v1beta/models/");
        let body = serde_json::to_value(gw.build_body(&request())).unwrap();

        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are an advisor."
        );
        assert_eq!(body["contents"].as_array().unwrap().len(), 3);
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][1]["role"], "model");
        assert_eq!(body["contents"][2]["parts"][0]["text"], "B: Some experience");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 800);
        assert_eq!(
            gw.endpoint(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = GeminiGateway::new("  ", "m", "http://x", 0.7, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, GatewayError::Configuration(_)));
    }

    #[test]
    fn test_extract_text() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"there"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Hello there");
    }

    #[test]
    fn test_extract_text_empty() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(extract_text(response), Err(GatewayError::EmptyResponse));

        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_text(response), Err(GatewayError::EmptyResponse));
    }

    #[test]
    fn test_map_http_error() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#
                .into(),
        );
        assert_eq!(
            err,
            GatewayError::Http {
                status: 429,
                message: "RESOURCE_EXHAUSTED: Quota exceeded".into(),
                retryable: true,
            }
        );

        let err = map_http_error(StatusCode::BAD_REQUEST, "not json".into());
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let gw = gateway("http://127.0.0.1:9");
        let err = gw.generate(request()).await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Network(_) | GatewayError::Timeout(_)
        ));
    }

    #[tokio::test]
    async fn test_transport_error_omits_api_key() {
        let gw = GeminiGateway::new(
            "SECRET-KEY-123",
            "m",
            "http://127.0.0.1:9",
            0.7,
            Duration::from_secs(2),
        )
        .unwrap();

        let err = gw.generate(request()).await.unwrap_err();
        assert!(!err.to_string().contains("SECRET-KEY-123"), "{err}");
        assert!(!format!("{err:?}").contains("SECRET-KEY-123"));
        assert!(!format!("{gw:?}").contains("SECRET-KEY-123"));
    }
}
