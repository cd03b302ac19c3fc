use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::interfaces::adapters::{CredentialProvider, ScriptGenerator};
use crate::core::models::{strip_image_data_url_prefix, GeneratedScript, ScriptGenerationError};
use crate::global_constants::{
    GEMINI_API_KEY_HEADER, GENERATION_TEMPERATURE, LOG_TAG_GEMINI, SYSTEM_INSTRUCTION,
    USER_INSTRUCTION,
};

pub struct GeminiScriptGenerator {
    http_client: reqwest::Client,
    credential_provider: Arc<dyn CredentialProvider>,
    api_base_url: String,
    model_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: RequestContent<'a>,
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: Option<bool>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate, skipping thought summaries.
    fn collect_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter(|part| part.thought != Some(true))
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl GeminiScriptGenerator {
    pub fn new(
        credential_provider: Arc<dyn CredentialProvider>,
        api_base_url: String,
        model_name: String,
    ) -> Self {
        Self::with_http_client(
            reqwest::Client::new(),
            credential_provider,
            api_base_url,
            model_name,
        )
    }

    pub fn with_http_client(
        http_client: reqwest::Client,
        credential_provider: Arc<dyn CredentialProvider>,
        api_base_url: String,
        model_name: String,
    ) -> Self {
        log::debug!(
            "{} configured for model {} at {}",
            LOG_TAG_GEMINI,
            model_name,
            api_base_url
        );

        Self {
            http_client,
            credential_provider,
            api_base_url,
            model_name,
        }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            self.model_name
        )
    }

    fn build_request_body<'a>(mime_type: &'a str, base64_body: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            system_instruction: RequestContent {
                role: None,
                parts: vec![RequestPart::Text {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![RequestContent {
                role: Some("user"),
                parts: vec![
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: base64_body,
                        },
                    },
                    RequestPart::Text {
                        text: USER_INSTRUCTION,
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: GENERATION_TEMPERATURE,
            },
        }
    }

    fn extract_error_message(response_text: &str) -> String {
        serde_json::from_str::<ErrorEnvelope>(response_text)
            .map(|envelope| envelope.error.message)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "unknown error".to_string())
    }
}

#[async_trait]
impl ScriptGenerator for GeminiScriptGenerator {
    async fn generate_script(&self, image_data_url: &str) -> Result<GeneratedScript> {
        let api_key = self.credential_provider.resolve_api_key().ok_or_else(|| {
            ScriptGenerationError::MissingCredential {
                checked_variables: self.credential_provider.describe_source(),
            }
        })?;

        let (mime_type, base64_body) = strip_image_data_url_prefix(image_data_url);
        let request_body = Self::build_request_body(mime_type.as_str(), base64_body);

        log::info!(
            "{} requesting script from {} ({}, {} base64 characters)",
            LOG_TAG_GEMINI,
            self.model_name,
            mime_type,
            base64_body.len()
        );

        let response = self
            .http_client
            .post(self.endpoint_url())
            .header(GEMINI_API_KEY_HEADER, api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            let message = Self::extract_error_message(&response_text);
            log::error!("{} request rejected with {}: {}", LOG_TAG_GEMINI, status, message);
            return Err(ScriptGenerationError::ServiceRejected {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&response_text).context("Failed to parse Gemini response")?;
        let script = GeneratedScript::new(parsed.collect_text())
            .ok_or(ScriptGenerationError::EmptyResponse)?;

        log::info!(
            "{} script received ({} characters)",
            LOG_TAG_GEMINI,
            script.as_str().len()
        );
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    struct StaticCredentialProvider(Option<String>);

    impl CredentialProvider for StaticCredentialProvider {
        fn resolve_api_key(&self) -> Option<String> {
            self.0.clone()
        }

        fn describe_source(&self) -> String {
            "TEST_API_KEY".to_string()
        }
    }

    struct CapturedRequest {
        head: String,
        body: serde_json::Value,
    }

    fn find_header_end(buffer: &[u8]) -> Option<usize> {
        buffer.windows(4).position(|window| window == b"\r\n\r\n")
    }

    async fn read_http_request(socket: &mut TcpStream) -> CapturedRequest {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..read]);

            if let Some(header_end) = find_header_end(&buffer) {
                let head = String::from_utf8_lossy(&buffer[..header_end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buffer.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let header_end = find_header_end(&buffer).unwrap();
        CapturedRequest {
            head: String::from_utf8_lossy(&buffer[..header_end]).to_lowercase(),
            body: serde_json::from_slice(&buffer[header_end + 4..]).unwrap(),
        }
    }

    async fn serve_once(
        status_line: &'static str,
        response_body: String,
    ) -> (String, tokio::task::JoinHandle<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_http_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                response_body.len(),
                response_body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (format!("http://{}", address), handle)
    }

    fn create_generator(api_key: Option<&str>, base_url: String) -> GeminiScriptGenerator {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        GeminiScriptGenerator::with_http_client(
            client,
            Arc::new(StaticCredentialProvider(api_key.map(str::to_string))),
            base_url,
            "gemini-2.5-flash".to_string(),
        )
    }

    fn text_response(parts: &[&str]) -> String {
        let parts: Vec<serde_json::Value> = parts
            .iter()
            .map(|text| serde_json::json!({ "text": text }))
            .collect();
        serde_json::json!({
            "candidates": [{ "content": { "role": "model", "parts": parts } }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_generate_script_returns_service_text_verbatim() {
        let expected = "Here is your complete image-generation script: ...";
        let (base_url, server) = serve_once("200 OK", text_response(&[expected])).await;
        let generator = create_generator(Some("test-key"), base_url);

        let script = generator
            .generate_script("data:image/jpeg;base64,/9j/4AAQ")
            .await
            .unwrap();

        assert_eq!(script.as_str(), expected);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_request_carries_image_prompt_and_config() {
        let (base_url, server) = serve_once("200 OK", text_response(&["ok"])).await;
        let generator = create_generator(Some("test-key"), base_url);

        generator
            .generate_script("data:image/png;base64,iVBORw0KGgo=")
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert!(request
            .head
            .starts_with("post /v1beta/models/gemini-2.5-flash:generatecontent"));
        assert!(request.head.contains("x-goog-api-key: test-key"));

        let parts = &request.body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], "iVBORw0KGgo=");
        assert_eq!(parts[1]["text"], USER_INSTRUCTION);
        assert_eq!(
            request.body["systemInstruction"]["parts"][0]["text"],
            SYSTEM_INSTRUCTION
        );
        let temperature = request.body["generationConfig"]["temperature"]
            .as_f64()
            .unwrap();
        assert!((temperature - 0.4).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_bare_base64_is_sent_as_jpeg() {
        let (base_url, server) = serve_once("200 OK", text_response(&["ok"])).await;
        let generator = create_generator(Some("test-key"), base_url);

        generator.generate_script("/9j/4AAQSkZJRg==").await.unwrap();
        let request = server.await.unwrap();

        let inline_data = &request.body["contents"][0]["parts"][0]["inlineData"];
        assert_eq!(inline_data["mimeType"], "image/jpeg");
        assert_eq!(inline_data["data"], "/9j/4AAQSkZJRg==");
    }

    #[tokio::test]
    async fn test_multiple_text_parts_are_joined() {
        let (base_url, server) =
            serve_once("200 OK", text_response(&["Here is ", "your script"])).await;
        let generator = create_generator(Some("test-key"), base_url);

        let script = generator
            .generate_script("data:image/jpeg;base64,AAAA")
            .await
            .unwrap();

        assert_eq!(script.as_str(), "Here is your script");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_network() {
        let generator = create_generator(None, "http://127.0.0.1:9".to_string());

        let error = generator
            .generate_script("data:image/jpeg;base64,AAAA")
            .await
            .unwrap_err();

        assert!(matches!(
            error.downcast_ref::<ScriptGenerationError>(),
            Some(ScriptGenerationError::MissingCredential { .. })
        ));
    }

    #[tokio::test]
    async fn test_connection_failure_propagates_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let generator = create_generator(Some("test-key"), format!("http://{}", address));

        let error = generator
            .generate_script("data:image/jpeg;base64,AAAA")
            .await
            .unwrap_err();

        assert!(error.downcast_ref::<reqwest::Error>().is_some());
        assert!(error.downcast_ref::<ScriptGenerationError>().is_none());
    }

    #[tokio::test]
    async fn test_empty_candidates_is_an_error() {
        let (base_url, server) =
            serve_once("200 OK", serde_json::json!({ "candidates": [] }).to_string()).await;
        let generator = create_generator(Some("test-key"), base_url);

        let error = generator
            .generate_script("data:image/jpeg;base64,AAAA")
            .await
            .unwrap_err();

        assert!(matches!(
            error.downcast_ref::<ScriptGenerationError>(),
            Some(ScriptGenerationError::EmptyResponse)
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_service_error_is_reported_with_status_and_message() {
        let body = serde_json::json!({
            "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" }
        })
        .to_string();
        let (base_url, server) = serve_once("400 Bad Request", body).await;
        let generator = create_generator(Some("bad-key"), base_url);

        let error = generator
            .generate_script("data:image/jpeg;base64,AAAA")
            .await
            .unwrap_err();

        match error.downcast_ref::<ScriptGenerationError>() {
            Some(ScriptGenerationError::ServiceRejected { status, message }) => {
                assert_eq!(*status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        server.await.unwrap();
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let generator = create_generator(Some("key"), "https://example.test/".to_string());

        assert_eq!(
            generator.endpoint_url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_collect_text_skips_thought_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [
                { "text": "thinking...", "thought": true },
                { "text": "final script" }
            ]}}]
        }))
        .unwrap();

        assert_eq!(response.collect_text(), "final script");
    }
}
