//! Claude Messages API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use jfit_core::{
    CompletionHandle, CompletionRequest, CompletionResult, CompletionService, Error, Result,
};

use crate::config::ClaudeConfig;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude client
pub struct ClaudeClient {
    config: ClaudeConfig,
    client: Client,
}

#[derive(Serialize)]
struct MessageParam<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<MessageParam<'a>>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: Option<u32>,
    output_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    model: Option<String>,
    usage: Option<Usage>,
}

impl ClaudeClient {
    /// Model constants
    pub const CLAUDE_3_HAIKU: &'static str = "claude-3-haiku-20240307";
    pub const CLAUDE_3_5_SONNET: &'static str = "claude-3-5-sonnet-20240620";

    /// Create a new Claude client from configuration
    pub fn new(config: ClaudeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Build the process-wide completion handle from the environment.
    ///
    /// Never fails: a missing key or unusable configuration leaves the handle
    /// unconfigured with the reason attached.
    pub fn handle_from_env() -> CompletionHandle {
        Self::handle_from_config(ClaudeConfig::from_env())
    }

    /// Turn a configuration lookup outcome into a handle
    pub fn handle_from_config(lookup: Result<Option<ClaudeConfig>>) -> CompletionHandle {
        let config = match lookup {
            Ok(Some(config)) => config,
            Ok(None) => {
                warn!("ANTHROPIC_API_KEY is not set; scope analysis is disabled");
                return CompletionHandle::unconfigured("ANTHROPIC_API_KEY is not set");
            }
            Err(e) => {
                warn!("Claude configuration rejected: {}", e);
                return CompletionHandle::unconfigured(e.to_string());
            }
        };

        match Self::new(config) {
            Ok(client) => CompletionHandle::configured(client),
            Err(e) => {
                warn!("Could not build Claude client: {}", e);
                CompletionHandle::unconfigured(e.to_string())
            }
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.api_url)
    }
}

#[async_trait]
impl CompletionService for ClaudeClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult> {
        debug!(
            model = %request.model_id,
            max_tokens = request.max_tokens,
            prompt_chars = request.prompt.chars().count(),
            "sending Claude messages request"
        );

        let body = MessagesRequest {
            model: &request.model_id,
            max_tokens: request.max_tokens,
            messages: vec![MessageParam {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(e.to_string())
                } else {
                    Error::Network(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Provider(format!(
                "Claude API request failed with status {}: {}",
                status, error_text
            )));
        }

        let payload: MessagesResponse = response
            .json()
            .await
            .map_err(|e| Error::Serialization(e.to_string()))?;

        let text = payload
            .content
            .iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text.as_deref())
            .collect::<Vec<_>>()
            .join("");
        let text = text.trim();

        if text.is_empty() {
            return Err(Error::Provider(
                "Claude response contained no text content".to_string(),
            ));
        }

        let tokens_used = payload
            .usage
            .and_then(|usage| usage.input_tokens?.checked_add(usage.output_tokens?));

        debug!(tokens_used = ?tokens_used, "Claude messages request succeeded");

        Ok(CompletionResult {
            text: text.to_string(),
            model_id: payload.model.unwrap_or_else(|| request.model_id.clone()),
            tokens_used,
        })
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }

    fn provider_name(&self) -> &str {
        "Claude AI"
    }
}
