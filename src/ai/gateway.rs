//! HTTP gateway to the hosted model

use std::fmt::Write as _;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::ai::AssistantGateway;
use crate::config::AiConfig;
use crate::content::ContentStore;
use crate::session::ChatMessage;

/// Errors produced by the gateway
///
/// Every variant is surfaced to the visitor as the same connectivity
/// literal; the distinction exists for logs only.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No API key configured
    #[error("no AI credential configured")]
    MissingCredential,

    /// Transport-level failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success status from the model API
    #[error("model API error: {0}")]
    Api(String),

    /// Response body did not have the expected shape
    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    /// Client construction failed
    #[error("gateway configuration error: {0}")]
    Configuration(String),
}

/// Gateway backed by a Gemini-style `generateContent` endpoint
pub struct HttpAssistantGateway {
    client: reqwest::Client,
    config: AiConfig,
    /// Built once per process from the immutable content store
    preamble: String,
}

impl HttpAssistantGateway {
    /// Create a gateway for the given configuration and site content
    pub fn new(config: AiConfig, content: &ContentStore) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| GatewayError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            preamble: build_preamble(content),
            config,
        })
    }

    /// Extract the reply text from a `generateContent` response body
    fn parse_reply(body: &serde_json::Value) -> Result<String, GatewayError> {
        let parts = body
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .ok_or_else(|| GatewayError::MalformedResponse(format!("unexpected shape: {body}")))?;

        let mut reply = String::new();
        for part in parts {
            if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                reply.push_str(text);
            }
        }
        Ok(reply)
    }
}

#[async_trait]
impl AssistantGateway for HttpAssistantGateway {
    async fn respond(
        &self,
        message: &str,
        _history: &[ChatMessage],
    ) -> Result<String, GatewayError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingCredential)?;

        // A fresh upstream context per call: only the new message is
        // transmitted, the system preamble carries the durable context.
        // Prior turns from `_history` are not replayed.
        let request_body = json!({
            "system_instruction": {
                "parts": [{ "text": self.preamble }]
            },
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": message }]
                }
            ]
        });

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );

        debug!(model = %self.config.model, "sending chat request to model API");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "model API returned error");
            return Err(GatewayError::Api(format!("HTTP {status}: {body}")));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        Self::parse_reply(&body)
    }
}

/// Build the fixed system preamble from the content store
///
/// Mirrors what the site itself shows: bio, skills, project and post
/// summaries, plus the contact address the assistant may hand out.
pub fn build_preamble(content: &ContentStore) -> String {
    let profile = content.profile();

    let mut preamble = format!(
        "You are a helpful AI assistant for {name}'s personal portfolio website.\n\
         Your goal is to answer visitor questions about {name}, their projects, and their writings.\n\
         \n\
         Here is the context about {name}:\n\
         Bio: {bio}\n\
         Skills: {skills}\n",
        name = profile.name,
        bio = profile.bio,
        skills = profile.skills.join(", "),
    );

    preamble.push_str("\nProjects:\n");
    for project in content.projects() {
        let _ = writeln!(
            preamble,
            "- {}: {} (Stack: {})",
            project.title,
            project.description,
            project.tech_stack.join(", ")
        );
    }

    preamble.push_str("\nRecent Blog Posts:\n");
    for post in content.posts() {
        let _ = writeln!(preamble, "- {}: {}", post.title, post.summary);
    }

    preamble.push_str("\nTone: Professional, friendly, and concise.\n");
    if let Some(email) = &profile.socials.email {
        let _ = writeln!(preamble, "If asked about contact info, provide: {email}");
    }
    preamble.push_str(
        "If asked something outside this context, politely explain you are a portfolio assistant.\n",
    );

    preamble
}
