//! Remote classifier adapter.
//!
//! Delegates the moderation decision to an external text-classification
//! service over an OpenAI-compatible chat-completions endpoint. The service
//! is asked for a strict JSON verdict; anything that goes wrong — missing
//! credentials, transport errors, timeouts, malformed answers — fails open
//! with a low-confidence allow rather than blocking. Transport trouble must
//! never silently censor legitimate content.

use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::{RemoteError, Result};

use super::{Category, Decision};

/// Confidence attached to fail-open decisions.
pub const FAIL_OPEN_CONFIDENCE: f32 = 0.5;

/// Fixed moderation policy prompt sent as the system turn.
const MODERATION_PROMPT: &str = "\
You are the content moderator for Haven, an anonymous support forum where \
kids and teens (ages 8-16) share their worries. Decide whether the user's \
message may be published.

Block messages containing: profanity, silencing (telling someone to shut up \
or go away), bullying, sarcasm aimed at a person, dismissive responses to \
someone's feelings, harmful content (self-harm encouragement, wishing someone \
gone), sexual content, requests for or sharing of personal information, or \
spam. Allow everything else, including honest descriptions of difficult \
feelings.

Respond with ONLY a JSON object, no other text:
{\"allowed\": true or false, \"reason\": \"short explanation for the writer\", \
\"category\": \"one of profanity|silencing|bullying|sarcasm|dismissive|harmful|sexual|personal_info|spam|none\", \
\"confidence\": 0.0 to 1.0}";

/// Configuration for the remote classifier.
#[derive(Debug, Clone)]
pub struct RemoteClassifierConfig {
    /// Bearer credential for the classification service. `None` means the
    /// classifier is unconfigured and every call fails open.
    pub api_key: Option<String>,
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for RemoteClassifierConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl RemoteClassifierConfig {
    /// Reads configuration from the environment.
    ///
    /// `GROQ_API_KEY` supplies the credential; `HAVEN_MODERATION_ENDPOINT`
    /// and `HAVEN_MODERATION_MODEL` override the defaults when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.api_key = env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty());
        if let Ok(endpoint) = env::var("HAVEN_MODERATION_ENDPOINT") {
            if !endpoint.is_empty() {
                config.endpoint = endpoint;
            }
        }
        if let Ok(model) = env::var("HAVEN_MODERATION_MODEL") {
            if !model.is_empty() {
                config.model = model;
            }
        }
        config
    }

    /// Sets the credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// The verdict object the service is instructed to return.
#[derive(Debug, Deserialize)]
struct RemoteVerdict {
    allowed: bool,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    category: Option<String>,
    confidence: f32,
}

impl RemoteVerdict {
    fn into_decision(self) -> Decision {
        // "none" and unknown labels drop the category; the verdict itself
        // is still honored.
        let category = self.category.as_deref().and_then(Category::from_label);
        let reason = self.reason.filter(|r| !r.trim().is_empty());
        Decision {
            is_allowed: self.allowed,
            category,
            reason,
            confidence: self.confidence.clamp(0.0, 1.0),
        }
    }
}

/// Remote moderation strategy backed by a chat-completions service.
pub struct RemoteClassifier {
    client: Client,
    config: RemoteClassifierConfig,
}

impl RemoteClassifier {
    /// Creates a classifier with the given configuration.
    pub fn new(config: RemoteClassifierConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a classifier configured from the environment.
    pub fn from_env() -> Self {
        Self::new(RemoteClassifierConfig::from_env())
    }

    /// Returns true if a credential is configured.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Classifies the given text, always producing a decision.
    ///
    /// Empty or whitespace-only input is trivially allowed without a
    /// network call. When no credential is configured, or when the round
    /// trip fails in any way, the decision falls open.
    pub async fn classify(&self, text: &str) -> Decision {
        if text.trim().is_empty() {
            return Decision::allowed(1.0);
        }

        let api_key = match &self.config.api_key {
            Some(key) => key.clone(),
            None => {
                tracing::debug!("remote classifier unconfigured, allowing content");
                return fail_open();
            }
        };

        match self.request_verdict(&api_key, text).await {
            Ok(verdict) => verdict.into_decision(),
            Err(error) => {
                tracing::warn!(%error, "remote classification failed, allowing content");
                fail_open()
            }
        }
    }

    async fn request_verdict(&self, api_key: &str, text: &str) -> Result<RemoteVerdict> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": MODERATION_PROMPT },
                { "role": "user", "content": text },
            ],
            "temperature": 0.0,
            "max_tokens": 200,
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .timeout(self.config.timeout)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }

        let body: serde_json::Value = response.json().await?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(RemoteError::MissingContent)?;

        parse_verdict(content)
    }
}

/// Parses the model's reply into a verdict, tolerating markdown fences.
fn parse_verdict(content: &str) -> Result<RemoteVerdict> {
    let trimmed = strip_code_fence(content);
    if trimmed.is_empty() {
        return Err(RemoteError::EmptyResponse);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Strips a surrounding markdown code fence, with or without a language tag.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn fail_open() -> Decision {
    Decision::allowed(FAIL_OPEN_CONFIDENCE)
}
