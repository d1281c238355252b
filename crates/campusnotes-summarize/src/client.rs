//! Chat-completions client for document summarization.

use std::time::Duration;

use async_trait::async_trait;
use campusnotes_core::models::SummaryResult;
use campusnotes_core::Config;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::traits::{Summarize, SummarizeError};

/// Marker appended when the input text is cut at the configured bound.
pub const TRUNCATION_MARKER: &str = "\n\n[Content truncated due to length...]";

const SYSTEM_PROMPT: &str = "You are an expert academic content summarizer. Your task is to create clear, comprehensive summaries of academic documents.

When summarizing, you should:
1. Identify the main topic and key concepts
2. Extract the most important points and arguments
3. Note any formulas, definitions, or key terms
4. Preserve the logical flow of the content
5. Keep the summary concise but informative (aim for 200-400 words)

Format your response as:
## Overview
[Brief 1-2 sentence overview]

## Key Points
- [Point 1]
- [Point 2]
- [Point 3]
...

## Important Concepts
[List any key terms, formulas, or definitions]

## Summary
[Detailed summary paragraph]";

/// Summarizer client configuration.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub input_limit_chars: usize,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl SummarizerConfig {
    /// Build from the application config; `None` when the summarizer endpoint
    /// is not configured (the pipeline then skips summarization).
    pub fn from_app_config(config: &Config) -> Option<Self> {
        let api_url = config.summarizer_api_url.clone()?;
        let api_key = config.summarizer_api_key.clone()?;
        Some(SummarizerConfig {
            api_url,
            api_key,
            model: config.summarizer_model.clone(),
            input_limit_chars: config.summary_input_limit_chars,
            max_tokens: config.summary_max_tokens,
            timeout: Duration::from_secs(config.summarizer_timeout_secs),
        })
    }
}

// Chat-completions request/response structures
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Summarizer client backed by a chat-completions HTTP endpoint.
pub struct AiSummarizer {
    http_client: reqwest::Client,
    config: SummarizerConfig,
}

/// Truncate text to the configured character bound, appending the truncation
/// marker when content was cut. Inputs at or under the bound pass through
/// unmodified. Deterministic: the same input always yields the same prefix.
pub fn truncate_for_prompt(text: &str, limit_chars: usize) -> String {
    if text.chars().count() > limit_chars {
        let mut truncated: String = text.chars().take(limit_chars).collect();
        truncated.push_str(TRUNCATION_MARKER);
        truncated
    } else {
        text.to_string()
    }
}

/// Map a non-success HTTP status to the caller-visible error kind.
fn error_for_status(status: u16, message: String) -> SummarizeError {
    match status {
        429 => SummarizeError::RateLimited,
        402 => SummarizeError::CreditsExhausted,
        _ => SummarizeError::Api { status, message },
    }
}

impl AiSummarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SummarizeError::Transport(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    fn build_user_prompt(&self, text: &str, file_name: Option<&str>) -> String {
        let title = file_name
            .map(|name| format!(" titled \"{}\"", name))
            .unwrap_or_default();
        format!(
            "Please summarize the following academic document{}:\n\n---\n{}\n---\n\nProvide a structured summary following the format specified.",
            title, text
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Summarize for AiSummarizer {
    async fn summarize(
        &self,
        text: &str,
        file_name: Option<&str>,
    ) -> Result<SummaryResult, SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let truncated = truncate_for_prompt(text, self.config.input_limit_chars);

        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: self.build_user_prompt(&truncated, file_name),
                },
            ],
            max_tokens: self.config.max_tokens,
        };

        tracing::debug!(
            model = %self.config.model,
            input_chars = truncated.chars().count(),
            "Requesting document summary"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = status.as_u16(),
                error = %error_text,
                "Summarization endpoint returned an error"
            );
            return Err(error_for_status(status.as_u16(), error_text));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| SummarizeError::Transport(e.to_string()))?;

        let summary = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(SummarizeError::EmptySummary)?;

        tracing::info!(
            model = %self.config.model,
            summary_len = summary.len(),
            "Summary generated successfully"
        );

        Ok(SummaryResult {
            summary,
            generated_at: Utc::now(),
            model: self.config.model.clone(),
        })
    }
}
