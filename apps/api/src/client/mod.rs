//! Typed client for the relay's HTTP API, plus the client-side bookkeeping
//! (generation history, download naming).

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::generation::language::{extension_for, Language};
use crate::models::generation::{GenerationRequest, GenerationResult, HealthStatus};

pub mod history;

pub use history::{History, HistoryEntry, HISTORY_LIMIT};

/// Longest prompt the client will send, in characters.
pub const MAX_PROMPT_CHARS: usize = 500;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Please enter a prompt")]
    EmptyPrompt,

    #[error("Prompt is {0} characters, the limit is 500")]
    PromptTooLong(usize),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct CodegenClient {
    client: Client,
    base_url: String,
}

impl CodegenClient {
    /// `base_url` is the server origin, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Trims the prompt and checks it locally before any network call.
    pub async fn generate(
        &self,
        prompt: &str,
        language: Language,
    ) -> Result<GenerationResult, ClientError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ClientError::EmptyPrompt);
        }
        let chars = prompt.chars().count();
        if chars > MAX_PROMPT_CHARS {
            return Err(ClientError::PromptTooLong(chars));
        }

        let body = GenerationRequest {
            prompt: Some(prompt.to_string()),
            language: Some(language.key().to_string()),
        };
        let response = self
            .client
            .post(format!("{}/api/generate-code", self.base_url))
            .json(&body)
            .send()
            .await?;

        let result: GenerationResult = decode(response).await?;
        if let Some(note) = &result.note {
            debug!("Server fell back to a template: {note}");
        }
        Ok(result)
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json().await?)
}

/// File name for saving generated code: `generated-code-<unix millis>.<ext>`.
pub fn download_filename(language: &str, at: DateTime<Utc>) -> String {
    format!(
        "generated-code-{}.{}",
        at.timestamp_millis(),
        extension_for(language)
    )
}
