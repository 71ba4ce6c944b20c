//! Prompt Relay — forwards a prompt to the completion provider, or serves a
//! template when there is no provider or the call fails.
//!
//! Flow: credential gate → one provider call → first completion, untouched.
//! Demo mode and upstream failure are separate `FallbackReason`s, but only the
//! latter is flagged to the caller (via `note`).

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::config::Config;
use crate::generation::templates::generate_template;
use crate::llm_client::prompts::code_generation_system;
use crate::llm_client::{CompletionProvider, LlmClient, LlmError};

/// Note attached to responses served from a template after an upstream failure.
pub const FALLBACK_NOTE: &str = "Generated using fallback mock response";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No usable credential configured. Normal offline behaviour, not an error.
    DemoMode,
    /// The provider call failed; carries the error text for logs.
    UpstreamFailure(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Completion(String),
    Fallback {
        code: String,
        reason: FallbackReason,
    },
}

impl RelayOutcome {
    /// Splits into the response `code` and optional `note`.
    pub fn into_parts(self) -> (String, Option<String>) {
        match self {
            RelayOutcome::Completion(code) => (code, None),
            RelayOutcome::Fallback {
                code,
                reason: FallbackReason::DemoMode,
            } => (code, None),
            RelayOutcome::Fallback {
                code,
                reason: FallbackReason::UpstreamFailure(_),
            } => (code, Some(FALLBACK_NOTE.to_string())),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RelayOutcome::Fallback { .. })
    }
}

#[derive(Clone)]
pub struct Relay {
    provider: Option<Arc<dyn CompletionProvider>>,
}

impl Relay {
    pub fn new(provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        Self { provider }
    }

    /// Relay that always serves templates.
    pub fn demo() -> Self {
        Self::new(None)
    }

    /// Builds an `LlmClient` only when the config carries a usable credential.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        let provider = match &config.openai_api_key {
            Some(key) => {
                let client = LlmClient::new(
                    config.openai_api_url.clone(),
                    key.clone(),
                    Duration::from_secs(config.llm_timeout_secs),
                )?;
                Some(Arc::new(client) as Arc<dyn CompletionProvider>)
            }
            None => None,
        };
        Ok(Self::new(provider))
    }

    pub fn is_live(&self) -> bool {
        self.provider.is_some()
    }

    /// `prompt` must already be validated as non-empty.
    pub async fn generate(&self, prompt: &str, language: &str) -> RelayOutcome {
        let Some(provider) = &self.provider else {
            info!("No API key configured, serving {language} template");
            return RelayOutcome::Fallback {
                code: generate_template(prompt, language),
                reason: FallbackReason::DemoMode,
            };
        };

        let system = code_generation_system(language);
        match provider.complete(&system, prompt).await {
            Ok(code) => {
                info!("Generated {language} code via completion API");
                RelayOutcome::Completion(code)
            }
            Err(e) => {
                error!("Error generating code: {e}");
                RelayOutcome::Fallback {
                    code: generate_template(prompt, language),
                    reason: FallbackReason::UpstreamFailure(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    struct Echo {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionProvider for Echo {
        async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("{system}\n{prompt}"))
        }
    }

    struct Failing;

    #[async_trait]
    impl CompletionProvider for Failing {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_demo_mode_serves_template_without_note() {
        let outcome = Relay::demo().generate("sort an array", "python").await;
        assert_eq!(
            outcome,
            RelayOutcome::Fallback {
                code: generate_template("sort an array", "python"),
                reason: FallbackReason::DemoMode,
            }
        );
        let (code, note) = outcome.into_parts();
        assert!(code.contains("# sort an array"));
        assert_eq!(note, None);
    }

    #[tokio::test]
    async fn test_live_provider_is_called_once_with_language_in_system() {
        let echo = Arc::new(Echo {
            calls: AtomicUsize::new(0),
        });
        let relay = Relay::new(Some(echo.clone()));
        assert!(relay.is_live());

        let outcome = relay.generate("parse csv", "go").await;
        assert_eq!(echo.calls.load(Ordering::SeqCst), 1);

        let (code, note) = outcome.into_parts();
        assert!(code.contains("Use go programming language."));
        assert!(code.ends_with("\nparse csv"));
        assert_eq!(note, None);
    }

    #[tokio::test]
    async fn test_upstream_failure_falls_back_with_note() {
        let relay = Relay::new(Some(Arc::new(Failing)));
        let outcome = relay.generate("parse csv", "ruby").await;

        assert!(outcome.is_fallback());
        match &outcome {
            RelayOutcome::Fallback {
                reason: FallbackReason::UpstreamFailure(msg),
                ..
            } => assert!(msg.contains("overloaded")),
            other => panic!("expected upstream failure, got {other:?}"),
        }

        let (code, note) = outcome.into_parts();
        assert_eq!(code, generate_template("parse csv", "javascript"));
        assert_eq!(note.as_deref(), Some(FALLBACK_NOTE));
    }

    #[test]
    fn test_from_config_without_key_is_demo() {
        let relay = Relay::from_config(&Config::default()).unwrap();
        assert!(!relay.is_live());
    }

    #[test]
    fn test_from_config_with_key_is_live() {
        let config = Config {
            openai_api_key: Some("sk-test".to_string()),
            ..Config::default()
        };
        assert!(Relay::from_config(&config).unwrap().is_live());
    }

    #[tokio::test]
    async fn test_stalled_upstream_times_out_into_fallback() {
        use axum::{routing::post, Router};

        let upstream = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "too late"
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, upstream).await.unwrap();
        });

        let config = Config {
            openai_api_key: Some("sk-test".to_string()),
            openai_api_url: format!("http://{addr}/v1/chat/completions"),
            llm_timeout_secs: 1,
            ..Config::default()
        };
        let relay = Relay::from_config(&config).unwrap();

        let outcome = relay.generate("slow request", "python").await;
        assert!(
            matches!(
                &outcome,
                RelayOutcome::Fallback {
                    reason: FallbackReason::UpstreamFailure(_),
                    ..
                }
            ),
            "expected upstream failure, got {outcome:?}"
        );

        let (code, note) = outcome.into_parts();
        assert_eq!(code, generate_template("slow request", "python"));
        assert_eq!(note.as_deref(), Some(FALLBACK_NOTE));
    }
}
