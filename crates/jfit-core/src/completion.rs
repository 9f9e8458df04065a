//! Completion service trait and the process-wide service handle

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::Result;

/// A single completion request: one prompt, one model, one reply-length cap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model_id: String,
    pub max_tokens: u32,
    pub prompt: String,
}

/// Result of a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResult {
    pub text: String,
    pub model_id: String,
    pub tokens_used: Option<u32>,
}

/// Trait for text-completion backends (e.g., Claude, an OpenAI-compatible server, a test double)
///
/// Implementations issue exactly one outbound request per `complete` call and
/// report every transport or response-shape failure as an `Err`.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Send the prompt and return the backend's reply text
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult>;

    /// Get the model ID requests should target
    fn model_id(&self) -> &str;

    /// Short human-readable backend name, used in status output
    fn provider_name(&self) -> &str;
}

/// The completion backend as seen by the rest of the system.
///
/// Built once at startup from credential lookup and never mutated afterwards.
/// A missing credential is a state, not a failure.
#[derive(Clone)]
pub enum CompletionHandle {
    Configured(Arc<dyn CompletionService>),
    Unconfigured { reason: String },
}

impl CompletionHandle {
    pub fn configured(service: impl CompletionService + 'static) -> Self {
        CompletionHandle::Configured(Arc::new(service))
    }

    pub fn unconfigured(reason: impl Into<String>) -> Self {
        CompletionHandle::Unconfigured {
            reason: reason.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, CompletionHandle::Configured(_))
    }

    /// The service, if one was configured
    pub fn service(&self) -> Option<&dyn CompletionService> {
        match self {
            CompletionHandle::Configured(service) => Some(service.as_ref()),
            CompletionHandle::Unconfigured { .. } => None,
        }
    }

    /// One-line description for banners and logs
    pub fn describe(&self) -> String {
        match self {
            CompletionHandle::Configured(service) => {
                format!("{} ({})", service.provider_name(), service.model_id())
            }
            CompletionHandle::Unconfigured { reason } => format!("not configured: {}", reason),
        }
    }
}

impl std::fmt::Debug for CompletionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionHandle::Configured(service) => f
                .debug_tuple("Configured")
                .field(&service.provider_name())
                .finish(),
            CompletionHandle::Unconfigured { reason } => f
                .debug_struct("Unconfigured")
                .field("reason", reason)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    #[async_trait]
    impl CompletionService for Fixed {
        async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult> {
            Ok(CompletionResult {
                text: "High Fit".to_string(),
                model_id: request.model_id.clone(),
                tokens_used: None,
            })
        }

        fn model_id(&self) -> &str {
            "fixed-model"
        }

        fn provider_name(&self) -> &str {
            "Fixed"
        }
    }

    #[test]
    fn test_handle_states() {
        let handle = CompletionHandle::configured(Fixed);
        assert!(handle.is_configured());
        assert_eq!(handle.service().map(|s| s.model_id()), Some("fixed-model"));
        assert_eq!(handle.describe(), "Fixed (fixed-model)");

        let handle = CompletionHandle::unconfigured("ANTHROPIC_API_KEY is not set");
        assert!(!handle.is_configured());
        assert!(handle.service().is_none());
        assert_eq!(handle.describe(), "not configured: ANTHROPIC_API_KEY is not set");
    }
}
