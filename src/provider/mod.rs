// src/provider/mod.rs — Remote completion and embedding providers

pub mod fallback;
pub mod huggingface;
pub mod openrouter;
pub mod resolver;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::infra::errors::PracticaError;

/// A remote text-completion service. One prompt in, one completion out;
/// streaming is deliberately not part of this contract.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    async fn complete(&self, prompt: &str) -> Result<String, PracticaError>;
}

/// A remote embedding service. Absent entirely when no credential is
/// configured; callers degrade to keyword retrieval in that case.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    fn id(&self) -> &str;

    async fn embed(&self, text: &str) -> Result<Vec<f32>, PracticaError>;
}

/// Reference to a specific model on a specific provider.
///
/// The model segment may itself contain slashes
/// (e.g. `openrouter/anthropic/claude-3-haiku`).
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProviderRef {
    pub provider: String,
    pub model: String,
}

impl ProviderRef {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }

    /// Parse "provider/model" format; only the first slash splits.
    pub fn parse(s: &str) -> Option<Self> {
        let (provider, model) = s.split_once('/')?;
        if provider.is_empty() || model.is_empty() {
            return None;
        }
        Some(Self {
            provider: provider.to_string(),
            model: model.to_string(),
        })
    }
}

impl std::fmt::Display for ProviderRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.provider, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── ProviderRef tests ──────────────────────────────────────

    #[test]
    fn test_provider_ref_new() {
        let r = ProviderRef::new("huggingface", "microsoft/DialoGPT-large");
        assert_eq!(r.provider, "huggingface");
        assert_eq!(r.model, "microsoft/DialoGPT-large");
    }

    #[test]
    fn test_provider_ref_parse_simple() {
        let r = ProviderRef::parse("openrouter/claude-3-haiku").unwrap();
        assert_eq!(r.provider, "openrouter");
        assert_eq!(r.model, "claude-3-haiku");
    }

    #[test]
    fn test_provider_ref_parse_nested_model() {
        // only the first slash splits; the model keeps its own slashes
        let r = ProviderRef::parse("openrouter/anthropic/claude-3-haiku").unwrap();
        assert_eq!(r.provider, "openrouter");
        assert_eq!(r.model, "anthropic/claude-3-haiku");
    }

    #[test]
    fn test_provider_ref_parse_no_slash() {
        assert!(ProviderRef::parse("no-slash").is_none());
    }

    #[test]
    fn test_provider_ref_parse_empty_segments() {
        assert!(ProviderRef::parse("/model").is_none());
        assert!(ProviderRef::parse("provider/").is_none());
        assert!(ProviderRef::parse("").is_none());
    }

    #[test]
    fn test_provider_ref_display_round_trip() {
        let r = ProviderRef::parse("huggingface/sentence-transformers/all-MiniLM-L6-v2").unwrap();
        assert_eq!(
            format!("{}", r),
            "huggingface/sentence-transformers/all-MiniLM-L6-v2"
        );
    }
}
