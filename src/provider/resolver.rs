// src/provider/resolver.rs — Build providers from configuration

use std::sync::Arc;
use std::time::Duration;

use super::fallback::CompletionChain;
use super::huggingface::HuggingFaceProvider;
use super::openrouter::OpenRouterProvider;
use super::{CompletionProvider, EmbeddingProvider, ProviderRef};
use crate::infra::config::Config;

/// Construct the completion chain from the configured refs. Refs whose
/// provider has no credential (or is unknown) are skipped, not errors: an
/// empty chain simply means the AI reranking stage is unavailable.
pub fn build_completion_chain(config: &Config) -> CompletionChain {
    let timeout = Duration::from_secs(config.retrieval.timeout_seconds);
    let mut providers: Vec<Arc<dyn CompletionProvider>> = Vec::new();

    for raw in &config.providers.completion {
        let Some(r) = ProviderRef::parse(raw) else {
            tracing::warn!(reference = %raw, "Ignoring malformed provider ref");
            continue;
        };

        match r.provider.as_str() {
            "openrouter" => {
                if let Some(key) = config.providers.openrouter_key() {
                    providers.push(Arc::new(OpenRouterProvider::new(key, r.model, timeout)));
                } else {
                    tracing::debug!("OpenRouter credential absent, skipping");
                }
            }
            "huggingface" => {
                if let Some(key) = config.providers.huggingface_key() {
                    providers.push(Arc::new(HuggingFaceProvider::new(key, r.model, timeout)));
                } else {
                    tracing::debug!("Hugging Face credential absent, skipping");
                }
            }
            other => {
                tracing::warn!(provider = %other, "Unknown completion provider, skipping");
            }
        }
    }

    CompletionChain::new(providers, timeout)
}

/// Construct the embedding provider, if the configured ref resolves to a
/// credentialed backend. `None` disables the semantic retrieval tier.
pub fn build_embedder(config: &Config) -> Option<Arc<dyn EmbeddingProvider>> {
    let raw = config.providers.embedder.as_deref()?;
    let r = ProviderRef::parse(raw)?;
    let timeout = Duration::from_secs(config.retrieval.timeout_seconds);

    match r.provider.as_str() {
        "huggingface" => {
            let key = config.providers.huggingface_key()?;
            Some(Arc::new(HuggingFaceProvider::new(key, r.model, timeout)))
        }
        other => {
            tracing::warn!(provider = %other, "Unknown embedding provider, disabling semantic tier");
            None
        }
    }
}
