// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Completion chain, tried in order. Each entry is a "provider/model" ref.
    #[serde(default)]
    pub completion: Vec<String>,

    /// Embedding model as a "provider/model" ref, or None to disable the
    /// semantic retrieval tier.
    pub embedder: Option<String>,

    /// Explicit credentials. When absent, the matching environment variable
    /// is consulted; a missing credential disables that provider.
    pub openrouter_api_key: Option<String>,
    pub huggingface_api_key: Option<String>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            completion: vec![
                "openrouter/anthropic/claude-3-haiku".into(),
                "huggingface/microsoft/DialoGPT-large".into(),
            ],
            embedder: Some("huggingface/sentence-transformers/all-MiniLM-L6-v2".into()),
            openrouter_api_key: None,
            huggingface_api_key: None,
        }
    }
}

impl ProvidersConfig {
    /// Resolve the OpenRouter credential: explicit config wins over env.
    pub fn openrouter_key(&self) -> Option<String> {
        self.openrouter_api_key
            .clone()
            .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
            .filter(|k| !k.is_empty())
    }

    /// Resolve the Hugging Face credential: explicit config wins over env.
    pub fn huggingface_key(&self) -> Option<String> {
        self.huggingface_api_key
            .clone()
            .or_else(|| std::env::var("HUGGINGFACE_API_KEY").ok())
            .filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Deadline for a single outbound provider call, in seconds.
    pub timeout_seconds: u64,

    /// Default number of problem recommendations returned.
    pub default_limit: usize,

    /// Default number of resources returned per retrieval.
    pub default_k: usize,

    /// How many top-scored problems are offered to the AI reranker.
    pub rerank_candidates: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 20,
            default_limit: 5,
            default_k: 5,
            rerank_candidates: 10,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.providers.completion.len(), 2);
        assert!(c.providers.completion[0].starts_with("openrouter/"));
        assert!(c.providers.embedder.is_some());
        assert_eq!(c.retrieval.timeout_seconds, 20);
        assert_eq!(c.retrieval.default_limit, 5);
        assert_eq!(c.retrieval.rerank_candidates, 10);
    }

    #[test]
    fn test_empty_toml_deserializes_to_defaults() {
        let c = Config::load_from_str("").unwrap();
        assert_eq!(c.providers.completion.len(), 2);
        assert_eq!(c.retrieval.default_k, 5);
    }

    #[test]
    fn test_partial_toml_overrides_section() {
        let c = Config::load_from_str(
            "[retrieval]\ntimeout_seconds = 5\ndefault_limit = 3\ndefault_k = 4\nrerank_candidates = 8\n",
        )
        .unwrap();
        assert_eq!(c.retrieval.timeout_seconds, 5);
        assert_eq!(c.retrieval.default_limit, 3);
        // untouched section keeps defaults
        assert_eq!(c.providers.completion.len(), 2);
    }

    #[test]
    fn test_explicit_key_wins_over_env() {
        let p = ProvidersConfig {
            openrouter_api_key: Some("sk-config".into()),
            ..Default::default()
        };
        assert_eq!(p.openrouter_key().as_deref(), Some("sk-config"));
    }

    #[test]
    fn test_empty_explicit_key_is_absent() {
        let p = ProvidersConfig {
            huggingface_api_key: Some(String::new()),
            ..Default::default()
        };
        // an empty key does not count as a configured credential
        if std::env::var("HUGGINGFACE_API_KEY").is_err() {
            assert!(p.huggingface_key().is_none());
        }
    }

    #[test]
    fn test_disable_embedder() {
        let c = Config::load_from_str("[providers]\ncompletion = []\n").unwrap();
        assert!(c.providers.completion.is_empty());
        // embedder falls back to the section default only when the whole
        // section is absent; an explicit section without it means None
        assert!(c.providers.embedder.is_none());
    }
}
