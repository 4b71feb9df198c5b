// src/infra/errors.rs — Error types for Practica

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PracticaError {
    // Provider errors (retriable)
    #[error("Provider '{provider}' error: {message}")]
    Provider {
        provider: String,
        message: String,
        retriable: bool,
    },

    #[error("Rate limited by '{provider}', retry after {retry_after_ms}ms")]
    RateLimited {
        provider: String,
        retry_after_ms: u64,
    },

    #[error("All providers exhausted")]
    AllProvidersExhausted,

    // User errors
    #[error("No provider configured. Set OPENROUTER_API_KEY or HUGGINGFACE_API_KEY.")]
    NoProvider,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PracticaError {
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            PracticaError::Provider {
                retriable: true,
                ..
            } | PracticaError::RateLimited { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retriable_provider_error() {
        let e = PracticaError::Provider {
            provider: "openrouter".into(),
            message: "timeout".into(),
            retriable: true,
        };
        assert!(e.is_retriable());
    }

    #[test]
    fn test_non_retriable_provider_error() {
        let e = PracticaError::Provider {
            provider: "openrouter".into(),
            message: "bad request".into(),
            retriable: false,
        };
        assert!(!e.is_retriable());
    }

    #[test]
    fn test_rate_limited_is_retriable() {
        let e = PracticaError::RateLimited {
            provider: "huggingface".into(),
            retry_after_ms: 5000,
        };
        assert!(e.is_retriable());
    }

    #[test]
    fn test_invalid_input_not_retriable() {
        let e = PracticaError::InvalidInput("empty problem id".into());
        assert!(!e.is_retriable());
    }
}
