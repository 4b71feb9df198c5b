// src/provider/fallback.rs — Completion fallback chain

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use super::CompletionProvider;
use crate::infra::errors::PracticaError;

/// Ordered chain of completion providers (primary first). Each call tries
/// every provider at most once; a provider that fails retriably is put on a
/// short cooldown and skipped by subsequent calls within the window.
pub struct CompletionChain {
    providers: Vec<Arc<dyn CompletionProvider>>,
    cooldowns: Mutex<HashMap<String, Instant>>,
    cooldown_duration: Duration,
    call_timeout: Duration,
}

impl CompletionChain {
    pub fn new(providers: Vec<Arc<dyn CompletionProvider>>, call_timeout: Duration) -> Self {
        Self {
            providers,
            cooldowns: Mutex::new(HashMap::new()),
            cooldown_duration: Duration::from_secs(60),
            call_timeout,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    fn is_cooled_down(&self, id: &str) -> bool {
        let cooldowns = self.cooldowns.lock().expect("cooldown lock poisoned");
        if let Some(cooldown_start) = cooldowns.get(id) {
            cooldown_start.elapsed() < self.cooldown_duration
        } else {
            false
        }
    }

    /// Mark a provider as temporarily unavailable.
    fn mark_failed(&self, id: &str) {
        let mut cooldowns = self.cooldowns.lock().expect("cooldown lock poisoned");
        cooldowns.insert(id.to_string(), Instant::now());
    }

    /// Run a prompt through the chain. Returns the first successful
    /// completion, or `AllProvidersExhausted` / `NoProvider` on a miss.
    pub async fn complete(&self, prompt: &str) -> Result<String, PracticaError> {
        if self.providers.is_empty() {
            return Err(PracticaError::NoProvider);
        }

        for provider in &self.providers {
            if self.is_cooled_down(provider.id()) {
                continue;
            }

            match tokio::time::timeout(self.call_timeout, provider.complete(prompt)).await {
                Ok(Ok(response)) => return Ok(response),
                Ok(Err(e)) => {
                    tracing::warn!(
                        provider = %provider.id(),
                        "Provider failed, trying fallback: {}",
                        e
                    );
                    if e.is_retriable() {
                        self.mark_failed(provider.id());
                    }
                    continue;
                }
                Err(_elapsed) => {
                    tracing::warn!(
                        provider = %provider.id(),
                        timeout_ms = self.call_timeout.as_millis() as u64,
                        "Provider call exceeded deadline, trying fallback"
                    );
                    self.mark_failed(provider.id());
                    continue;
                }
            }
        }

        Err(PracticaError::AllProvidersExhausted)
    }
}
