// src/provider/huggingface.rs — Hugging Face Inference API (secondary
// completion + feature-extraction embeddings)

use async_trait::async_trait;
use std::time::Duration;

use super::{CompletionProvider, EmbeddingProvider};
use crate::infra::errors::PracticaError;

pub struct HuggingFaceProvider {
    api_key: String,
    model: String,
    client: reqwest::Client,
    base_url: String,
}

impl HuggingFaceProvider {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: "https://api-inference.huggingface.co".into(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn post_inference(
        &self,
        url: String,
        inputs: &str,
    ) -> Result<serde_json::Value, PracticaError> {
        let body = serde_json::json!({ "inputs": inputs });

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| PracticaError::Provider {
                provider: "huggingface".into(),
                message: e.to_string(),
                retriable: e.is_timeout() || e.is_connect(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PracticaError::RateLimited {
                provider: "huggingface".into(),
                retry_after_ms: 5000,
            });
        }

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(PracticaError::Provider {
                provider: "huggingface".into(),
                message: format!("HTTP {}: {}", status, error_body),
                retriable: status.is_server_error(),
            });
        }

        response.json().await.map_err(|e| PracticaError::Provider {
            provider: "huggingface".into(),
            message: format!("Failed to parse response: {}", e),
            retriable: false,
        })
    }
}

#[async_trait]
impl CompletionProvider for HuggingFaceProvider {
    fn id(&self) -> &str {
        "huggingface"
    }

    fn name(&self) -> &str {
        "Hugging Face"
    }

    async fn complete(&self, prompt: &str) -> Result<String, PracticaError> {
        let url = format!("{}/models/{}", self.base_url, self.model);
        let resp = self.post_inference(url, prompt).await?;

        // Text-generation models answer with [{"generated_text": ...}]
        let content = resp[0]["generated_text"]
            .as_str()
            .or_else(|| resp["generated_text"].as_str())
            .unwrap_or("")
            .to_string();

        Ok(content)
    }
}

#[async_trait]
impl EmbeddingProvider for HuggingFaceProvider {
    fn id(&self) -> &str {
        "huggingface"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, PracticaError> {
        let url = format!(
            "{}/pipeline/feature-extraction/{}",
            self.base_url, self.model
        );
        let resp = self.post_inference(url, text).await?;

        // Sentence-transformer pipelines answer either a flat vector or a
        // batch of one; accept both.
        let raw = if resp[0].is_array() {
            &resp[0]
        } else {
            &resp
        };

        let embedding: Vec<f32> = raw
            .as_array()
            .unwrap_or(&vec![])
            .iter()
            .filter_map(|v| v.as_f64())
            .map(|v| v as f32)
            .collect();

        if embedding.is_empty() {
            return Err(PracticaError::Provider {
                provider: "huggingface".into(),
                message: "Empty embedding in response".into(),
                retriable: false,
            });
        }

        Ok(embedding)
    }
}
