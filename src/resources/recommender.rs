// src/resources/recommender.rs — Three-tier resource retrieval

use std::sync::Arc;

use serde::Serialize;

use super::curated::curated_resources;
use super::embeddings::cosine_similarity;
use super::store::{Resource, ResourceStore};

/// Which retrieval strategy produced a result. Selected by capability
/// availability, never by request content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalTier {
    Semantic,
    Keyword,
    Curated,
}

/// A resource with its per-request retrieval score attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResource {
    #[serde(flatten)]
    pub resource: Resource,
    pub score: f32,
    pub tier: RetrievalTier,
}

/// Ranks store entries against a set of topic strings, degrading by
/// capability: semantic similarity when an embedding provider is available,
/// keyword overlap when not, and the curated list when the store is empty.
pub struct ResourceRecommender {
    store: Arc<ResourceStore>,
}

impl ResourceRecommender {
    pub fn new(store: Arc<ResourceStore>) -> Self {
        Self { store }
    }

    pub async fn recommend(&self, topics: &[String], k: usize) -> Vec<ScoredResource> {
        if self.store.is_empty() {
            return curated_tier(topics, k);
        }

        if let Some(embedder) = self.store.embedder() {
            match self.semantic_tier(embedder.as_ref(), topics, k).await {
                Ok(results) => return results,
                Err(e) => {
                    // per-call degradation only; the next request tries
                    // the semantic tier again
                    tracing::warn!("Semantic retrieval failed, degrading to keyword: {}", e);
                }
            }
        }

        keyword_tier(&self.store.all(), topics, k)
    }

    async fn semantic_tier(
        &self,
        embedder: &dyn crate::provider::EmbeddingProvider,
        topics: &[String],
        k: usize,
    ) -> Result<Vec<ScoredResource>, crate::infra::errors::PracticaError> {
        let query = embedder.embed(&topics.join(" ")).await?;

        // Resources without a cached embedding are skipped, not scored 0:
        // they cannot be compared meaningfully against the query vector.
        let mut results: Vec<ScoredResource> = self
            .store
            .all()
            .into_iter()
            .filter_map(|resource| {
                let embedding = resource.embedding.as_deref()?;
                let score = cosine_similarity(&query, embedding);
                Some(ScoredResource {
                    resource,
                    score,
                    tier: RetrievalTier::Semantic,
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(k);
        Ok(results)
    }
}

/// Keyword overlap: one point per requested topic whose lowercase form
/// appears in the resource text. Ties keep insertion order (stable sort).
fn keyword_tier(resources: &[Resource], topics: &[String], k: usize) -> Vec<ScoredResource> {
    let needles: Vec<String> = topics.iter().map(|t| t.to_lowercase()).collect();

    let mut results: Vec<ScoredResource> = resources
        .iter()
        .map(|resource| {
            let haystack = resource.haystack();
            let score = needles.iter().filter(|n| haystack.contains(n.as_str())).count() as f32;
            ScoredResource {
                resource: resource.clone(),
                score,
                tier: RetrievalTier::Keyword,
            }
        })
        .collect();

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(k);
    results
}

/// Curated fallback: entries matching any requested topic are kept with
/// their match count as score; when nothing matches, the unfiltered list.
fn curated_tier(topics: &[String], k: usize) -> Vec<ScoredResource> {
    let needles: Vec<String> = topics.iter().map(|t| t.to_lowercase()).collect();
    let list = curated_resources();

    let mut matched: Vec<ScoredResource> = list
        .iter()
        .filter_map(|resource| {
            let haystack = resource.haystack();
            let score = needles.iter().filter(|n| haystack.contains(n.as_str())).count() as f32;
            (score > 0.0).then(|| ScoredResource {
                resource: resource.clone(),
                score,
                tier: RetrievalTier::Curated,
            })
        })
        .collect();

    if matched.is_empty() {
        matched = list
            .into_iter()
            .map(|resource| ScoredResource {
                resource,
                score: 0.0,
                tier: RetrievalTier::Curated,
            })
            .collect();
    } else {
        matched.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    }

    matched.truncate(k);
    matched
}
