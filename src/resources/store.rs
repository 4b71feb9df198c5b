// src/resources/store.rs — In-memory resource store with cached embeddings

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::provider::EmbeddingProvider;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Article,
    Video,
    Course,
    Documentation,
    Interactive,
}

/// A learning resource. The embedding is computed once at insertion and
/// cached on the record; it is never recomputed unless the resource is
/// re-added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub kind: ResourceKind,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(skip)]
    pub embedding: Option<Vec<f32>>,
}

impl Resource {
    /// Lowercased text searched by the keyword tier.
    pub(crate) fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.tags.join(" ")).to_lowercase()
    }

    /// Text sent to the embedding provider at insertion.
    fn embed_text(&self) -> String {
        format!("{}. {} {}", self.title, self.description, self.tags.join(", "))
    }
}

/// Bulk seed input, e.g. from an admin action at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceSeed {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub kind: ResourceKind,
}

/// Process-lifetime collection of resources. Reads and writes may come from
/// concurrent callers; writes are serialized by the lock, and the embedding
/// is computed before the lock is taken so readers never wait on the
/// network.
pub struct ResourceStore {
    resources: RwLock<Vec<Resource>>,
    embedder: Option<Arc<dyn EmbeddingProvider>>,
}

impl ResourceStore {
    pub fn new(embedder: Option<Arc<dyn EmbeddingProvider>>) -> Self {
        Self {
            resources: RwLock::new(Vec::new()),
            embedder,
        }
    }

    pub fn has_embedder(&self) -> bool {
        self.embedder.is_some()
    }

    pub(crate) fn embedder(&self) -> Option<&Arc<dyn EmbeddingProvider>> {
        self.embedder.as_ref()
    }

    /// Add one resource. Insertion never blocks on embedding failure: a
    /// resource whose embedding could not be computed is stored without one
    /// and stays invisible to the semantic tier until re-added.
    pub async fn add(&self, seed: ResourceSeed) -> Resource {
        let mut resource = Resource {
            id: uuid::Uuid::new_v4().to_string(),
            title: seed.title,
            url: seed.url,
            kind: seed.kind,
            description: seed.description,
            tags: seed.tags,
            embedding: None,
        };

        if let Some(embedder) = &self.embedder {
            match embedder.embed(&resource.embed_text()).await {
                Ok(embedding) => resource.embedding = Some(embedding),
                Err(e) => {
                    tracing::warn!(
                        title = %resource.title,
                        "Storing resource without embedding: {}",
                        e
                    );
                }
            }
        }

        self.resources
            .write()
            .expect("resource store lock poisoned")
            .push(resource.clone());
        resource
    }

    /// Bulk-add; returns the stored records in insertion order.
    pub async fn seed(&self, seeds: Vec<ResourceSeed>) -> Vec<Resource> {
        let mut added = Vec::with_capacity(seeds.len());
        for seed in seeds {
            added.push(self.add(seed).await);
        }
        added
    }

    /// Snapshot of every stored resource.
    pub fn all(&self) -> Vec<Resource> {
        self.resources
            .read()
            .expect("resource store lock poisoned")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.resources
            .read()
            .expect("resource store lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
