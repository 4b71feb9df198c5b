// tests/resources_test.rs — Integration test: resource retrieval tiers

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use practica::infra::errors::PracticaError;
use practica::provider::EmbeddingProvider;
use practica::resources::{
    ResourceRecommender, ResourceSeed, ResourceStore, RetrievalTier,
};

/// Deterministic two-axis embedder: "graph" texts on one axis, everything
/// else on the other.
struct AxisEmbedder;

#[async_trait]
impl EmbeddingProvider for AxisEmbedder {
    fn id(&self) -> &str {
        "axis"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, PracticaError> {
        if text.to_lowercase().contains("graph") {
            Ok(vec![1.0, 0.0])
        } else {
            Ok(vec![0.0, 1.0])
        }
    }
}

fn seed(title: &str, description: &str, tags: &[&str]) -> ResourceSeed {
    ResourceSeed {
        title: title.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

fn topics(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

// ─── tier selection ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_store_output_is_subset_of_curated() {
    // with and without an embedding provider, an empty store serves only
    // curated entries
    for store in [
        ResourceStore::new(None),
        ResourceStore::new(Some(Arc::new(AxisEmbedder))),
    ] {
        let rec = ResourceRecommender::new(Arc::new(store));
        let results = rec.recommend(&topics(&["arrays", "sql"]), 10).await;
        assert!(!results.is_empty());
        for r in &results {
            assert_eq!(r.tier, RetrievalTier::Curated);
            assert!(r.resource.id.starts_with("curated-"));
        }
    }
}

#[tokio::test]
async fn test_keyword_ordering_matches_manual_counts() {
    let store = Arc::new(ResourceStore::new(None));
    store
        .seed(vec![
            seed("Rust ownership", "borrowing and lifetimes", &["rust"]),
            seed(
                "Graph algorithms in Rust",
                "BFS, DFS, and rust iterators",
                &["graphs", "rust"],
            ),
            seed("CSS layouts", "flexbox and grid", &["css"]),
        ])
        .await;

    let rec = ResourceRecommender::new(store);
    let results = rec.recommend(&topics(&["rust", "graphs"]), 3).await;

    // manual counts: "Graph algorithms in Rust" = 2, "Rust ownership" = 1,
    // "CSS layouts" = 0
    let scores: Vec<(String, f32)> = results
        .iter()
        .map(|r| (r.resource.title.clone(), r.score))
        .collect();
    assert_eq!(
        scores,
        vec![
            ("Graph algorithms in Rust".to_string(), 2.0),
            ("Rust ownership".to_string(), 1.0),
            ("CSS layouts".to_string(), 0.0),
        ]
    );
}

#[tokio::test]
async fn test_semantic_tier_used_when_provider_available() {
    let store = Arc::new(ResourceStore::new(Some(Arc::new(AxisEmbedder))));
    store
        .seed(vec![
            seed("Graph theory handbook", "spanning trees", &["graphs"]),
            seed("Sorting walkthrough", "merge sort", &["sorting"]),
        ])
        .await;

    let rec = ResourceRecommender::new(store);
    let results = rec.recommend(&topics(&["graph traversal"]), 2).await;

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.tier == RetrievalTier::Semantic));
    assert_eq!(results[0].resource.title, "Graph theory handbook");
    // cosine of aligned axes
    assert!((results[0].score - 1.0).abs() < 1e-6);
    assert!(results[1].score.abs() < 1e-6);
}

// ─── store behavior under retrieval ─────────────────────────────────────────

#[tokio::test]
async fn test_listing_reflects_seeded_resources() {
    let store = Arc::new(ResourceStore::new(None));
    let added = store
        .seed(vec![
            seed("One", "first", &[]),
            seed("Two", "second", &[]),
        ])
        .await;

    let all = store.all();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, added[0].id);
    assert_eq!(all[1].title, "Two");
}

#[tokio::test]
async fn test_concurrent_seeding_keeps_every_resource() {
    let store = Arc::new(ResourceStore::new(None));
    let mut handles = Vec::new();
    for i in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .add(ResourceSeed {
                    title: format!("Resource {}", i),
                    ..Default::default()
                })
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len(), 8);
    // writes serialized: no duplicate ids
    let mut ids: Vec<String> = store.all().into_iter().map(|r| r.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);
}

#[tokio::test]
async fn test_k_zero_returns_nothing() {
    let store = Arc::new(ResourceStore::new(None));
    store.seed(vec![seed("One", "first", &["sql"])]).await;
    let rec = ResourceRecommender::new(store);
    assert!(rec.recommend(&topics(&["sql"]), 0).await.is_empty());
}
