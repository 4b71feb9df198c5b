// src/resources/mod.rs — Learning-resource retrieval engine

pub mod curated;
pub mod embeddings;
pub mod recommender;
pub mod store;

pub use recommender::{ResourceRecommender, RetrievalTier, ScoredResource};
pub use store::{Resource, ResourceKind, ResourceSeed, ResourceStore};
