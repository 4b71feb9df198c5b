// src/recommend/orchestrator.rs — Composition of the recommendation pipeline

use std::collections::HashSet;
use std::sync::Arc;

use crate::infra::config::{Config, RetrievalConfig};
use crate::infra::errors::PracticaError;
use crate::profile::{AssessmentRecord, ProfileAnalyzer, SkillProfile};
use crate::provider::fallback::CompletionChain;
use crate::provider::resolver;
use crate::resources::{ResourceRecommender, ResourceStore, ScoredResource};

use super::reranker::AiReranker;
use super::scorer::ProblemScorer;
use super::types::{
    BundleItem, BundleSource, PersonalizedBundle, Problem, RecommendationResult, ScoredProblem,
};

/// Default total size of a personalized bundle.
pub const DEFAULT_BUNDLE_LIMIT: usize = 8;

/// Resource picks reserved in a personalized bundle.
const BUNDLE_RESOURCE_PICKS: usize = 3;

/// Composes ProfileAnalyzer → ProblemScorer → AiReranker for the problem
/// side, and ProfileAnalyzer → ResourceRecommender for the resource side.
/// AI failures never surface; only structurally invalid input errors.
pub struct RecommendationOrchestrator {
    analyzer: ProfileAnalyzer,
    scorer: ProblemScorer,
    reranker: AiReranker,
    resources: ResourceRecommender,
    store: Arc<ResourceStore>,
}

impl RecommendationOrchestrator {
    pub fn new(
        chain: Arc<CompletionChain>,
        store: Arc<ResourceStore>,
        retrieval: &RetrievalConfig,
    ) -> Self {
        Self {
            analyzer: ProfileAnalyzer::new(),
            scorer: ProblemScorer::new(),
            reranker: AiReranker::new(chain, retrieval.rerank_candidates),
            resources: ResourceRecommender::new(store.clone()),
            store,
        }
    }

    /// Build the full pipeline from configuration: completion chain and
    /// embedder from credentials, fresh empty store.
    pub fn from_config(config: &Config) -> Self {
        let chain = Arc::new(resolver::build_completion_chain(config));
        let embedder = resolver::build_embedder(config);
        let store = Arc::new(ResourceStore::new(embedder));
        Self::new(chain, store, &config.retrieval)
    }

    /// The shared resource store, for seeding and listing.
    pub fn store(&self) -> &Arc<ResourceStore> {
        &self.store
    }

    /// Rank the catalog for this learner, with best-effort AI refinement.
    pub async fn recommend_problems(
        &self,
        history: &[AssessmentRecord],
        catalog: &[Problem],
        limit: usize,
    ) -> Result<RecommendationResult, PracticaError> {
        validate_catalog(catalog)?;

        let profile = self.analyzer.analyze(history);
        let scored = self.scorer.score(catalog, &profile);

        let recommendations = match self.reranker.rerank(&profile, &scored, limit).await {
            Some(merged) => merged,
            None => {
                tracing::debug!("Serving algorithmic ranking");
                let mut algorithmic = scored;
                algorithmic.truncate(limit);
                algorithmic
            }
        };

        let reasoning = overall_reasoning(&profile);
        Ok(RecommendationResult {
            recommendations,
            profile,
            reasoning,
        })
    }

    /// Rank stored resources for a set of topics.
    pub async fn recommend_resources(&self, topics: &[String], k: usize) -> Vec<ScoredResource> {
        self.resources.recommend(topics, k).await
    }

    /// Combined problems-plus-resources output keyed on the learner's weak
    /// topics. Problem picks take priority; resource picks fill up to three
    /// slots after them.
    pub async fn personalized_bundle(
        &self,
        history: &[AssessmentRecord],
        catalog: &[Problem],
        limit: usize,
    ) -> Result<PersonalizedBundle, PracticaError> {
        validate_catalog(catalog)?;

        let profile = self.analyzer.analyze(history);
        let weak_skills = profile.weak_topics.clone();

        let scored = self.scorer.score(catalog, &profile);
        let resource_picks = self
            .resources
            .recommend(&weak_skills, BUNDLE_RESOURCE_PICKS)
            .await;

        let problem_quota = if limit == 0 {
            0
        } else {
            limit.saturating_sub(BUNDLE_RESOURCE_PICKS).max(1)
        };

        let mut items: Vec<BundleItem> = Vec::with_capacity(limit);
        let mut leftovers: Vec<ScoredProblem> = Vec::new();

        for (i, pick) in scored.into_iter().enumerate() {
            if i < problem_quota {
                items.push(BundleItem::Problem {
                    pick,
                    source: BundleSource::ProfileAnalysis,
                });
            } else {
                leftovers.push(pick);
            }
        }

        for pick in resource_picks {
            if items.len() >= limit {
                break;
            }
            items.push(BundleItem::Resource {
                pick,
                source: BundleSource::AiMatching,
            });
        }

        // resources came up short: give the slots back to problems
        for pick in leftovers {
            if items.len() >= limit {
                break;
            }
            items.push(BundleItem::Problem {
                pick,
                source: BundleSource::ProfileAnalysis,
            });
        }

        items.truncate(limit);
        Ok(PersonalizedBundle { items, weak_skills })
    }
}

/// Fail fast on structurally invalid catalogs; degenerate (empty) catalogs
/// are fine.
fn validate_catalog(catalog: &[Problem]) -> Result<(), PracticaError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for problem in catalog {
        if problem.id.trim().is_empty() {
            return Err(PracticaError::InvalidInput(
                "catalog problem with empty id".into(),
            ));
        }
        if problem.title.trim().is_empty() {
            return Err(PracticaError::InvalidInput(format!(
                "catalog problem '{}' has an empty title",
                problem.id
            )));
        }
        if !seen.insert(problem.id.as_str()) {
            return Err(PracticaError::InvalidInput(format!(
                "duplicate problem id '{}' in catalog",
                problem.id
            )));
        }
    }
    Ok(())
}

/// One-paragraph summary of why this set was recommended.
fn overall_reasoning(profile: &SkillProfile) -> String {
    let mut insights = Vec::new();

    if profile.is_new_user {
        insights.push("Starting with foundational problems to build confidence".to_string());
    } else {
        insights.push(format!(
            "Based on {:.0}% success rate and {:.0} average score",
            profile.success_rate, profile.average_score
        ));
    }

    if !profile.skill_gaps.is_empty() {
        insights.push(format!(
            "Focusing on improving: {}",
            profile.skill_gaps.join(", ")
        ));
    }

    if !profile.strong_topics.is_empty() {
        insights.push(format!(
            "Building on strengths in: {}",
            profile.strong_topics.join(", ")
        ));
    }

    insights.join(". ") + "."
}
