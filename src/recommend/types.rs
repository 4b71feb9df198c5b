// src/recommend/types.rs — Catalog entries, scored picks, pipeline outputs

use serde::{Deserialize, Serialize};

use crate::profile::{Difficulty, SkillProfile};
use crate::resources::ScoredResource;

/// Static catalog entry, owned by the external content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub description: String,
}

/// A catalog entry with its per-request recommendation score attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredProblem {
    #[serde(flatten)]
    pub problem: Problem,
    pub recommendation_score: f32,
    pub reasoning: Vec<String>,
    #[serde(default)]
    pub ai_recommended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_reasoning: Option<String>,
}

/// Structured suggestion parsed from the completion provider's reply.
/// Every field is optional in the wild; missing fields default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AiSuggestion {
    /// 1-based indices into the candidate list shown in the prompt,
    /// in priority order.
    pub recommended_problems: Vec<usize>,
    pub learning_path: String,
    pub focus_areas: Vec<String>,
    pub motivational_message: String,
}

/// Problem-side output of the orchestrator. Not persisted.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResult {
    pub recommendations: Vec<ScoredProblem>,
    pub profile: SkillProfile,
    pub reasoning: String,
}

/// Which sub-engine produced a bundle item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BundleSource {
    #[serde(rename = "profile_analysis")]
    ProfileAnalysis,
    #[serde(rename = "ai_matching")]
    AiMatching,
}

/// One entry of a personalized bundle: a problem pick or a resource pick.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BundleItem {
    Problem {
        #[serde(flatten)]
        pick: ScoredProblem,
        source: BundleSource,
    },
    Resource {
        #[serde(flatten)]
        pick: ScoredResource,
        source: BundleSource,
    },
}

impl BundleItem {
    pub fn source(&self) -> BundleSource {
        match self {
            BundleItem::Problem { source, .. } => *source,
            BundleItem::Resource { source, .. } => *source,
        }
    }
}

/// Combined problems-plus-resources output keyed on the learner's gaps.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalizedBundle {
    pub items: Vec<BundleItem>,
    pub weak_skills: Vec<String>,
}
