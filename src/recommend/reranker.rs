// src/recommend/reranker.rs — Best-effort AI refinement of the algorithmic
// ranking

use std::sync::Arc;

use crate::profile::SkillProfile;
use crate::provider::fallback::CompletionChain;

use super::types::{AiSuggestion, ScoredProblem};

/// Sends the profile summary and top candidates to the completion chain and
/// merges the structured suggestion back into the ranking. Every failure
/// mode (no provider, transport error, deadline, unparseable reply) is a
/// miss (`None`), never an error: the caller keeps the algorithmic ranking.
pub struct AiReranker {
    chain: Arc<CompletionChain>,
    /// How many top-scored problems are offered to the model.
    candidates: usize,
}

impl AiReranker {
    pub fn new(chain: Arc<CompletionChain>, candidates: usize) -> Self {
        Self {
            chain,
            candidates: candidates.max(1),
        }
    }

    pub async fn rerank(
        &self,
        profile: &SkillProfile,
        scored: &[ScoredProblem],
        limit: usize,
    ) -> Option<Vec<ScoredProblem>> {
        if self.chain.is_empty() || scored.is_empty() {
            return None;
        }

        let top = &scored[..scored.len().min(self.candidates)];
        let prompt = build_prompt(profile, top);

        let reply = match self.chain.complete(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("AI rerank unavailable, keeping algorithmic ranking: {}", e);
                return None;
            }
        };

        let suggestion = parse_suggestion(&reply)?;
        if !suggestion.focus_areas.is_empty() || !suggestion.motivational_message.is_empty() {
            tracing::debug!(
                focus_areas = ?suggestion.focus_areas,
                motivation = %suggestion.motivational_message,
                "AI suggestion accepted"
            );
        }
        Some(merge(scored, top.len(), &suggestion, limit))
    }
}

/// Build the reranking prompt: profile summary plus an enumerated (1-based)
/// candidate list, requesting a fixed JSON shape.
fn build_prompt(profile: &SkillProfile, top: &[ScoredProblem]) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(
        "As an AI coding education expert, analyze this student profile and \
         recommend the best learning path:\n\n",
    );

    append_profile_section(&mut prompt, profile);
    append_candidates_section(&mut prompt, top);

    prompt.push_str(
        "Provide recommendations in JSON format:\n\
         {\n\
           \"recommendedProblems\": [problem indices from the list above],\n\
           \"learningPath\": \"suggested sequence of topics\",\n\
           \"focusAreas\": [\"areas to prioritize\"],\n\
           \"motivationalMessage\": \"encouraging message for the user\"\n\
         }",
    );

    prompt
}

fn append_profile_section(prompt: &mut String, profile: &SkillProfile) {
    prompt.push_str("User Profile:\n");
    prompt.push_str(&format!("- Level: {}\n", profile.level));
    prompt.push_str(&format!("- Success Rate: {}%\n", profile.success_rate));
    prompt.push_str(&format!("- Average Score: {}\n", profile.average_score));
    prompt.push_str(&format!(
        "- Learning Velocity: {}\n",
        profile.learning_velocity
    ));
    prompt.push_str(&format!(
        "- Strong Topics: {}\n",
        join_or(&profile.strong_topics, "None yet")
    ));
    prompt.push_str(&format!(
        "- Skill Gaps: {}\n\n",
        join_or(&profile.skill_gaps, "None identified")
    ));
}

fn append_candidates_section(prompt: &mut String, top: &[ScoredProblem]) {
    prompt.push_str("Top Problem Options:\n");
    for (i, s) in top.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. {} ({}, {}) - Score: {}\n",
            i + 1,
            s.problem.title,
            s.problem.difficulty,
            s.problem.topic,
            s.recommendation_score
        ));
    }
    prompt.push('\n');
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

/// Parse the provider's reply as a permissive `AiSuggestion`.
///
/// The reply is untrusted: it may wrap the JSON in markdown fences or
/// surrounding prose, and any field may be missing or mistyped. Fields are
/// extracted independently with defaults; only a reply with no JSON object
/// at all is a miss.
pub(crate) fn parse_suggestion(reply: &str) -> Option<AiSuggestion> {
    let json_slice = extract_json_object(reply)?;

    let value: serde_json::Value = match serde_json::from_str(json_slice) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Unparseable AI suggestion, keeping algorithmic ranking: {}", e);
            return None;
        }
    };

    if !value.is_object() {
        tracing::warn!("AI suggestion is not a JSON object, keeping algorithmic ranking");
        return None;
    }

    let recommended_problems = value["recommendedProblems"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_u64())
                .map(|v| v as usize)
                .collect()
        })
        .unwrap_or_default();

    let focus_areas = value["focusAreas"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Some(AiSuggestion {
        recommended_problems,
        learning_path: value["learningPath"].as_str().unwrap_or("").to_string(),
        focus_areas,
        motivational_message: value["motivationalMessage"]
            .as_str()
            .unwrap_or("")
            .to_string(),
    })
}

/// Locate the outermost JSON object in a possibly fenced/prose-wrapped reply.
fn extract_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&reply[start..=end])
}

/// Deterministic merge of the AI suggestion into the algorithmic ranking.
///
/// Suggested indices are 1-based into the candidate slice shown in the
/// prompt; out-of-range or duplicate indices are skipped. Remaining slots
/// fill from the algorithmic ranking in order.
pub(crate) fn merge(
    scored: &[ScoredProblem],
    candidates: usize,
    suggestion: &AiSuggestion,
    limit: usize,
) -> Vec<ScoredProblem> {
    let mut merged: Vec<ScoredProblem> = Vec::with_capacity(limit);
    let mut used: std::collections::HashSet<&str> = std::collections::HashSet::new();
    let top = &scored[..scored.len().min(candidates)];

    for (priority, index) in suggestion.recommended_problems.iter().enumerate() {
        if *index < 1 || *index > top.len() {
            continue;
        }
        let pick = &top[*index - 1];
        if !used.insert(pick.problem.id.as_str()) {
            continue;
        }
        let mut boosted = pick.clone();
        boosted.recommendation_score += 1.0 - priority as f32 * 0.1;
        boosted.ai_recommended = true;
        if !suggestion.learning_path.is_empty() {
            boosted.ai_reasoning = Some(suggestion.learning_path.clone());
        }
        merged.push(boosted);
    }

    for pick in scored {
        if merged.len() >= limit {
            break;
        }
        if used.insert(pick.problem.id.as_str()) {
            merged.push(pick.clone());
        }
    }

    merged.truncate(limit);
    merged
}
