// src/recommend/scorer.rs — Score a problem catalog against a skill profile

use crate::profile::{Difficulty, LearningVelocity, SkillProfile};

use super::types::{Problem, ScoredProblem};

/// Three-factor weighted scorer. Pure: no I/O, no failure modes, identical
/// inputs always produce identical scores and ordering.
#[derive(Debug, Default)]
pub struct ProblemScorer;

impl ProblemScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score every catalog entry, sorted non-increasing by score. Output
    /// length always equals input length.
    pub fn score(&self, catalog: &[Problem], profile: &SkillProfile) -> Vec<ScoredProblem> {
        let mut scored: Vec<ScoredProblem> = catalog
            .iter()
            .map(|problem| self.score_one(problem, profile))
            .collect();

        scored.sort_by(|a, b| {
            b.recommendation_score
                .partial_cmp(&a.recommendation_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored
    }

    fn score_one(&self, problem: &Problem, profile: &SkillProfile) -> ScoredProblem {
        let difficulty = difficulty_score(problem.difficulty, profile.learning_velocity);
        let topic = topic_score(&problem.topic, profile);
        let progression = progression_score(problem.difficulty, profile);

        let score = 0.3 * difficulty + 0.4 * topic + 0.3 * progression;
        let score = (score * 100.0).round() / 100.0;

        ScoredProblem {
            problem: problem.clone(),
            recommendation_score: score,
            reasoning: reasoning(problem, profile, difficulty, progression),
            ai_recommended: false,
            ai_reasoning: None,
        }
    }
}

/// Difficulty fit for the learner's velocity tier.
fn difficulty_score(difficulty: Difficulty, velocity: LearningVelocity) -> f32 {
    match velocity {
        LearningVelocity::Beginner => match difficulty {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 0.3,
            Difficulty::Hard => 0.1,
        },
        LearningVelocity::Intermediate => match difficulty {
            Difficulty::Easy => 0.5,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 0.6,
        },
        LearningVelocity::Advanced => match difficulty {
            Difficulty::Easy => 0.2,
            Difficulty::Medium => 0.7,
            Difficulty::Hard => 1.0,
        },
    }
}

/// Gaps first, then unexplored topics, then reinforcement of strengths.
fn topic_score(topic: &str, profile: &SkillProfile) -> f32 {
    if profile.has_gap(topic) {
        return 1.0;
    }
    if profile.is_strong(topic) {
        return 0.6;
    }
    if !profile.has_seen(topic) {
        return 0.8;
    }
    0.5
}

/// Encodes "don't jump too far ahead of the current success trend".
fn progression_score(difficulty: Difficulty, profile: &SkillProfile) -> f32 {
    if profile.is_new_user {
        return if difficulty == Difficulty::Easy { 1.0 } else { 0.2 };
    }

    if profile.success_rate > 80.0 {
        match difficulty {
            Difficulty::Hard => 1.0,
            Difficulty::Medium => 0.8,
            Difficulty::Easy => 0.5,
        }
    } else if profile.success_rate > 60.0 {
        if difficulty == Difficulty::Medium {
            1.0
        } else {
            0.7
        }
    } else if difficulty == Difficulty::Easy {
        1.0
    } else {
        0.3
    }
}

/// Explainability strings; never consulted for ranking.
fn reasoning(
    problem: &Problem,
    profile: &SkillProfile,
    difficulty_score: f32,
    progression_score: f32,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if profile.has_gap(&problem.topic) {
        reasons.push(format!("Helps improve weak area: {}", problem.topic));
    }
    if profile.is_strong(&problem.topic) {
        reasons.push(format!("Builds on your strength in {}", problem.topic));
    }
    if progression_score > 0.8 {
        reasons.push("Good difficulty match for your current level".to_string());
    }
    if difficulty_score > 0.8 {
        reasons.push("Appropriate challenge level".to_string());
    }

    if reasons.is_empty() {
        reasons.push("General recommendation".to_string());
    }
    reasons
}
