// src/profile/types.rs — Assessment history and skill profile data model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Problem difficulty as stored in the catalog ("Easy" / "Medium" / "Hard").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// One graded attempt at a problem. Produced by the judging subsystem;
/// consumed read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub topic: String,
    pub difficulty: Difficulty,
    /// 0–100
    pub score: f32,
    pub passed: bool,
}

/// Coarse tier summarizing overall performance, used to calibrate
/// difficulty scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningVelocity {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for LearningVelocity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LearningVelocity::Beginner => write!(f, "beginner"),
            LearningVelocity::Intermediate => write!(f, "intermediate"),
            LearningVelocity::Advanced => write!(f, "advanced"),
        }
    }
}

/// Per-topic aggregates over the assessment history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicStats {
    pub total: u32,
    pub passed: u32,
    pub scores: Vec<f32>,
    pub avg_score: f32,
    /// 0–100
    pub success_rate: f32,
}

/// Derived skill profile. Rebuilt fresh on every call; never persisted.
///
/// Invariants: `skill_gaps` ⊇ `weak_topics`; a topic is never both strong
/// and weak. Topics in the middle band stay unclassified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillProfile {
    pub level: u32,
    pub total_problems: usize,
    pub average_score: f32,
    /// 0–100
    pub success_rate: f32,
    pub skill_gaps: Vec<String>,
    pub strong_topics: Vec<String>,
    pub weak_topics: Vec<String>,
    pub preferred_difficulty: Difficulty,
    pub learning_velocity: LearningVelocity,
    pub topic_experience: HashMap<String, TopicStats>,
    pub is_new_user: bool,
}

impl Default for SkillProfile {
    fn default() -> Self {
        Self {
            level: 1,
            total_problems: 0,
            average_score: 0.0,
            success_rate: 0.0,
            skill_gaps: Vec::new(),
            strong_topics: Vec::new(),
            weak_topics: Vec::new(),
            preferred_difficulty: Difficulty::Easy,
            learning_velocity: LearningVelocity::Beginner,
            topic_experience: HashMap::new(),
            is_new_user: false,
        }
    }
}

impl SkillProfile {
    pub fn has_gap(&self, topic: &str) -> bool {
        self.skill_gaps.iter().any(|t| t == topic)
    }

    pub fn is_strong(&self, topic: &str) -> bool {
        self.strong_topics.iter().any(|t| t == topic)
    }

    pub fn has_seen(&self, topic: &str) -> bool {
        self.topic_experience.contains_key(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }

    #[test]
    fn test_difficulty_serde_pascal_case() {
        let d: Difficulty = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"Medium\"");
    }

    #[test]
    fn test_velocity_serde_lowercase() {
        let v: LearningVelocity = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(v, LearningVelocity::Advanced);
    }

    #[test]
    fn test_default_profile_is_blank_beginner() {
        let p = SkillProfile::default();
        assert_eq!(p.level, 1);
        assert_eq!(p.preferred_difficulty, Difficulty::Easy);
        assert_eq!(p.learning_velocity, LearningVelocity::Beginner);
        assert!(!p.is_new_user);
        assert!(p.topic_experience.is_empty());
    }
}
