// src/profile/mod.rs — Learner skill profiling

pub mod analyzer;
pub mod types;

pub use analyzer::ProfileAnalyzer;
pub use types::{AssessmentRecord, Difficulty, LearningVelocity, SkillProfile, TopicStats};
