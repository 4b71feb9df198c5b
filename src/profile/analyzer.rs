// src/profile/analyzer.rs — Derive a SkillProfile from assessment history

use std::collections::HashMap;

use super::types::{AssessmentRecord, Difficulty, LearningVelocity, SkillProfile, TopicStats};

/// Number of trailing records considered "recent" for difficulty preference.
const RECENT_WINDOW: usize = 5;

/// Converts a learner's raw assessment history into a structured profile.
/// Pure; the same history always yields the same profile.
#[derive(Debug, Default)]
pub struct ProfileAnalyzer;

impl ProfileAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze with the default learner level (1).
    pub fn analyze(&self, history: &[AssessmentRecord]) -> SkillProfile {
        self.analyze_with_level(1, history)
    }

    /// Analyze a history for a learner whose platform level is known.
    pub fn analyze_with_level(&self, level: u32, history: &[AssessmentRecord]) -> SkillProfile {
        let mut profile = SkillProfile {
            level: level.max(1),
            total_problems: history.len(),
            ..Default::default()
        };

        if history.is_empty() {
            profile.is_new_user = true;
            return profile;
        }

        let passed = history.iter().filter(|a| a.passed).count();
        profile.success_rate = passed as f32 / history.len() as f32 * 100.0;
        profile.average_score =
            history.iter().map(|a| a.score).sum::<f32>() / history.len() as f32;

        // Per-topic aggregates
        let mut topic_stats: HashMap<String, TopicStats> = HashMap::new();
        for record in history {
            let stats = topic_stats.entry(record.topic.clone()).or_default();
            stats.total += 1;
            stats.scores.push(record.score);
            if record.passed {
                stats.passed += 1;
            }
        }

        for (topic, stats) in topic_stats.iter_mut() {
            stats.avg_score = stats.scores.iter().sum::<f32>() / stats.scores.len() as f32;
            stats.success_rate = stats.passed as f32 / stats.total as f32 * 100.0;

            if stats.success_rate > 70.0 && stats.avg_score > 70.0 {
                profile.strong_topics.push(topic.clone());
            } else if stats.success_rate < 40.0 || stats.avg_score < 50.0 {
                profile.weak_topics.push(topic.clone());
                profile.skill_gaps.push(topic.clone());
            }
            // Topics between the two bands stay unclassified on purpose.
        }

        // HashMap iteration order is arbitrary; keep the lists stable so
        // downstream prompt text and reasoning are deterministic.
        profile.strong_topics.sort();
        profile.weak_topics.sort();
        profile.skill_gaps.sort();
        profile.topic_experience = topic_stats;

        let recent = &history[history.len().saturating_sub(RECENT_WINDOW)..];
        profile.preferred_difficulty = difficulty_preference(recent);

        profile.learning_velocity = if profile.average_score > 80.0 && profile.success_rate > 75.0 {
            LearningVelocity::Advanced
        } else if profile.average_score > 60.0 && profile.success_rate > 60.0 {
            LearningVelocity::Intermediate
        } else {
            LearningVelocity::Beginner
        };

        profile
    }
}

/// Highest difficulty with a ≥60% success rate over the recent window wins.
fn difficulty_preference(recent: &[AssessmentRecord]) -> Difficulty {
    if recent.is_empty() {
        return Difficulty::Easy;
    }

    let mut per_difficulty: HashMap<Difficulty, (u32, u32)> = HashMap::new();
    for record in recent {
        let (total, passed) = per_difficulty.entry(record.difficulty).or_insert((0, 0));
        *total += 1;
        if record.passed {
            *passed += 1;
        }
    }

    for difficulty in [Difficulty::Hard, Difficulty::Medium, Difficulty::Easy] {
        if let Some((total, passed)) = per_difficulty.get(&difficulty) {
            if *passed as f32 / *total as f32 >= 0.6 {
                return difficulty;
            }
        }
    }

    Difficulty::Easy
}
