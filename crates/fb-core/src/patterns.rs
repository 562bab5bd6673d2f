//! Sustained negative-mood detection over a user's recent check-ins.
//!
//! This is a query, not an alerting system: results are recomputed from the
//! log on every call and never cached.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    HIGH_RISK_PERCENT, MODERATE_RISK_PERCENT, NEGATIVE_MOODS, PATTERN_MIN_SAMPLE, PATTERN_WINDOW,
};
use crate::model::MoodLogEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportRecommendation {
    Support,
    Professional,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcerningPattern {
    pub level: RiskLevel,
    pub message: &'static str,
    pub recommendation: SupportRecommendation,
    /// Share of negative moods in the sample, 0-100.
    pub percentage: f64,
    pub sample_size: usize,
}

const HIGH_MESSAGE: &str = "We've noticed you've been experiencing difficult emotions frequently. Consider talking to a mental health professional.";
const MODERATE_MESSAGE: &str = "You've had some challenging days recently. Make sure to practice self-care and talk to family.";

pub fn is_negative_mood(mood: &str) -> bool {
    NEGATIVE_MOODS.contains(&mood)
}

/// Inspect the last 14 entries of `user_id` (in log order) and report a
/// risk level when negative moods dominate. Fewer than 7 entries is not
/// enough signal and yields `None`.
pub fn detect_concerning_patterns(
    mood_logs: &[MoodLogEntry],
    user_id: &str,
) -> Option<ConcerningPattern> {
    let user_logs: Vec<&MoodLogEntry> = mood_logs.iter().filter(|l| l.user_id == user_id).collect();
    let recent = &user_logs[user_logs.len().saturating_sub(PATTERN_WINDOW)..];

    if recent.len() < PATTERN_MIN_SAMPLE {
        return None;
    }

    let negative = recent.iter().filter(|l| is_negative_mood(&l.mood)).count();
    let percentage = negative as f64 * 100.0 / recent.len() as f64;

    let (level, message, recommendation) = if percentage >= HIGH_RISK_PERCENT {
        (RiskLevel::High, HIGH_MESSAGE, SupportRecommendation::Professional)
    } else if percentage >= MODERATE_RISK_PERCENT {
        (RiskLevel::Moderate, MODERATE_MESSAGE, SupportRecommendation::Support)
    } else {
        return None;
    };

    Some(ConcerningPattern {
        level,
        message,
        recommendation,
        percentage,
        sample_size: recent.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(user: &str, mood: &str) -> MoodLogEntry {
        MoodLogEntry {
            id: format!("{user}-{mood}"),
            user_id: user.to_string(),
            mood: mood.to_string(),
            description: None,
            sentiment: None,
            date: "2026-03-01T09:00:00Z".to_string(),
        }
    }

    fn logs(user: &str, moods: &[&str]) -> Vec<MoodLogEntry> {
        moods.iter().map(|m| log(user, m)).collect()
    }

    #[test]
    fn test_insufficient_sample() {
        let entries = logs("u1", &["sad"; 6]);
        assert_eq!(detect_concerning_patterns(&entries, "u1"), None);
    }

    #[test]
    fn test_high_at_eighty_percent() {
        let mut moods = vec!["sad"; 8];
        moods.extend(["happy", "calm"]);
        let result = detect_concerning_patterns(&logs("u1", &moods), "u1").unwrap();
        assert_eq!(result.level, RiskLevel::High);
        assert_eq!(result.recommendation, SupportRecommendation::Professional);
        assert_eq!(result.sample_size, 10);
    }

    #[test]
    fn test_moderate_at_exactly_half() {
        let moods = ["sad", "angry", "lonely", "scared", "anxious", "happy", "calm", "happy", "tired", "bored"];
        let result = detect_concerning_patterns(&logs("u1", &moods), "u1").unwrap();
        assert_eq!(result.level, RiskLevel::Moderate);
        assert_eq!(result.recommendation, SupportRecommendation::Support);
        assert_eq!(result.message, MODERATE_MESSAGE);
    }

    #[test]
    fn test_high_at_exactly_seventy() {
        let mut moods = vec!["stressed"; 7];
        moods.extend(["happy"; 3]);
        let result = detect_concerning_patterns(&logs("u1", &moods), "u1").unwrap();
        assert_eq!(result.level, RiskLevel::High);
    }

    #[test]
    fn test_below_half_is_none() {
        let mut moods = vec!["sad"; 4];
        moods.extend(["happy"; 6]);
        assert_eq!(detect_concerning_patterns(&logs("u1", &moods), "u1"), None);
    }

    #[test]
    fn test_only_last_fourteen_count() {
        // 10 old negative entries followed by 14 positive ones
        let mut moods = vec!["sad"; 10];
        moods.extend(["happy"; 14]);
        assert_eq!(detect_concerning_patterns(&logs("u1", &moods), "u1"), None);

        let mut moods = vec!["happy"; 10];
        moods.extend(["sad"; 14]);
        let result = detect_concerning_patterns(&logs("u1", &moods), "u1").unwrap();
        assert_eq!(result.sample_size, 14);
        assert_eq!(result.level, RiskLevel::High);
    }

    #[test]
    fn test_other_users_ignored() {
        let mut entries = logs("u2", &["sad"; 10]);
        entries.extend(logs("u1", &["happy"; 3]));
        assert_eq!(detect_concerning_patterns(&entries, "u1"), None);
        assert!(detect_concerning_patterns(&entries, "u2").is_some());
    }

    #[test]
    fn test_frustrated_is_not_in_negative_set() {
        let entries = logs("u1", &["frustrated"; 10]);
        assert_eq!(detect_concerning_patterns(&entries, "u1"), None);
    }
}
