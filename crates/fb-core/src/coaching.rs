use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CHALLENGING_MOODS, IMPROVEMENT_MIN_ACTIVITIES, IMPROVEMENT_NEGATIVE_SHARE, IMPROVEMENT_WINDOW,
};
use crate::dialogue::contextual_advice;
use crate::model::{ActivityLogEntry, MoodLogEntry};

/// Canned coaching shortcuts offered next to the free-text chat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    Tips,
    Mood,
    Conflict,
    Bonding,
}

impl FromStr for QuickAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tips" => Ok(QuickAction::Tips),
            "mood" => Ok(QuickAction::Mood),
            "conflict" => Ok(QuickAction::Conflict),
            "bonding" => Ok(QuickAction::Bonding),
            other => Err(format!("unknown quick action '{other}'")),
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuickAction::Tips => "tips",
            QuickAction::Mood => "mood",
            QuickAction::Conflict => "conflict",
            QuickAction::Bonding => "bonding",
        })
    }
}

pub const DEFAULT_ROLE: &str = "parent";

/// Reply for an action name that is not a `QuickAction`.
pub const UNKNOWN_ACTION_REPLY: &str = "How can I help you today?";

const TIPS: &str = "Here are some communication tips: 1) Practice active listening without interrupting. 2) Use 'I' statements to express feelings. 3) Set aside dedicated family time daily. 4) Create a judgment-free zone for sharing emotions.";
const CONFLICT_STEPS: &str = "When conflicts arise: 1) Take a pause to calm down. 2) Focus on the issue, not the person. 3) Listen to understand, not to respond. 4) Find common ground and compromise. 5) Reconnect after resolution with a hug or kind words.";
const BONDING_IDEAS: &str = "Quality family time doesn't need to be elaborate. Try: 1) Device-free meals together. 2) 15-minute daily check-ins. 3) Weekly game nights. 4) Outdoor walks. 5) Cooking together. The key is being fully present and engaged.";
const NO_MOOD_YET: &str = "I notice you haven't logged your mood yet today. Understanding your emotions is the first step to better communication. Would you like to share how you're feeling?";

/// Reply for a quick action. `Mood` uses the user's most recent entry in
/// `mood_logs` and their role (parent when unset).
pub fn quick_action(
    action: QuickAction,
    mood_logs: &[MoodLogEntry],
    user_id: &str,
    role: Option<&str>,
) -> &'static str {
    match action {
        QuickAction::Tips => TIPS,
        QuickAction::Conflict => CONFLICT_STEPS,
        QuickAction::Bonding => BONDING_IDEAS,
        QuickAction::Mood => match mood_logs.iter().rev().find(|l| l.user_id == user_id) {
            Some(latest) => contextual_advice(&latest.mood, role.unwrap_or(DEFAULT_ROLE)),
            None => NO_MOOD_YET,
        },
    }
}

const NEED_ACTIVITIES: &str = "Try to engage in at least one family activity this week. Regular bonding time strengthens relationships.";
const NEED_CHECK_IN: &str = "I've noticed some challenging emotions lately. Consider having a family check-in to talk about how everyone is feeling.";
const KEEP_GOING: &str = "You're doing great with family activities! Keep up the consistent bonding time.";

/// Household-level nudge from the last 7 activities and last 7 check-ins.
pub fn improvement_suggestion(
    activity_logs: &[ActivityLogEntry],
    mood_logs: &[MoodLogEntry],
) -> &'static str {
    let recent_activities = &activity_logs[activity_logs.len().saturating_sub(IMPROVEMENT_WINDOW)..];
    let recent_moods = &mood_logs[mood_logs.len().saturating_sub(IMPROVEMENT_WINDOW)..];

    if recent_activities.len() < IMPROVEMENT_MIN_ACTIVITIES {
        return NEED_ACTIVITIES;
    }

    let challenging = recent_moods
        .iter()
        .filter(|l| CHALLENGING_MOODS.contains(&l.mood.as_str()))
        .count();

    if challenging as f64 > recent_moods.len() as f64 * IMPROVEMENT_NEGATIVE_SHARE {
        NEED_CHECK_IN
    } else {
        KEEP_GOING
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::activities;
    use crate::dialogue::ADVICE_FALLBACK;

    fn mood(user: &str, m: &str) -> MoodLogEntry {
        MoodLogEntry {
            id: format!("{user}-{m}"),
            user_id: user.to_string(),
            mood: m.to_string(),
            description: None,
            sentiment: None,
            date: "2026-03-01T09:00:00Z".to_string(),
        }
    }

    fn completions(n: usize) -> Vec<ActivityLogEntry> {
        let walk = activities().get("5").unwrap();
        (0..n)
            .map(|_| ActivityLogEntry::completed(walk, Vec::new()))
            .collect()
    }

    #[test]
    fn test_mood_action_uses_latest_entry_for_user() {
        let logs = vec![mood("u1", "sad"), mood("u2", "happy"), mood("u1", "stressed")];
        let reply = quick_action(QuickAction::Mood, &logs, "u1", Some("child"));
        assert!(reply.starts_with("School and life can feel overwhelming"));
    }

    #[test]
    fn test_mood_action_defaults_to_parent() {
        let logs = vec![mood("u1", "stressed")];
        let reply = quick_action(QuickAction::Mood, &logs, "u1", None);
        assert!(reply.starts_with("As a parent"));

        let logs = vec![mood("u1", "calm")];
        assert_eq!(quick_action(QuickAction::Mood, &logs, "u1", None), ADVICE_FALLBACK);
    }

    #[test]
    fn test_mood_action_without_history() {
        let logs = vec![mood("u2", "sad")];
        assert_eq!(quick_action(QuickAction::Mood, &logs, "u1", None), NO_MOOD_YET);
    }

    #[test]
    fn test_static_actions() {
        assert_eq!(quick_action(QuickAction::Tips, &[], "u1", None), TIPS);
        assert_eq!(quick_action(QuickAction::Bonding, &[], "u1", None), BONDING_IDEAS);
        assert!("dance".parse::<QuickAction>().is_err());
        assert_eq!("Conflict".parse::<QuickAction>(), Ok(QuickAction::Conflict));
    }

    #[test]
    fn test_improvement_needs_activities() {
        assert_eq!(improvement_suggestion(&completions(2), &[]), NEED_ACTIVITIES);
    }

    #[test]
    fn test_improvement_flags_challenging_week() {
        let moods: Vec<_> = ["sad", "angry", "stressed", "overwhelmed", "anxious", "happy", "calm"]
            .iter()
            .map(|m| mood("u1", m))
            .collect();
        // 5 of 7 > 4.2
        assert_eq!(improvement_suggestion(&completions(3), &moods), NEED_CHECK_IN);
    }

    #[test]
    fn test_improvement_encourages() {
        let moods: Vec<_> = ["sad", "lonely", "scared", "happy"]
            .iter()
            .map(|m| mood("u1", m))
            .collect();
        // lonely and scared are not counted here
        assert_eq!(improvement_suggestion(&completions(7), &moods), KEEP_GOING);
        assert_eq!(improvement_suggestion(&completions(3), &[]), KEEP_GOING);
    }
}
