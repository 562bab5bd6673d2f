use crate::catalog::{ActivityCatalog, EmotionCatalog};
use crate::error::{Result, ValidationError};
use crate::model::{ActivityLogEntry, FamilyMember, MoodLogEntry};
use crate::sentiment::analyze_text;
use crate::suggestions::generate_suggestions;

/// A new mood entry plus the suggestions to show alongside it.
/// The caller appends `entry` to its log.
#[derive(Clone, Debug)]
pub struct CheckIn {
    pub entry: MoodLogEntry,
    pub suggestions: &'static [&'static str],
}

/// Build a mood entry for `user_id`, scoring the optional description.
/// An absent description is analyzed as empty text (neutral).
pub fn check_in(
    emotions: &EmotionCatalog,
    user_id: &str,
    mood: &str,
    description: Option<&str>,
) -> Result<CheckIn> {
    let sentiment = analyze_text(description.unwrap_or(""));
    let entry = MoodLogEntry::new(
        emotions,
        user_id,
        mood,
        description.map(str::to_string),
        Some(sentiment),
    )?;
    Ok(CheckIn {
        suggestions: generate_suggestions(&entry.mood, sentiment.sentiment),
        entry,
    })
}

/// Record a completed activity with every household member as a participant.
pub fn complete_activity(
    activities: &ActivityCatalog,
    activity_id: &str,
    household: &[FamilyMember],
) -> Result<ActivityLogEntry> {
    let activity = activities
        .get(activity_id)
        .ok_or_else(|| ValidationError::UnknownActivity(activity_id.to_string()))?;
    let participants = household.iter().map(|m| m.id.clone()).collect();
    Ok(ActivityLogEntry::completed(activity, participants))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{activities, emotions};
    use crate::model::Sentiment;

    #[test]
    fn test_check_in_scores_description() {
        let result = check_in(emotions(), "u1", "stressed", Some("work was hard and I'm worried")).unwrap();
        let sentiment = result.entry.sentiment.unwrap();
        assert_eq!(sentiment.sentiment, Sentiment::Negative);
        assert_eq!(result.suggestions.len(), 4);
        assert_eq!(result.entry.description.as_deref(), Some("work was hard and I'm worried"));
    }

    #[test]
    fn test_check_in_without_description() {
        let result = check_in(emotions(), "u1", "bored", None).unwrap();
        assert_eq!(result.entry.sentiment.unwrap().sentiment, Sentiment::Neutral);
        assert_eq!(result.suggestions.len(), 3);
    }

    #[test]
    fn test_check_in_rejects_unknown_mood() {
        assert!(check_in(emotions(), "u1", "meh", None).is_err());
    }

    #[test]
    fn test_complete_activity_lists_household() {
        let household = vec![
            FamilyMember::new("Sam", "parent").unwrap(),
            FamilyMember::new("Kit", "child").unwrap(),
        ];
        let entry = complete_activity(activities(), "4", &household).unwrap();
        assert_eq!(entry.activity_title, "Game Night");
        assert_eq!(entry.participant_ids.len(), 2);

        let err = complete_activity(activities(), "99", &household).unwrap_err();
        assert_eq!(err, ValidationError::UnknownActivity("99".to_string()));
    }
}
