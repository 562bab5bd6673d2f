//! Home dashboard: today's check-in, weekly activity progress, a short
//! list of recommendations and any concern for the signed-in user.

use serde::Serialize;

use crate::catalog::{Activity, ActivityCatalog};
use crate::constants::{HOME_RECOMMENDATIONS, WEEKLY_ACTIVITY_TARGET};
use crate::model::{ActivityLogEntry, FamilyMember, MoodLogEntry};
use crate::patterns::{ConcerningPattern, detect_concerning_patterns};
use crate::recommend::recommend_activities;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummary {
    pub today_mood: Option<MoodLogEntry>,
    /// Household activities completed in the last week.
    pub weekly_activities: usize,
    /// `weekly_activities / 7`, capped at 1.0.
    pub weekly_progress: f64,
    pub recommendations: Vec<Activity>,
    pub concern: Option<ConcerningPattern>,
}

/// Build the dashboard for `user_id` as of day number `today`.
///
/// The week covers entries with day `>= today - 7`, matching the trend
/// report window.
pub fn home_summary(
    catalog: &ActivityCatalog,
    mood_logs: &[MoodLogEntry],
    family_members: &[FamilyMember],
    activity_logs: &[ActivityLogEntry],
    user_id: &str,
    today: i64,
) -> HomeSummary {
    let today_mood = mood_logs
        .iter()
        .find(|l| l.user_id == user_id && l.day() == Some(today))
        .cloned();

    let week_start = today - WEEKLY_ACTIVITY_TARGET as i64;
    let weekly_activities = activity_logs
        .iter()
        .filter_map(|l| l.day())
        .filter(|d| *d >= week_start)
        .count();
    let weekly_progress = (weekly_activities as f64 / WEEKLY_ACTIVITY_TARGET as f64).min(1.0);

    let mut recommendations =
        recommend_activities(catalog, mood_logs, family_members, activity_logs);
    recommendations.truncate(HOME_RECOMMENDATIONS);

    HomeSummary {
        today_mood,
        weekly_activities,
        weekly_progress,
        recommendations,
        concern: detect_concerning_patterns(mood_logs, user_id),
    }
}
