use crate::catalog::{Activity, ActivityCatalog};
use crate::constants::{
    FALLBACK_ACTIVITY_COUNT, RECENT_COMPLETION_WINDOW, RECOMMEND_MOOD_WINDOW, TOP_MOOD_COUNT,
};
use crate::model::{ActivityLogEntry, FamilyMember, MoodLogEntry};

fn tail<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Most frequent moods in the household's last 7 check-ins, highest count
/// first. Equal counts keep the order in which the moods first appeared.
pub fn dominant_moods(mood_logs: &[MoodLogEntry]) -> Vec<&str> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for entry in tail(mood_logs, RECOMMEND_MOOD_WINDOW) {
        match tally.iter_mut().find(|(mood, _)| *mood == entry.mood) {
            Some((_, count)) => *count += 1,
            None => tally.push((entry.mood.as_str(), 1)),
        }
    }
    // sort_by is stable, so ties stay in first-occurrence order
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
        .into_iter()
        .take(TOP_MOOD_COUNT)
        .map(|(mood, _)| mood)
        .collect()
}

/// Activities that boost one of the dominant recent moods and were not among
/// the last 5 completions, in catalog order. Falls back to the first 5
/// catalog entries when nothing qualifies.
///
/// `_family_members` does not influence the result.
pub fn recommend_activities(
    catalog: &ActivityCatalog,
    mood_logs: &[MoodLogEntry],
    _family_members: &[FamilyMember],
    completed: &[ActivityLogEntry],
) -> Vec<Activity> {
    let top = dominant_moods(mood_logs);
    let recent_completions = tail(completed, RECENT_COMPLETION_WINDOW);

    let recommended: Vec<Activity> = catalog
        .iter()
        .filter(|a| top.iter().any(|mood| a.boosts(mood)))
        .filter(|a| !recent_completions.iter().any(|c| c.activity_id == a.id))
        .cloned()
        .collect();

    if recommended.is_empty() {
        catalog
            .iter()
            .take(FALLBACK_ACTIVITY_COUNT)
            .cloned()
            .collect()
    } else {
        recommended
    }
}
