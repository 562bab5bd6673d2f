//! Per-member trend reports over a trailing window of days.
//!
//! Days are numbered from the Unix epoch (see `time::parse_day`); the
//! caller passes "today" so reports are reproducible. Entries whose date
//! cannot be parsed are left out of every figure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::EmotionCatalog;
use crate::constants::REPORT_TOP_EMOTIONS;
use crate::model::{ActivityLogEntry, MoodLogEntry};
use crate::patterns::{ConcerningPattern, detect_concerning_patterns};
use crate::time::day_to_date;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Week,
    Month,
}

impl TimeRange {
    pub fn days(self) -> i64 {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
        })
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            other => Err(format!("unknown range '{other}' (week, month)")),
        }
    }
}

/// One calendar day of the trend line. `score` is absent on days without
/// a check-in.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DayPoint {
    pub date: String,
    pub score: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmotionCount {
    pub mood: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub member_id: String,
    pub range: TimeRange,
    pub points: Vec<DayPoint>,
    pub top_emotions: Vec<EmotionCount>,
    pub top_emotion: Option<String>,
    pub average_score: f64,
    pub total_mood_logs: usize,
    pub total_activities: usize,
    pub concern: Option<ConcerningPattern>,
}

/// Build the trend report for `member_id` over the `range` days ending on
/// `today`.
///
/// Only the first check-in of each day feeds the trend line and the
/// emotion tally; every check-in in the window counts toward
/// `total_mood_logs`. Activity totals are household-wide.
pub fn build_report(
    emotions: &EmotionCatalog,
    mood_logs: &[MoodLogEntry],
    activity_logs: &[ActivityLogEntry],
    member_id: &str,
    range: TimeRange,
    today: i64,
) -> TrendReport {
    let start = today - range.days();

    let window: Vec<(i64, &MoodLogEntry)> = mood_logs
        .iter()
        .filter(|l| l.user_id == member_id)
        .filter_map(|l| l.day().map(|d| (d, l)))
        .filter(|(d, _)| *d >= start)
        .collect();

    let mut points = Vec::with_capacity(range.days() as usize);
    let mut tally: Vec<EmotionCount> = Vec::new();

    for day in (today - range.days() + 1)..=today {
        let first = window.iter().find(|(d, _)| *d == day).map(|(_, l)| *l);
        let score = first.map(|entry| {
            match tally.iter_mut().find(|c| c.mood == entry.mood) {
                Some(c) => c.count += 1,
                None => tally.push(EmotionCount {
                    mood: entry.mood.clone(),
                    count: 1,
                }),
            }
            emotions.score(&entry.mood)
        });
        points.push(DayPoint {
            date: day_to_date(day),
            score,
        });
    }

    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally.truncate(REPORT_TOP_EMOTIONS);

    let scored: Vec<u8> = points.iter().filter_map(|p| p.score).collect();
    let average_score = if scored.is_empty() {
        0.0
    } else {
        scored.iter().map(|&s| s as f64).sum::<f64>() / scored.len() as f64
    };

    let total_activities = activity_logs
        .iter()
        .filter_map(|l| l.day())
        .filter(|d| *d >= start)
        .count();

    TrendReport {
        member_id: member_id.to_string(),
        range,
        top_emotion: tally.first().map(|c| c.mood.clone()),
        top_emotions: tally,
        points,
        average_score,
        total_mood_logs: window.len(),
        total_activities,
        concern: detect_concerning_patterns(mood_logs, member_id),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdStats {
    pub mood_logs: usize,
    pub activities: usize,
}

/// Lifetime totals shown on the profile: the user's own check-ins and the
/// household's completed activities.
pub fn household_stats(
    user_id: &str,
    mood_logs: &[MoodLogEntry],
    activity_logs: &[ActivityLogEntry],
) -> HouseholdStats {
    HouseholdStats {
        mood_logs: mood_logs.iter().filter(|l| l.user_id == user_id).count(),
        activities: activity_logs.len(),
    }
}
