/// Most recent entries per user considered by the pattern detector
pub const PATTERN_WINDOW: usize = 14;

/// Minimum entries per user before a pattern is reported
pub const PATTERN_MIN_SAMPLE: usize = 7;

/// Negative share (percent) at or above which the risk level is high
pub const HIGH_RISK_PERCENT: f64 = 70.0;

/// Negative share (percent) at or above which the risk level is moderate
pub const MODERATE_RISK_PERCENT: f64 = 50.0;

/// Moods the pattern detector counts as negative
pub const NEGATIVE_MOODS: [&str; 7] = [
    "sad",
    "anxious",
    "stressed",
    "overwhelmed",
    "angry",
    "lonely",
    "scared",
];

/// System-wide mood entries the recommender looks at
pub const RECOMMEND_MOOD_WINDOW: usize = 7;

/// Dominant moods used to match activity tags
pub const TOP_MOOD_COUNT: usize = 3;

/// Recent completions suppressed from recommendations
pub const RECENT_COMPLETION_WINDOW: usize = 5;

/// Catalog prefix returned when nothing matches
pub const FALLBACK_ACTIVITY_COUNT: usize = 5;

/// Sentiment confidence when counts tie
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Sentiment confidence floor for a decided polarity
pub const BASE_CONFIDENCE: f64 = 0.7;

/// Confidence added per matched term
pub const CONFIDENCE_STEP: f64 = 0.1;

/// Score for moods missing from the emotion catalog
pub const DEFAULT_EMOTION_SCORE: u8 = 3;

/// Color for moods missing from the emotion catalog
pub const DEFAULT_EMOTION_COLOR: &str = "#9E9E9E";

/// Glyph for moods missing from the emotion catalog
pub const DEFAULT_EMOTION_GLYPH: &str = "😐";

/// Window sizes for the improvement suggestion
pub const IMPROVEMENT_WINDOW: usize = 7;
pub const IMPROVEMENT_MIN_ACTIVITIES: usize = 3;
pub const IMPROVEMENT_NEGATIVE_SHARE: f64 = 0.6;

/// Moods the improvement suggestion counts as challenging
pub const CHALLENGING_MOODS: [&str; 5] = ["sad", "anxious", "stressed", "angry", "overwhelmed"];

/// Emotions listed in a trend report
pub const REPORT_TOP_EMOTIONS: usize = 5;

/// Recommendations shown on the home dashboard
pub const HOME_RECOMMENDATIONS: usize = 3;

/// Activities per week that count as full weekly progress
pub const WEEKLY_ACTIVITY_TARGET: usize = 7;
