//! FamilyBond well-being analytics.
//!
//! Turns a household's mood and activity logs into sentiment scores,
//! coping suggestions, risk signals, activity recommendations, trend
//! reports, a home dashboard and scripted coaching replies.
//!
//! Zero I/O: every function is a pure transformation over collections the
//! caller owns. Randomness (chat reply selection) is injected.

pub mod catalog;
pub mod checkin;
pub mod coaching;
pub mod constants;
pub mod dialogue;
pub mod error;
pub mod home;
pub mod model;
pub mod patterns;
pub mod recommend;
pub mod report;
pub mod sentiment;
pub mod suggestions;
pub mod time;

pub use catalog::{
    Activity, ActivityCatalog, AgeGroup, Category, Emotion, EmotionCatalog, activities,
    emotion_color, emotion_glyph, emotion_score, emotions,
};
pub use checkin::{CheckIn, check_in, complete_activity};
pub use coaching::{
    DEFAULT_ROLE, QuickAction, UNKNOWN_ACTION_REPLY, improvement_suggestion, quick_action,
};
pub use dialogue::{Route, Topic, chatbot_response, contextual_advice, route};
pub use error::ValidationError;
pub use home::{HomeSummary, home_summary};
pub use model::{
    ActivityLogEntry, FamilyMember, MoodLogEntry, Sentiment, SentimentRecord, UserProfile,
};
pub use patterns::{
    ConcerningPattern, RiskLevel, SupportRecommendation, detect_concerning_patterns,
};
pub use recommend::{dominant_moods, recommend_activities};
pub use report::{HouseholdStats, TimeRange, TrendReport, build_report, household_stats};
pub use sentiment::analyze_text;
pub use suggestions::generate_suggestions;
pub use time::{now_iso8601, now_unix_secs, parse_day, today, unix_to_iso8601};
