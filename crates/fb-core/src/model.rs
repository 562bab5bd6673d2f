//! Log records and household profile types.
//!
//! Field names serialize in camelCase so the same JSON documents can be
//! stored under the `user`, `familyMembers`, `moodLogs` and `activityLogs`
//! keys. Constructors validate; deserialized records are checked with
//! `validate` before they are accepted into a store.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Activity, ActivityCatalog, EmotionCatalog};
use crate::error::{Result, ValidationError};
use crate::time::{now_iso8601, parse_day};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        })
    }
}

/// Polarity plus confidence. Confidence is not clamped and exceeds 1.0
/// once four or more terms of one polarity match.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

impl Default for SentimentRecord {
    fn default() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            confidence: crate::constants::NEUTRAL_CONFIDENCE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodLogEntry {
    pub id: String,
    pub user_id: String,
    pub mood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentRecord>,
    pub date: String,
}

impl MoodLogEntry {
    /// Create an entry stamped now. The mood must exist in `emotions`.
    pub fn new(
        emotions: &EmotionCatalog,
        user_id: &str,
        mood: &str,
        description: Option<String>,
        sentiment: Option<SentimentRecord>,
    ) -> Result<Self> {
        let entry = Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            mood: mood.to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
            sentiment,
            date: now_iso8601(),
        };
        entry.validate(emotions)?;
        Ok(entry)
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn validate(&self, emotions: &EmotionCatalog) -> Result<()> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("moodLog.id"));
        }
        if self.user_id.is_empty() {
            return Err(ValidationError::MissingField("moodLog.userId"));
        }
        if self.mood.is_empty() {
            return Err(ValidationError::MissingField("moodLog.mood"));
        }
        if !emotions.contains(&self.mood) {
            return Err(ValidationError::UnknownEmotion(self.mood.clone()));
        }
        if parse_day(&self.date).is_none() {
            return Err(ValidationError::InvalidDate(self.date.clone()));
        }
        Ok(())
    }

    /// Sentiment with the neutral default for entries logged without one.
    pub fn sentiment_or_neutral(&self) -> SentimentRecord {
        self.sentiment.unwrap_or_default()
    }

    pub fn day(&self) -> Option<i64> {
        parse_day(&self.date)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    pub id: String,
    pub activity_id: String,
    pub activity_title: String,
    pub date: String,
    #[serde(alias = "duration")]
    pub duration_minutes: u32,
    #[serde(default, alias = "participants")]
    pub participant_ids: Vec<String>,
}

impl ActivityLogEntry {
    /// Record a completion of `activity` stamped now, snapshotting its title
    /// and duration.
    pub fn completed(activity: &Activity, participant_ids: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            activity_id: activity.id.clone(),
            activity_title: activity.title.clone(),
            date: now_iso8601(),
            duration_minutes: activity.duration_minutes,
            participant_ids,
        }
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    /// Activity ids are checked against the catalog; retired activities in
    /// old logs are therefore rejected on import.
    pub fn validate(&self, activities: &ActivityCatalog) -> Result<()> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("activityLog.id"));
        }
        if self.activity_id.is_empty() {
            return Err(ValidationError::MissingField("activityLog.activityId"));
        }
        if activities.get(&self.activity_id).is_none() {
            return Err(ValidationError::UnknownActivity(self.activity_id.clone()));
        }
        if parse_day(&self.date).is_none() {
            return Err(ValidationError::InvalidDate(self.date.clone()));
        }
        Ok(())
    }

    pub fn day(&self) -> Option<i64> {
        parse_day(&self.date)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub created_at: String,
}

impl UserProfile {
    pub fn new(name: &str, role: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("user.name"));
        }
        if role.trim().is_empty() {
            return Err(ValidationError::MissingField("user.role"));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            role: role.trim().to_lowercase(),
            created_at: now_iso8601(),
        })
    }

    pub fn as_member(&self) -> FamilyMember {
        FamilyMember {
            id: self.id.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl FamilyMember {
    pub fn new(name: &str, role: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("member.name"));
        }
        if role.trim().is_empty() {
            return Err(ValidationError::MissingField("member.role"));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            role: role.trim().to_lowercase(),
        })
    }
}
