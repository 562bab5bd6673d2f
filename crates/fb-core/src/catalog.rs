//! Read-only reference data: the emotion catalog and the activity catalog.
//!
//! Both catalogs are validated on construction (unique ids, activity tags
//! that resolve to emotions) and are otherwise immutable. The built-in
//! catalogs are loaded once per process.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EMOTION_COLOR, DEFAULT_EMOTION_GLYPH, DEFAULT_EMOTION_SCORE};
use crate::error::{Result, ValidationError};

/// One selectable mood. `score` runs 1-5, higher is more positive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emotion {
    pub id: String,
    pub label: String,
    #[serde(alias = "emoji")]
    pub glyph: String,
    pub color: String,
    pub score: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Daily => "daily",
            Category::Weekly => "weekly",
            Category::Monthly => "monthly",
        })
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Category::Daily),
            "weekly" => Ok(Category::Weekly),
            "monthly" => Ok(Category::Monthly),
            other => Err(format!("unknown category '{other}' (daily, weekly, monthly)")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    All,
    Young,
}

/// A family activity. `mood_boost_tags` lists the emotions it is meant to help with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(alias = "duration")]
    pub duration_minutes: u32,
    pub category: Category,
    pub age_group: AgeGroup,
    #[serde(alias = "moodBoost")]
    pub mood_boost_tags: Vec<String>,
    #[serde(default)]
    pub icon: String,
}

impl Activity {
    pub fn boosts(&self, mood: &str) -> bool {
        self.mood_boost_tags.iter().any(|t| t == mood)
    }
}

// ---------------------------------------------------------------------------
// Emotion catalog
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct EmotionCatalog {
    emotions: Vec<Emotion>,
}

impl EmotionCatalog {
    pub fn new(emotions: Vec<Emotion>) -> Result<Self> {
        let mut seen = HashSet::new();
        for emotion in &emotions {
            if emotion.id.is_empty() {
                return Err(ValidationError::MissingField("emotion.id"));
            }
            if !seen.insert(emotion.id.as_str()) {
                return Err(ValidationError::DuplicateId(emotion.id.clone()));
            }
        }
        Ok(Self { emotions })
    }

    pub fn get(&self, id: &str) -> Option<&Emotion> {
        self.emotions.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Emotion> {
        self.emotions.iter()
    }

    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }

    /// Valence score; unknown moods sit at the neutral midpoint.
    pub fn score(&self, id: &str) -> u8 {
        self.get(id).map_or(DEFAULT_EMOTION_SCORE, |e| e.score)
    }

    pub fn color(&self, id: &str) -> &str {
        self.get(id).map_or(DEFAULT_EMOTION_COLOR, |e| e.color.as_str())
    }

    pub fn glyph(&self, id: &str) -> &str {
        self.get(id).map_or(DEFAULT_EMOTION_GLYPH, |e| e.glyph.as_str())
    }
}

// ---------------------------------------------------------------------------
// Activity catalog
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    /// Build a catalog, rejecting duplicate ids and tags that are not emotions.
    pub fn new(activities: Vec<Activity>, emotions: &EmotionCatalog) -> Result<Self> {
        let mut seen = HashSet::new();
        for activity in &activities {
            if activity.id.is_empty() {
                return Err(ValidationError::MissingField("activity.id"));
            }
            if !seen.insert(activity.id.as_str()) {
                return Err(ValidationError::DuplicateId(activity.id.clone()));
            }
            if let Some(tag) = activity
                .mood_boost_tags
                .iter()
                .find(|t| !emotions.contains(t))
            {
                return Err(ValidationError::UnknownTag {
                    activity: activity.id.clone(),
                    tag: tag.clone(),
                });
            }
        }
        Ok(Self { activities })
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    pub fn as_slice(&self) -> &[Activity] {
        &self.activities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Browse the catalog by category and a case-insensitive text query over
    /// title and description. An empty query matches everything.
    pub fn search(&self, category: Option<Category>, query: &str) -> Vec<&Activity> {
        let needle = query.trim().to_lowercase();
        self.activities
            .iter()
            .filter(|a| category.is_none_or(|c| a.category == c))
            .filter(|a| {
                needle.is_empty()
                    || a.title.to_lowercase().contains(&needle)
                    || a.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

/// (id, label, glyph, color, score)
const EMOTIONS: &[(&str, &str, &str, &str, u8)] = &[
    ("happy", "Happy", "😊", "#4CAF50", 5),
    ("excited", "Excited", "🤩", "#FF9800", 5),
    ("calm", "Calm", "😌", "#2196F3", 4),
    ("grateful", "Grateful", "🙏", "#9C27B0", 5),
    ("content", "Content", "😊", "#4CAF50", 4),
    ("tired", "Tired", "😴", "#607D8B", 2),
    ("bored", "Bored", "😑", "#9E9E9E", 2),
    ("confused", "Confused", "😕", "#795548", 2),
    ("anxious", "Anxious", "😰", "#FF5722", 1),
    ("stressed", "Stressed", "😫", "#F44336", 1),
    ("sad", "Sad", "😢", "#3F51B5", 1),
    ("angry", "Angry", "😠", "#D32F2F", 1),
    ("frustrated", "Frustrated", "😤", "#E91E63", 1),
    ("overwhelmed", "Overwhelmed", "😵", "#9C27B0", 1),
    ("lonely", "Lonely", "😔", "#607D8B", 1),
    ("scared", "Scared", "😨", "#673AB7", 1),
];

struct ActivitySeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration: u32,
    category: Category,
    age_group: AgeGroup,
    tags: &'static [&'static str],
    icon: &'static str,
}

const ACTIVITIES: &[ActivitySeed] = &[
    ActivitySeed {
        id: "1",
        title: "No-Screen Dinner",
        description: "Enjoy a meal together without any digital devices. Share stories about your day.",
        duration: 30,
        category: Category::Daily,
        age_group: AgeGroup::All,
        tags: &["stressed", "overwhelmed"],
        icon: "🍽️",
    },
    ActivitySeed {
        id: "2",
        title: "Family Talk Time",
        description: "Sit together for 15 minutes and talk about feelings, dreams, or anything on your mind.",
        duration: 15,
        category: Category::Daily,
        age_group: AgeGroup::All,
        tags: &["sad", "anxious", "lonely"],
        icon: "💬",
    },
    ActivitySeed {
        id: "3",
        title: "Weekly Family Meeting",
        description: "Discuss the week ahead, share concerns, celebrate wins, and plan together.",
        duration: 45,
        category: Category::Weekly,
        age_group: AgeGroup::All,
        tags: &["stressed", "overwhelmed", "confused"],
        icon: "📋",
    },
    ActivitySeed {
        id: "4",
        title: "Game Night",
        description: "Play board games, card games, or fun activities that everyone enjoys.",
        duration: 60,
        category: Category::Weekly,
        age_group: AgeGroup::All,
        tags: &["bored", "sad"],
        icon: "🎮",
    },
    ActivitySeed {
        id: "5",
        title: "Outdoor Walk",
        description: "Take a walk together in nature or around the neighborhood. Fresh air and movement.",
        duration: 30,
        category: Category::Daily,
        age_group: AgeGroup::All,
        tags: &["stressed", "anxious", "tired"],
        icon: "🚶",
    },
    ActivitySeed {
        id: "6",
        title: "Gratitude Session",
        description: "Each person shares three things they are grateful for today.",
        duration: 10,
        category: Category::Daily,
        age_group: AgeGroup::All,
        tags: &["sad", "angry", "frustrated"],
        icon: "🙏",
    },
    ActivitySeed {
        id: "7",
        title: "Movie Night",
        description: "Watch a family-friendly movie together with popcorn and cozy blankets.",
        duration: 120,
        category: Category::Weekly,
        age_group: AgeGroup::All,
        tags: &["bored", "tired"],
        icon: "🎬",
    },
    ActivitySeed {
        id: "8",
        title: "Cooking Together",
        description: "Prepare a meal or bake something together. Great for teamwork and creativity.",
        duration: 45,
        category: Category::Weekly,
        age_group: AgeGroup::All,
        tags: &["bored", "stressed"],
        icon: "👨‍🍳",
    },
    ActivitySeed {
        id: "9",
        title: "Story Time",
        description: "Read a book together or share personal stories from childhood.",
        duration: 20,
        category: Category::Daily,
        age_group: AgeGroup::Young,
        tags: &["anxious", "scared", "sad"],
        icon: "📚",
    },
    ActivitySeed {
        id: "10",
        title: "Arts & Crafts",
        description: "Create something together - draw, paint, or make DIY projects.",
        duration: 45,
        category: Category::Weekly,
        age_group: AgeGroup::Young,
        tags: &["bored", "frustrated", "sad"],
        icon: "🎨",
    },
    ActivitySeed {
        id: "11",
        title: "Music Session",
        description: "Listen to music together, sing, or play instruments if available.",
        duration: 30,
        category: Category::Weekly,
        age_group: AgeGroup::All,
        tags: &["sad", "stressed", "bored"],
        icon: "🎵",
    },
    ActivitySeed {
        id: "12",
        title: "Exercise Together",
        description: "Do yoga, stretching, or simple exercises as a family.",
        duration: 20,
        category: Category::Daily,
        age_group: AgeGroup::All,
        tags: &["stressed", "tired", "anxious"],
        icon: "🧘",
    },
    ActivitySeed {
        id: "13",
        title: "Stargazing",
        description: "Look at the stars together and talk about dreams and the universe.",
        duration: 30,
        category: Category::Weekly,
        age_group: AgeGroup::All,
        tags: &["anxious", "overwhelmed"],
        icon: "⭐",
    },
    ActivitySeed {
        id: "14",
        title: "Photo Album Review",
        description: "Look through old photos and share memories together.",
        duration: 30,
        category: Category::Weekly,
        age_group: AgeGroup::All,
        tags: &["sad"],
        icon: "📸",
    },
    ActivitySeed {
        id: "15",
        title: "Volunteer Together",
        description: "Do a community service activity as a family.",
        duration: 120,
        category: Category::Monthly,
        age_group: AgeGroup::All,
        tags: &["grateful"],
        icon: "🤝",
    },
];

static BUILTIN_EMOTIONS: LazyLock<EmotionCatalog> = LazyLock::new(|| {
    let emotions = EMOTIONS
        .iter()
        .map(|&(id, label, glyph, color, score)| Emotion {
            id: id.to_string(),
            label: label.to_string(),
            glyph: glyph.to_string(),
            color: color.to_string(),
            score,
        })
        .collect();
    EmotionCatalog::new(emotions).unwrap()
});

static BUILTIN_ACTIVITIES: LazyLock<ActivityCatalog> = LazyLock::new(|| {
    let activities = ACTIVITIES
        .iter()
        .map(|s| Activity {
            id: s.id.to_string(),
            title: s.title.to_string(),
            description: s.description.to_string(),
            duration_minutes: s.duration,
            category: s.category,
            age_group: s.age_group,
            mood_boost_tags: s.tags.iter().map(|t| t.to_string()).collect(),
            icon: s.icon.to_string(),
        })
        .collect();
    ActivityCatalog::new(activities, &BUILTIN_EMOTIONS).unwrap()
});

/// The built-in emotion catalog.
pub fn emotions() -> &'static EmotionCatalog {
    &BUILTIN_EMOTIONS
}

/// The built-in activity catalog.
pub fn activities() -> &'static ActivityCatalog {
    &BUILTIN_ACTIVITIES
}

/// Valence score of a mood from the built-in catalog (3 when unknown).
pub fn emotion_score(mood: &str) -> u8 {
    emotions().score(mood)
}

pub fn emotion_color(mood: &str) -> &'static str {
    emotions().color(mood)
}

pub fn emotion_glyph(mood: &str) -> &'static str {
    emotions().glyph(mood)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emotion(id: &str) -> Emotion {
        Emotion {
            id: id.to_string(),
            label: id.to_string(),
            glyph: "?".to_string(),
            color: "#000000".to_string(),
            score: 3,
        }
    }

    fn activity(id: &str, tags: &[&str]) -> Activity {
        Activity {
            id: id.to_string(),
            title: format!("Activity {id}"),
            description: String::new(),
            duration_minutes: 10,
            category: Category::Daily,
            age_group: AgeGroup::All,
            mood_boost_tags: tags.iter().map(|t| t.to_string()).collect(),
            icon: String::new(),
        }
    }

    #[test]
    fn test_builtin_catalogs_load() {
        assert_eq!(emotions().len(), 16);
        assert_eq!(activities().len(), 15);
        assert_eq!(activities().as_slice()[0].title, "No-Screen Dinner");
    }

    #[test]
    fn test_builtin_tags_resolve() {
        for activity in activities().iter() {
            for tag in &activity.mood_boost_tags {
                assert!(emotions().contains(tag), "{} has stray tag {tag}", activity.id);
            }
        }
    }

    #[test]
    fn test_lookup_fallbacks() {
        assert_eq!(emotion_score("happy"), 5);
        assert_eq!(emotion_score("tired"), 2);
        assert_eq!(emotion_score("nope"), 3);
        assert_eq!(emotion_color("sad"), "#3F51B5");
        assert_eq!(emotion_color("nope"), "#9E9E9E");
        assert_eq!(emotion_glyph("angry"), "😠");
        assert_eq!(emotion_glyph("nope"), "😐");
    }

    #[test]
    fn test_duplicate_emotion_rejected() {
        let err = EmotionCatalog::new(vec![emotion("a"), emotion("a")]).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let emotions = EmotionCatalog::new(vec![emotion("sad")]).unwrap();
        let err = ActivityCatalog::new(vec![activity("1", &["sad", "nostalgic"])], &emotions)
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnknownTag { ref tag, .. } if tag == "nostalgic"));
    }

    #[test]
    fn test_duplicate_activity_rejected() {
        let emotions = EmotionCatalog::new(vec![emotion("sad")]).unwrap();
        let err = ActivityCatalog::new(vec![activity("1", &[]), activity("1", &[])], &emotions)
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateId("1".to_string()));
    }

    #[test]
    fn test_search_by_category() {
        let monthly = activities().search(Some(Category::Monthly), "");
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].id, "15");
    }

    #[test]
    fn test_search_matches_title_and_description() {
        let by_title = activities().search(None, "game");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Game Night");

        let by_description = activities().search(None, "POPCORN");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "7");

        assert_eq!(activities().search(None, "   ").len(), activities().len());
        assert!(activities().search(Some(Category::Daily), "stars").is_empty());
    }

    #[test]
    fn test_activity_json_accepts_legacy_field_names() {
        let json = r#"{"id":"1","title":"T","description":"D","duration":30,
            "category":"daily","ageGroup":"all","moodBoost":["sad"],"icon":"x"}"#;
        let parsed: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.duration_minutes, 30);
        assert!(parsed.boosts("sad"));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Weekly".parse::<Category>(), Ok(Category::Weekly));
        assert!("yearly".parse::<Category>().is_err());
        assert_eq!(Category::Monthly.to_string(), "monthly");
    }
}
