use crate::model::Sentiment;

const SUGGESTIONS: &[(&str, &[&str])] = &[
    (
        "happy",
        &[
            "Keep up the positive energy! Share your happiness with family.",
            "This is a great time to try new activities together.",
            "Consider journaling about what made you happy today.",
        ],
    ),
    (
        "excited",
        &[
            "Channel this energy into a fun family activity!",
            "Share your excitement with your family members.",
            "Great mood for starting new projects together.",
        ],
    ),
    (
        "calm",
        &[
            "Enjoy this peaceful moment. Practice mindfulness together.",
            "Perfect time for deep conversations with family.",
            "Consider a relaxing activity like reading or gentle music.",
        ],
    ),
    (
        "stressed",
        &[
            "Take deep breaths. Consider a short walk or exercise.",
            "Talk to a family member about what's bothering you.",
            "Try breaking down your tasks into smaller, manageable steps.",
            "Remember: it's okay to ask for help.",
        ],
    ),
    (
        "anxious",
        &[
            "Practice grounding techniques: name 5 things you can see, 4 you can touch, 3 you can hear.",
            "Share your worries with someone you trust.",
            "Physical activity can help reduce anxiety.",
            "Consider talking to a counselor if anxiety persists.",
        ],
    ),
    (
        "sad",
        &[
            "It's okay to feel sad. Allow yourself to process these emotions.",
            "Reach out to family or friends for support.",
            "Engage in activities you usually enjoy.",
            "If sadness persists for weeks, consider professional support.",
        ],
    ),
    (
        "angry",
        &[
            "Take a moment to cool down before reacting.",
            "Express your feelings calmly and clearly.",
            "Physical activity can help release anger safely.",
            "Try to understand what triggered this emotion.",
        ],
    ),
    (
        "overwhelmed",
        &[
            "Prioritize your tasks. You don't have to do everything at once.",
            "Ask family members for help with responsibilities.",
            "Take regular breaks throughout the day.",
            "Focus on one thing at a time.",
        ],
    ),
    (
        "tired",
        &[
            "Ensure you're getting enough sleep (7-9 hours for adults, more for children).",
            "Take short breaks during the day.",
            "Stay hydrated and eat nutritious meals.",
            "Consider if you're taking on too much.",
        ],
    ),
    (
        "lonely",
        &[
            "Reach out to family or friends, even just to chat.",
            "Join family activities or suggest new ones.",
            "Remember: you're not alone. Your family cares about you.",
            "Consider joining community groups or activities.",
        ],
    ),
];

const GENERIC_SUGGESTIONS: &[&str] = &[
    "Take time to understand your feelings.",
    "Share your emotions with family members.",
    "Engage in activities that bring you joy.",
];

/// Coping suggestions for a logged mood.
///
/// Dispatch is on the mood alone; `sentiment` is part of the signature so
/// callers can pass the analyzed description, but it does not change the list.
pub fn generate_suggestions(mood: &str, _sentiment: Sentiment) -> &'static [&'static str] {
    SUGGESTIONS
        .iter()
        .find(|(id, _)| *id == mood)
        .map_or(GENERIC_SUGGESTIONS, |(_, list)| *list)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SENTIMENTS: [Sentiment; 3] =
        [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    #[test]
    fn test_sentiment_does_not_change_list() {
        for (mood, expected) in SUGGESTIONS {
            for sentiment in ALL_SENTIMENTS {
                assert_eq!(generate_suggestions(mood, sentiment), *expected);
            }
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(SUGGESTIONS.len(), 10);
        for (mood, list) in SUGGESTIONS {
            assert!((3..=4).contains(&list.len()), "{mood} has {} items", list.len());
        }
    }

    #[test]
    fn test_unknown_mood_falls_back() {
        let list = generate_suggestions("bored", Sentiment::Neutral);
        assert_eq!(list, GENERIC_SUGGESTIONS);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_order_is_stable() {
        let list = generate_suggestions("stressed", Sentiment::Negative);
        assert_eq!(list[0], "Take deep breaths. Consider a short walk or exercise.");
        assert_eq!(list[3], "Remember: it's okay to ask for help.");
    }
}
