use crate::constants::{BASE_CONFIDENCE, CONFIDENCE_STEP, NEUTRAL_CONFIDENCE};
use crate::model::{Sentiment, SentimentRecord};

const POSITIVE_TERMS: [&str; 14] = [
    "good",
    "great",
    "happy",
    "excited",
    "fun",
    "love",
    "amazing",
    "wonderful",
    "fantastic",
    "joy",
    "peaceful",
    "calm",
    "grateful",
    "blessed",
];

const NEGATIVE_TERMS: [&str; 15] = [
    "bad",
    "sad",
    "angry",
    "upset",
    "frustrated",
    "stressed",
    "worried",
    "anxious",
    "scared",
    "lonely",
    "tired",
    "overwhelmed",
    "difficult",
    "hard",
    "problem",
];

/// Number of terms contained anywhere in `text`. Each term counts at most
/// once, and a term inside a longer word still counts.
fn count_terms(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| text.contains(*term)).count()
}

/// Classify free text by lexical term counts.
///
/// The polarity with more matched terms wins with confidence
/// `0.7 + 0.1 * matches`; a tie (including no matches) is neutral at 0.5.
pub fn analyze_text(text: &str) -> SentimentRecord {
    let lower = text.to_lowercase();
    let positive = count_terms(&lower, &POSITIVE_TERMS);
    let negative = count_terms(&lower, &NEGATIVE_TERMS);

    let (sentiment, matches) = match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => (Sentiment::Positive, positive),
        std::cmp::Ordering::Less => (Sentiment::Negative, negative),
        std::cmp::Ordering::Equal => {
            return SentimentRecord {
                sentiment: Sentiment::Neutral,
                confidence: NEUTRAL_CONFIDENCE,
            };
        }
    };

    SentimentRecord {
        sentiment,
        confidence: BASE_CONFIDENCE + CONFIDENCE_STEP * matches as f64,
    }
}
