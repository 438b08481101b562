//! Record types shared by every stage of the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closed three-way sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Display order used by charts and tables.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Korean label shown in the dashboard badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "긍정",
            Sentiment::Negative => "부정",
            Sentiment::Neutral => "중립",
        }
    }

    /// Parses either the wire name (`positive`) or the Korean label (`긍정`).
    ///
    /// Returns `None` for anything else; callers treat that as "no constraint".
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "positive" | "긍정" => Some(Sentiment::Positive),
            "negative" | "부정" => Some(Sentiment::Negative),
            "neutral" | "중립" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-negative counts per sentiment class.
///
/// Producers may fill these with raw counts or with percentages; nothing here
/// assumes they sum to 100, and a zero total is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub negative: u64,
    #[serde(default)]
    pub neutral: u64,
}

impl SentimentCounts {
    #[must_use]
    pub fn new(positive: u64, negative: u64, neutral: u64) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// Sum of the three classes, saturating at `u64::MAX`.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.positive
            .saturating_add(self.negative)
            .saturating_add(self.neutral)
    }

    #[must_use]
    pub fn get(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn increment(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive = self.positive.saturating_add(1),
            Sentiment::Negative => self.negative = self.negative.saturating_add(1),
            Sentiment::Neutral => self.neutral = self.neutral.saturating_add(1),
        }
    }

    /// Adds another set of counts into this one.
    pub fn add(&mut self, other: &SentimentCounts) {
        self.positive = self.positive.saturating_add(other.positive);
        self.negative = self.negative.saturating_add(other.negative);
        self.neutral = self.neutral.saturating_add(other.neutral);
    }

    /// Fraction of the total that falls in `sentiment`, in `[0.0, 1.0]`.
    ///
    /// A zero total yields `0.0`. The sum is taken in `f64` so counters near
    /// `u64::MAX` still give the right proportion.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, sentiment: Sentiment) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        let total = self.positive as f64 + self.negative as f64 + self.neutral as f64;
        self.get(sentiment) as f64 / total
    }
}

/// A single analyzed social-media comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub date: DateTime<Utc>,
    pub sentiment: Sentiment,
    /// Channel the comment came from, e.g. `유튜브`, `커뮤니티`, `틱톡`.
    pub source: String,
    #[serde(default)]
    pub attributes: Vec<String>,
    /// `None` means the source has no like counter, which is not the same as zero.
    #[serde(default)]
    pub likes: Option<u64>,
    /// Upstream analysis payload, passed through untouched.
    #[serde(default)]
    pub analysis: Map<String, Value>,
}

impl Comment {
    /// Like count used for ranking; a missing counter ranks as zero.
    #[must_use]
    pub fn engagement(&self) -> u64 {
        self.likes.unwrap_or(0)
    }

    #[must_use]
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| a == attribute)
    }
}

/// A monitored video (long-form or short).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub publish_date: DateTime<Utc>,
    pub sentiments: SentimentCounts,
    pub is_short: bool,
}

impl Video {
    #[must_use]
    pub fn positive_rate(&self) -> f64 {
        self.sentiments.share(Sentiment::Positive)
    }

    #[must_use]
    pub fn negative_rate(&self) -> f64 {
        self.sentiments.share(Sentiment::Negative)
    }
}

/// Sentiment counts for one attribute tag, one row of the attribute chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSentiment {
    pub name: String,
    #[serde(flatten)]
    pub counts: SentimentCounts,
}

/// Headline payload of the sentiment view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentOverview {
    pub summary: String,
    #[serde(default)]
    pub positive_keywords: Vec<String>,
    #[serde(default)]
    pub negative_keywords: Vec<String>,
    #[serde(default)]
    pub attribute_sentiment: Vec<AttributeSentiment>,
}

/// One side (positive or negative) of the comment details payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailsGroup {
    pub summary: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentDetails {
    pub positive: DetailsGroup,
    pub negative: DetailsGroup,
}

impl SentimentDetails {
    #[must_use]
    pub fn group(&self, sentiment: Sentiment) -> Option<&DetailsGroup> {
        match sentiment {
            Sentiment::Positive => Some(&self.positive),
            Sentiment::Negative => Some(&self.negative),
            Sentiment::Neutral => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_parse_accepts_wire_and_korean_labels() {
        assert_eq!(Sentiment::parse("positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::parse("부정"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::parse(" neutral "), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::parse("all"), None);
        assert_eq!(Sentiment::parse("happy"), None);
    }

    #[test]
    fn sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }

    #[test]
    fn share_of_zero_total_is_zero() {
        let counts = SentimentCounts::default();
        assert_eq!(counts.share(Sentiment::Positive), 0.0);
        assert_eq!(counts.share(Sentiment::Negative), 0.0);
        assert!(!counts.share(Sentiment::Neutral).is_nan());
    }

    #[test]
    fn share_uses_total_of_all_three_classes() {
        let counts = SentimentCounts::new(3, 1, 0);
        assert!((counts.share(Sentiment::Positive) - 0.75).abs() < f64::EPSILON);
        assert!((counts.share(Sentiment::Negative) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn increment_and_add_accumulate() {
        let mut counts = SentimentCounts::default();
        counts.increment(Sentiment::Positive);
        counts.increment(Sentiment::Neutral);
        counts.add(&SentimentCounts::new(1, 2, 3));
        assert_eq!(counts, SentimentCounts::new(2, 2, 4));
        assert_eq!(counts.total(), 8);
    }

    #[test]
    fn huge_counters_saturate_instead_of_overflowing() {
        let mut counts = SentimentCounts::new(u64::MAX, 1, 0);
        assert_eq!(counts.total(), u64::MAX);
        counts.increment(Sentiment::Positive);
        counts.add(&SentimentCounts::new(u64::MAX, 0, 2));
        assert_eq!(counts, SentimentCounts::new(u64::MAX, 1, 2));
        assert!(counts.share(Sentiment::Positive) > 0.99);
        assert!(counts.share(Sentiment::Negative) < 1e-9);
    }

    #[test]
    fn missing_likes_rank_as_zero() {
        let comment = Comment {
            id: "c1".to_string(),
            text: "맛있어요".to_string(),
            date: Utc::now(),
            sentiment: Sentiment::Positive,
            source: "커뮤니티".to_string(),
            attributes: vec!["맛".to_string()],
            likes: None,
            analysis: Map::new(),
        };
        assert_eq!(comment.engagement(), 0);
        assert!(comment.likes.is_none());
        assert!(comment.has_attribute("맛"));
        assert!(!comment.has_attribute("가격"));
    }
}
