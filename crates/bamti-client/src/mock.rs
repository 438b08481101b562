//! Seeded generator for development datasets.
//!
//! Output is a pure function of `(seed, catalog, now)`, so fixtures generated
//! for a demo or a test can be regenerated exactly.

use bamti_analysis::AttributeTagger;
use bamti_core::{Catalog, Comment, Sentiment, SentimentCounts, Video};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map};

/// Generated records fall within this many days before `now`.
const WINDOW_DAYS: i64 = 30;

const POSITIVE_TEXTS: &[&str] = &[
    "크림이 정말 부드럽고 밤 맛이 진해요.",
    "달콤한데 물리지 않아서 하나 더 먹고 싶어요.",
    "촉촉한 식감이 최고예요. 재구매 의사 있습니다.",
    "가성비 좋아요. 이 가격에 이 맛이면 완벽해요.",
    "고소한 밤향이 은은하게 나서 커피랑 잘 어울려요.",
];

const NEGATIVE_TEXTS: &[&str] = &[
    "가격 대비 양이 너무 적어요.",
    "너무 달아서 반도 못 먹었어요. 실망입니다.",
    "인공적인 맛이 나서 아쉬워요.",
    "비싸기만 하고 특별한 건 모르겠어요.",
    "유통기한이 짧아서 선물하기 어렵네요.",
];

const NEUTRAL_TEXTS: &[&str] = &[
    "그냥 무난한 편이에요.",
    "호불호 갈릴 맛인 것 같아요.",
    "포장은 깔끔한데 맛은 평범해요.",
    "한 번쯤 먹어볼 만은 합니다.",
];

const VIDEO_TITLES: &[&str] = &[
    "편의점 밤 티라미수 솔직 리뷰",
    "밤 티라미수 먹방",
    "신상 디저트 전부 먹어봤습니다",
    "밤 티라미수 vs 오리지널 티라미수",
    "이 가격에 이 맛? 밤티 후기",
];

pub struct MockGenerator {
    rng: StdRng,
    tagger: AttributeTagger,
    channels: Vec<String>,
    now: DateTime<Utc>,
}

impl MockGenerator {
    #[must_use]
    pub fn new(seed: u64, catalog: &Catalog, now: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            tagger: AttributeTagger::from_catalog(catalog),
            channels: catalog.channels.clone(),
            now,
        }
    }

    /// Generates `count` comments. Likes follow the sentiment: positive
    /// 50–99, negative 5–34, neutral 20–59; roughly one in eight comments
    /// comes from a source without a like counter.
    pub fn comments(&mut self, count: usize) -> Vec<Comment> {
        (0..count).map(|i| self.comment(i)).collect()
    }

    /// Generates `count` videos (or shorts). Sentiment percentages are
    /// positive 20–99, negative 0–39 and neutral taking the remainder.
    pub fn videos(&mut self, count: usize, shorts: bool) -> Vec<Video> {
        (0..count).map(|i| self.video(i, shorts)).collect()
    }

    fn comment(&mut self, index: usize) -> Comment {
        let roll = self.rng.random_range(0..100);
        let sentiment = match roll {
            0..55 => Sentiment::Positive,
            55..75 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        };
        let (texts, likes_range, score_range) = match sentiment {
            Sentiment::Positive => (POSITIVE_TEXTS, 50..100, 0.7..1.0),
            Sentiment::Negative => (NEGATIVE_TEXTS, 5..35, 0.0..0.3),
            Sentiment::Neutral => (NEUTRAL_TEXTS, 20..60, 0.4..0.6),
        };

        let text = pick(&mut self.rng, texts).to_string();
        let source = if self.channels.is_empty() {
            String::new()
        } else {
            let idx = self.rng.random_range(0..self.channels.len());
            self.channels[idx].clone()
        };
        let likes = if self.rng.random_range(0..8) == 0 {
            None
        } else {
            Some(self.rng.random_range(likes_range))
        };
        let score: f64 = self.rng.random_range(score_range);
        let tagging = self.tagger.tag(&text);

        let mut analysis = Map::new();
        analysis.insert("sentiment_score".to_string(), json!((score * 100.0).round() / 100.0));
        analysis.insert("keywords".to_string(), json!(tagging.keywords));

        Comment {
            id: format!("mock-c{index:04}"),
            text,
            date: self.random_date(),
            sentiment,
            source,
            attributes: tagging.attributes,
            likes,
            analysis,
        }
    }

    fn video(&mut self, index: usize, shorts: bool) -> Video {
        let prefix = if shorts { "mock-s" } else { "mock-v" };
        let id = format!("{prefix}{index:03}");
        let title = pick(&mut self.rng, VIDEO_TITLES);
        let title = if shorts {
            format!("{title} #shorts")
        } else {
            title.to_string()
        };

        let views: u64 = self.rng.random_range(1_000..500_000);
        let likes = views / self.rng.random_range(20..60);
        let comments = likes / self.rng.random_range(5..20);

        let positive: u64 = self.rng.random_range(20..100);
        let negative: u64 = self.rng.random_range(0..40).min(100 - positive);
        let neutral = 100 - positive - negative;

        Video {
            thumbnail_url: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
            id,
            title,
            views,
            likes,
            comments,
            publish_date: self.random_date(),
            sentiments: SentimentCounts::new(positive, negative, neutral),
            is_short: shorts,
        }
    }

    fn random_date(&mut self) -> DateTime<Utc> {
        let minutes = self.rng.random_range(0..WINDOW_DAYS * 24 * 60);
        self.now - Duration::minutes(minutes)
    }
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}
