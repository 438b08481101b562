//! Plain-text rendering of the dashboard views.

use bamti_analysis::{
    ChannelDistribution, SentimentDistribution, SummaryChange, TrendPoint, VideoSummary,
    ViewStatus,
};
use bamti_core::{AttributeSentiment, Comment, DataOrigin, Sentiment, Video};

/// Comment text longer than this is cut in the table.
const TABLE_TEXT_CHARS: usize = 50;

/// Shortens `text` to `max` characters plus `...`. Counts chars, not bytes,
/// so Hangul is never split mid-character.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

/// Prints the status line for a view. Returns `false` when the status
/// replaces the data display (no keyword, declared error).
pub(crate) fn status(view: &str, status: &ViewStatus) -> bool {
    if let Some(message) = status.message() {
        println!("[{view}] {message}");
        return false;
    }
    if matches!(status, ViewStatus::Ready(DataOrigin::Fallback)) {
        println!("[{view}] API에 연결할 수 없어 예시 데이터를 표시합니다.");
    }
    true
}

pub(crate) fn comments_table(comments: &[Comment]) {
    if comments.is_empty() {
        println!("조건에 맞는 댓글이 없습니다.");
        return;
    }
    println!(
        "{:<10}{:<12}{:<8}{:<6}{:>6}  TEXT",
        "ID", "DATE", "CHANNEL", "SENT", "LIKES"
    );
    for c in comments {
        let likes = c.likes.map_or_else(|| "-".to_string(), |l| l.to_string());
        println!(
            "{:<10}{:<12}{:<8}{:<6}{:>6}  {}",
            c.id,
            c.date.format("%Y-%m-%d").to_string(),
            c.source,
            c.sentiment.label(),
            likes,
            truncate(&c.text, TABLE_TEXT_CHARS)
        );
    }
    println!("{}건", comments.len());
}

pub(crate) fn comment_detail(comment: &Comment) {
    println!("ID:       {}", comment.id);
    println!("날짜:     {}", comment.date.format("%Y-%m-%d %H:%M UTC"));
    println!("채널:     {}", comment.source);
    println!("감성:     {}", comment.sentiment.label());
    println!("속성:     {}", comment.attributes.join(", "));
    println!(
        "좋아요:   {}",
        comment.likes.map_or_else(|| "-".to_string(), |l| l.to_string())
    );
    println!();
    println!("{}", comment.text);
    if !comment.analysis.is_empty() {
        println!();
        match serde_json::to_string_pretty(&comment.analysis) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::warn!(error = %e, "could not render analysis payload"),
        }
    }
}

pub(crate) fn video_grid(title: &str, videos: &[Video]) {
    println!("## {title}");
    if videos.is_empty() {
        println!("영상이 없습니다.");
        return;
    }
    println!(
        "{:<10}{:>10}{:>8}{:>8}{:>7}{:>7}  TITLE",
        "ID", "VIEWS", "LIKES", "CMTS", "POS%", "NEG%"
    );
    for v in videos {
        println!(
            "{:<10}{:>10}{:>8}{:>8}{:>7.1}{:>7.1}  {}",
            v.id,
            v.views,
            v.likes,
            v.comments,
            v.positive_rate() * 100.0,
            v.negative_rate() * 100.0,
            truncate(&v.title, TABLE_TEXT_CHARS)
        );
    }
}

pub(crate) fn video_summary(summary: &VideoSummary) {
    println!(
        "영상 {}개 · 조회수 {} · 좋아요 {} · 댓글 {}",
        summary.count, summary.total_views, summary.total_likes, summary.total_comments
    );
    println!("영상 감성: {}", distribution_line(&summary.sentiments));
}

/// `긍정 62% · 중립 20% · 부정 18%`, or a no-data marker for a zero total.
pub(crate) fn distribution_line(dist: &SentimentDistribution) -> String {
    if dist.is_empty() {
        return "데이터 없음".to_string();
    }
    Sentiment::ALL
        .iter()
        .map(|s| format!("{} {}%", s.label(), dist.rounded_percent(*s)))
        .collect::<Vec<_>>()
        .join(" · ")
}

pub(crate) fn channel_distributions(rows: &[ChannelDistribution]) {
    for row in rows {
        println!("{:<8}{}", row.channel, distribution_line(&row.distribution));
    }
}

pub(crate) fn attribute_rows(rows: &[AttributeSentiment]) {
    for row in rows {
        let dist = SentimentDistribution::from_counts(row.counts);
        println!(
            "{:<10}{:>4}건  {}",
            row.name,
            row.counts.total(),
            distribution_line(&dist)
        );
    }
}

/// `이전 기간 대비 긍정 +1.2%p · 부정 -0.4%p · 댓글 +38 (+15.8%)`.
pub(crate) fn change_line(change: &SummaryChange) -> String {
    format!(
        "이전 기간 대비 긍정 {} · 부정 {} · 댓글 {:+} ({:+.1}%)",
        SummaryChange::points_label(change.positive_points),
        SummaryChange::points_label(change.negative_points),
        change.total_change,
        change.total_percent
    )
}

pub(crate) fn trend_rows(points: &[TrendPoint]) {
    if points.is_empty() {
        println!("데이터 없음");
        return;
    }
    println!("{:<12}{:>6}{:>6}{:>6}", "DATE", "긍정", "중립", "부정");
    for point in points {
        println!(
            "{:<12}{:>6}{:>6}{:>6}",
            point.date.to_string(),
            point.counts.positive,
            point.counts.neutral,
            point.counts.negative
        );
    }
}

#[cfg(test)]
mod tests {
    use bamti_core::SentimentCounts;

    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("맛있어요", 50), "맛있어요");
        let exactly = "가".repeat(50);
        assert_eq!(truncate(&exactly, 50), exactly);
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let long = "밤".repeat(51);
        let cut = truncate(&long, 50);
        assert_eq!(cut.chars().count(), 53);
        assert!(cut.ends_with("..."));
        assert!(cut.starts_with(&"밤".repeat(50)));
    }

    #[test]
    fn distribution_line_orders_and_rounds() {
        let dist = SentimentDistribution::from_counts(SentimentCounts::new(2, 1, 0));
        assert_eq!(distribution_line(&dist), "긍정 67% · 중립 0% · 부정 33%");
    }

    #[test]
    fn change_line_signs_every_delta() {
        let change = SummaryChange {
            positive_points: 1.24,
            negative_points: -0.4,
            total_change: 38,
            total_percent: 15.8,
        };
        assert_eq!(
            change_line(&change),
            "이전 기간 대비 긍정 +1.2%p · 부정 -0.4%p · 댓글 +38 (+15.8%)"
        );
    }

    #[test]
    fn empty_distribution_says_no_data() {
        assert_eq!(
            distribution_line(&SentimentDistribution::default()),
            "데이터 없음"
        );
    }
}
