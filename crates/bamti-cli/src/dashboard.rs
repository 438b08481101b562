//! View command handlers: acquire, feed the view controller, print.

use bamti_analysis::{CommentsView, SentimentView, SummaryView, VideosView};
use bamti_client::{Acquirer, DashboardClient, FallbackData, MockGenerator};
use bamti_core::{AppConfig, Catalog, Sentiment};
use chrono::Utc;

use crate::render;
use crate::window::Window;

pub(crate) fn build_acquirer(config: &AppConfig) -> anyhow::Result<Acquirer> {
    let client = DashboardClient::new(config)?;
    let fallback = FallbackData::embedded()?;
    Ok(Acquirer::new(client, fallback).with_default_days(config.default_period_days))
}

#[derive(Debug, Clone)]
pub(crate) struct CommentSelection {
    pub(crate) channel: String,
    pub(crate) sentiment: String,
    pub(crate) attribute: String,
    pub(crate) sort: String,
    pub(crate) id: Option<String>,
}

pub(crate) async fn run_comments(acquirer: &Acquirer, window: &Window, selection: &CommentSelection) {
    let mut view = CommentsView::new();
    let generation = view.begin_acquisition();
    let acquired = acquirer
        .comments(window.keyword.as_deref(), Some(window.range))
        .await;
    view.complete_acquisition(generation, acquired);

    if !render::status("댓글", view.status()) {
        return;
    }

    if let Some(id) = &selection.id {
        match view.find(id) {
            Some(comment) => render::comment_detail(comment),
            None => println!("댓글 '{id}'을(를) 찾을 수 없습니다."),
        }
        return;
    }

    view.select_channel(&selection.channel);
    view.select_sentiment(&selection.sentiment);
    view.select_attribute(&selection.attribute);
    view.select_sort(&selection.sort);
    println!("정렬: {}", view.sort().label());
    render::comments_table(view.visible());
}

pub(crate) async fn run_videos(
    acquirer: &Acquirer,
    window: &Window,
    long_sort: &str,
    shorts_sort: &str,
    platform: Option<&str>,
) {
    let mut view = VideosView::new();
    let generation = view.begin_acquisition();
    let acquired = acquirer
        .videos(window.keyword.as_deref(), Some(window.range), platform)
        .await;
    view.complete_acquisition(generation, acquired);

    if !render::status("영상", view.status()) {
        return;
    }

    view.select_long_sort(long_sort);
    view.select_shorts_sort(shorts_sort);
    render::video_summary(&view.summary());
    println!();
    render::video_grid(&format!("영상 ({}순)", view.long_sort().label()), view.long_form());
    println!();
    render::video_grid(&format!("쇼츠 ({}순)", view.shorts_sort().label()), view.shorts());
}

pub(crate) async fn run_sentiment(
    acquirer: &Acquirer,
    window: &Window,
    positive_filter: &str,
    negative_filter: &str,
) {
    let mut view = SentimentView::new();
    let overview_generation = view.begin_overview();
    let details_generation = view.begin_details();

    // Whole groups are fetched; the likes filters are applied locally.
    let (overview, details) = acquirer
        .overview_and_details(window.keyword.as_deref(), Some(window.range), None)
        .await;
    view.complete_overview(overview_generation, overview);
    view.complete_details(details_generation, details);
    view.select_likes_filter(Sentiment::Positive, positive_filter);
    view.select_likes_filter(Sentiment::Negative, negative_filter);

    if render::status("감성 개요", view.overview_status()) {
        if let Some(overview) = view.overview() {
            println!("{}", overview.summary);
            println!("긍정 키워드: {}", overview.positive_keywords.join(", "));
            println!("부정 키워드: {}", overview.negative_keywords.join(", "));
            println!();
            render::attribute_rows(&overview.attribute_sentiment);
        }
    }
    println!();

    if !render::status("감성 상세", view.details_status()) {
        return;
    }
    for sentiment in [Sentiment::Positive, Sentiment::Negative] {
        let filter_label = view
            .likes_filter(sentiment)
            .map_or_else(|| "전체".to_string(), |p| p.label());
        println!("## {} 댓글 ({filter_label})", sentiment.label());
        if let Some(summary) = view.details_summary(sentiment) {
            println!("{summary}");
        }
        render::comments_table(view.comments(sentiment));
        println!();
    }
}

pub(crate) async fn run_summary(
    acquirer: &Acquirer,
    window: &Window,
    catalog: &Catalog,
    channel: &str,
) {
    let mut view = SummaryView::new(catalog.channels.clone(), catalog.attribute_names());
    view.set_date_range(Some(window.range));
    let comments_generation = view.begin_comments();
    let previous_generation = view.begin_previous();
    let videos_generation = view.begin_videos();

    let keyword = window.keyword.as_deref();
    let previous_range = window.range.preceding(Utc::now());
    let (comments, previous, videos) = tokio::join!(
        acquirer.comments(keyword, Some(window.range)),
        acquirer.comments(keyword, Some(previous_range)),
        acquirer.videos(keyword, Some(window.range), None),
    );
    view.complete_comments(comments_generation, comments);
    view.complete_previous(previous_generation, previous);
    view.complete_videos(videos_generation, videos);
    view.select_channel(channel);

    let summary = view.summary();
    if render::status("요약", view.comments_status()) {
        println!("전체 감성: {}", render::distribution_line(&summary.overall));
        if summary.selected != summary.overall {
            println!("{channel} 감성: {}", render::distribution_line(&summary.selected));
        }
        if let Some(change) = &summary.change {
            println!("{}", render::change_line(change));
        }
        println!();
        println!("## 채널별");
        render::channel_distributions(&summary.by_channel);
        println!();
        println!("## 속성별");
        render::attribute_rows(&summary.attributes);
        println!();
        println!("## 일별 추이");
        render::trend_rows(&summary.trend);
        println!();
    }
    if render::status("영상", view.videos_status()) {
        render::video_summary(&summary.videos);
    }
}

pub(crate) fn run_generate(
    catalog: &Catalog,
    seed: u64,
    comment_count: usize,
    video_count: usize,
    shorts_count: usize,
) -> anyhow::Result<()> {
    let mut generator = MockGenerator::new(seed, catalog, Utc::now());
    let comments = generator.comments(comment_count);
    let mut videos = generator.videos(video_count, false);
    videos.extend(generator.videos(shorts_count, true));
    tracing::debug!(seed, comments = comments.len(), videos = videos.len(), "generated mock dataset");

    let dataset = serde_json::json!({
        "comments": { "items": comments },
        "videos": { "items": videos },
    });
    println!("{}", serde_json::to_string_pretty(&dataset)?);
    Ok(())
}
