//! Fallback orchestration tests: the acquirer against a wiremock API.

use bamti_client::{Acquirer, DashboardClient, FallbackData};
use bamti_core::{Acquisition, DataOrigin, DeclaredError, SentimentOverview};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn acquirer(base_url: &str) -> Acquirer {
    let client = DashboardClient::with_base_url(base_url, 2, "bamti-test")
        .expect("client construction should not fail");
    let fallback = FallbackData::embedded().expect("embedded fixtures should load");
    Acquirer::new(client, fallback)
}

#[tokio::test]
async fn unregistered_keyword_is_declared_not_replaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sentiment/details"))
        .and(query_param("product", "없는제품"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = acquirer(&format!("{}/api", server.uri()))
        .sentiment_details(Some("없는제품"), None, None)
        .await;

    let Acquisition::Declared(error) = outcome else {
        panic!("expected a declared error, got {outcome:?}");
    };
    assert_eq!(error, DeclaredError::KeywordNotRegistered);
    assert_eq!(error.to_string(), "등록된 키워드가 아닙니다.");
}

#[tokio::test]
async fn no_liked_comments_is_declared() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sentiment/details"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let outcome = acquirer(&format!("{}/api", server.uri()))
        .sentiment_details(Some("밤 티라미수"), None, Some(10))
        .await;

    assert_eq!(
        outcome,
        Acquisition::Declared(DeclaredError::NoEngagementInRange)
    );
}

#[tokio::test]
async fn server_error_serves_full_fallback_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/comments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fallback = FallbackData::embedded().unwrap();
    let outcome = acquirer(&format!("{}/api", server.uri()))
        .comments(Some("밤 티라미수"), None)
        .await;

    assert_eq!(outcome.origin(), Some(DataOrigin::Fallback));
    assert_eq!(outcome.data(), Some(&fallback.comments));
}

#[tokio::test]
async fn unreachable_api_serves_fallback() {
    // Port 9 (discard) refuses connections on test hosts.
    let outcome = acquirer("http://127.0.0.1:9/api")
        .videos(Some("밤 티라미수"), None, None)
        .await;

    assert_eq!(outcome.origin(), Some(DataOrigin::Fallback));
    assert!(!outcome.data().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_details_fall_back_instead_of_declaring() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/sentiment/details"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"positive\": 3}"))
        .mount(&server)
        .await;

    let outcome = acquirer(&format!("{}/api", server.uri()))
        .sentiment_details(Some("밤 티라미수"), None, None)
        .await;

    assert_eq!(outcome.origin(), Some(DataOrigin::Fallback));
}

#[tokio::test]
async fn overview_survives_details_failure() {
    let server = MockServer::start().await;

    let overview = serde_json::json!({
        "summary": "전반적으로 긍정적입니다.",
        "positive_keywords": ["부드러운"],
        "negative_keywords": ["비싼"],
        "attribute_sentiment": [
            { "name": "맛", "positive": 5, "negative": 1, "neutral": 2 }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/sentiment/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&overview))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/sentiment/details"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (overview, details) = acquirer(&format!("{}/api", server.uri()))
        .overview_and_details(Some("밤 티라미수"), None, None)
        .await;

    assert_eq!(overview.origin(), Some(DataOrigin::Remote));
    assert_eq!(
        overview.data().map(|o: &SentimentOverview| o.summary.as_str()),
        Some("전반적으로 긍정적입니다.")
    );
    assert_eq!(overview.data().unwrap().attribute_sentiment[0].counts.total(), 8);
    assert_eq!(
        details,
        Acquisition::Declared(DeclaredError::KeywordNotRegistered)
    );
}

#[tokio::test]
async fn missing_keyword_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let acquirer = acquirer(&format!("{}/api", server.uri()));
    assert_eq!(acquirer.comments(None, None).await, Acquisition::NoKeyword);
    assert_eq!(
        acquirer.sentiment_details(Some(""), None, None).await,
        Acquisition::NoKeyword
    );
}
