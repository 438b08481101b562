use chrono::TimeZone;

use super::*;

fn test_client(base_url: &str) -> DashboardClient {
    DashboardClient::with_base_url(base_url, 5, "bamti-test")
        .expect("client construction should not fail")
}

fn october() -> DateRange {
    DateRange::new(
        Utc.with_ymd_and_hms(2025, 10, 1, 15, 0, 0).unwrap(),
        Some(Utc.with_ymd_and_hms(2025, 10, 7, 8, 0, 0).unwrap()),
    )
}

#[test]
fn build_url_appends_to_base_path() {
    let client = test_client("http://localhost:8000/api");
    let url = client
        .build_url("sentiment/overview", &window_params("밤티라미수", &october()))
        .unwrap();
    assert_eq!(url.path(), "/api/sentiment/overview");
    assert!(url.query().unwrap().contains("from=2025-10-01&to=2025-10-07"));
}

#[test]
fn build_url_strips_trailing_slash() {
    let client = test_client("http://localhost:8000/api/");
    let url = client.build_url("comments", &[]).unwrap();
    assert_eq!(url.path(), "/api/comments");
    assert_eq!(url.host_str(), Some("localhost"));
}

#[test]
fn build_url_encodes_korean_keyword() {
    let client = test_client("http://localhost:8000/api");
    let url = client
        .build_url("comments", &[("product", "밤 티라미수".to_string())])
        .unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("product".to_string(), "밤 티라미수".to_string())]);
    assert!(!url.as_str().contains(' '));
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = DashboardClient::with_base_url("not a url", 5, "bamti-test").unwrap_err();
    assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
}
