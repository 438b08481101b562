use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "BAMTI_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.api_base_url, "http://localhost:8000/api");
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "bamti/0.1 (sentiment-dashboard)");
    assert_eq!(cfg.catalog_path.to_str(), Some("./config/catalog.yaml"));
    assert!(cfg.default_keyword.is_none());
    assert_eq!(cfg.default_period_days, 7);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("BAMTI_ENV", "production");
    map.insert("BAMTI_API_BASE_URL", "https://dash.example.com/api");
    map.insert("BAMTI_REQUEST_TIMEOUT_SECS", "3");
    map.insert("BAMTI_DEFAULT_KEYWORD", "  밤 티라미수 ");
    map.insert("BAMTI_DEFAULT_PERIOD_DAYS", "30");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.api_base_url, "https://dash.example.com/api");
    assert_eq!(cfg.request_timeout_secs, 3);
    assert_eq!(cfg.default_keyword.as_deref(), Some("밤 티라미수"));
    assert_eq!(cfg.default_period_days, 30);
}

#[test]
fn blank_default_keyword_is_treated_as_unset() {
    let mut map = HashMap::new();
    map.insert("BAMTI_DEFAULT_KEYWORD", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.default_keyword.is_none());
}

#[test]
fn build_app_config_rejects_non_http_base_url() {
    let mut map = HashMap::new();
    map.insert("BAMTI_API_BASE_URL", "localhost:8000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BAMTI_API_BASE_URL"),
        "expected InvalidEnvVar(BAMTI_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("BAMTI_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BAMTI_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(BAMTI_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("BAMTI_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn build_app_config_rejects_out_of_range_period() {
    let mut map = HashMap::new();
    map.insert("BAMTI_DEFAULT_PERIOD_DAYS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BAMTI_DEFAULT_PERIOD_DAYS"),
        "expected InvalidEnvVar(BAMTI_DEFAULT_PERIOD_DAYS), got: {result:?}"
    );
}
