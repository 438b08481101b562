use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the analytics API, e.g. `http://localhost:8000/api`.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub catalog_path: PathBuf,
    /// Keyword used when the caller does not pass one.
    pub default_keyword: Option<String>,
    pub default_period_days: i64,
}
