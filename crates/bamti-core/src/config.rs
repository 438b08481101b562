use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("BAMTI_ENV", "development"))?;
    let log_level = or_default("BAMTI_LOG_LEVEL", "info");

    let api_base_url = or_default("BAMTI_API_BASE_URL", "http://localhost:8000/api");
    if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "BAMTI_API_BASE_URL".to_string(),
            reason: format!("'{api_base_url}' is not an http(s) URL"),
        });
    }

    let request_timeout_secs = parse_u64("BAMTI_REQUEST_TIMEOUT_SECS", "10")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BAMTI_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }

    let user_agent = or_default("BAMTI_USER_AGENT", "bamti/0.1 (sentiment-dashboard)");
    let catalog_path = PathBuf::from(or_default("BAMTI_CATALOG_PATH", "./config/catalog.yaml"));
    let default_keyword = lookup("BAMTI_DEFAULT_KEYWORD")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    let default_period_days = parse_u64("BAMTI_DEFAULT_PERIOD_DAYS", "7")?;
    if default_period_days == 0 || default_period_days > 365 {
        return Err(ConfigError::InvalidEnvVar {
            var: "BAMTI_DEFAULT_PERIOD_DAYS".to_string(),
            reason: format!("{default_period_days} is outside 1..=365"),
        });
    }
    let default_period_days =
        i64::try_from(default_period_days).map_err(|e| ConfigError::InvalidEnvVar {
            var: "BAMTI_DEFAULT_PERIOD_DAYS".to_string(),
            reason: e.to_string(),
        })?;

    Ok(AppConfig {
        env,
        log_level,
        api_base_url,
        request_timeout_secs,
        user_agent,
        catalog_path,
        default_keyword,
        default_period_days,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "BAMTI_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
