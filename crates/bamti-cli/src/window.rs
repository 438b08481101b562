//! Resolves the keyword and date range a view command acquires for.

use anyhow::{bail, Context};
use bamti_core::{AppConfig, Catalog, DateRange, Period};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Window {
    pub(crate) keyword: Option<String>,
    pub(crate) range: DateRange,
    /// Preset the range came from; `None` for the configured default window.
    pub(crate) period: Option<Period>,
}

impl Window {
    /// Replaces a registered alias with the product's canonical keyword.
    ///
    /// A keyword the catalog does not know is kept as typed and logged; the API
    /// decides whether it is registered.
    pub(crate) fn canonicalize(&mut self, catalog: &Catalog) {
        let Some(keyword) = self.keyword.as_deref() else {
            return;
        };
        match catalog.find_product(keyword) {
            Some(product) if product.keyword != keyword => {
                tracing::debug!(alias = keyword, keyword = %product.keyword, "resolved keyword alias");
                self.keyword = Some(product.keyword.clone());
            }
            Some(_) => {}
            None => tracing::warn!(keyword, "keyword is not in the product catalog"),
        }
    }

    /// Header line such as `최근 7일 · 2025-10-08 ~ 2025-10-15`.
    pub(crate) fn describe(&self, now: DateTime<Utc>) -> String {
        let label = self.period.map_or("기본 기간", Period::label);
        format!(
            "{label} · {} ~ {}",
            self.range.from.format("%Y-%m-%d"),
            self.range.end_or(now).format("%Y-%m-%d")
        )
    }
}

/// Precedence: an explicit `--from`/`--to` range, then `--period`, then the
/// configured default window. The keyword falls back to the configured one.
pub(crate) fn resolve_window(
    keyword: Option<String>,
    period: Option<&str>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> anyhow::Result<Window> {
    let keyword = keyword
        .filter(|k| !k.trim().is_empty())
        .or_else(|| config.default_keyword.clone());

    let default_range = DateRange::last_days(now, config.default_period_days);

    let (range, period) = if let Some(from) = from {
        (custom_range(from, to)?, Some(Period::Custom))
    } else if let Some(label) = period {
        let preset =
            Period::parse(label).with_context(|| format!("unknown period '{label}'"))?;
        if preset == Period::Custom {
            bail!("period '{label}' needs --from (and optionally --to)");
        }
        (preset.resolve(now, default_range), Some(preset))
    } else {
        (default_range, None)
    };

    Ok(Window {
        keyword,
        range,
        period,
    })
}

/// `from` at midnight through the end of `to`, both UTC.
fn custom_range(from: NaiveDate, to: Option<NaiveDate>) -> anyhow::Result<DateRange> {
    if let Some(to) = to {
        if to < from {
            bail!("--to ({to}) is before --from ({from})");
        }
    }
    let start = from.and_time(NaiveTime::MIN).and_utc();
    let end = to
        .map(|d| {
            d.and_hms_opt(23, 59, 59)
                .map(|dt| dt.and_utc())
                .context("invalid end of day")
        })
        .transpose()?;
    Ok(DateRange::new(start, end))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use bamti_core::Environment;
    use chrono::TimeZone;

    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            env: Environment::Test,
            log_level: "info".to_string(),
            api_base_url: "http://localhost:8000/api".to_string(),
            request_timeout_secs: 10,
            user_agent: "bamti-test".to_string(),
            catalog_path: PathBuf::from("./config/catalog.yaml"),
            default_keyword: Some("밤 티라미수".to_string()),
            default_period_days: 7,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 15, 12, 0, 0).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    #[test]
    fn defaults_come_from_config() {
        let window = resolve_window(None, None, None, None, &config(), now()).unwrap();
        assert_eq!(window.keyword.as_deref(), Some("밤 티라미수"));
        assert_eq!(window.range, DateRange::last_days(now(), 7));
    }

    #[test]
    fn blank_keyword_uses_configured_default() {
        let window =
            resolve_window(Some("  ".to_string()), None, None, None, &config(), now()).unwrap();
        assert_eq!(window.keyword.as_deref(), Some("밤 티라미수"));
    }

    #[test]
    fn period_preset_sets_window() {
        let window =
            resolve_window(None, Some("최근 30일"), None, None, &config(), now()).unwrap();
        assert_eq!(window.range, DateRange::last_days(now(), 30));
    }

    #[test]
    fn explicit_dates_win_and_cover_whole_end_day() {
        let window = resolve_window(
            None,
            Some("7d"),
            Some(date(1)),
            Some(date(3)),
            &config(),
            now(),
        )
        .unwrap();
        assert_eq!(window.range.from, Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap());
        assert_eq!(
            window.range.to,
            Some(Utc.with_ymd_and_hms(2025, 10, 3, 23, 59, 59).unwrap())
        );
    }

    #[test]
    fn open_ended_custom_range() {
        let window =
            resolve_window(None, None, Some(date(10)), None, &config(), now()).unwrap();
        assert_eq!(window.range.to, None);
    }

    #[test]
    fn describe_names_the_preset() {
        let preset = resolve_window(None, Some("14d"), None, None, &config(), now()).unwrap();
        assert_eq!(preset.describe(now()), "최근 14일 · 2025-10-01 ~ 2025-10-15");

        let custom =
            resolve_window(None, None, Some(date(10)), None, &config(), now()).unwrap();
        assert_eq!(custom.describe(now()), "사용자 지정 · 2025-10-10 ~ 2025-10-15");

        let default = resolve_window(None, None, None, None, &config(), now()).unwrap();
        assert!(default.describe(now()).starts_with("기본 기간 · "));
    }

    #[test]
    fn canonicalize_maps_aliases_to_the_registered_keyword() {
        let catalog = Catalog::embedded().unwrap();

        let mut alias = resolve_window(Some("밤티".to_string()), None, None, None, &config(), now())
            .unwrap();
        alias.canonicalize(&catalog);
        assert_eq!(alias.keyword.as_deref(), Some("밤 티라미수"));

        let mut unknown =
            resolve_window(Some("없는제품".to_string()), None, None, None, &config(), now())
                .unwrap();
        unknown.canonicalize(&catalog);
        assert_eq!(unknown.keyword.as_deref(), Some("없는제품"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(resolve_window(None, Some("어제"), None, None, &config(), now()).is_err());
        assert!(resolve_window(None, Some("custom"), None, None, &config(), now()).is_err());
        assert!(
            resolve_window(None, None, Some(date(5)), Some(date(4)), &config(), now()).is_err()
        );
    }
}
