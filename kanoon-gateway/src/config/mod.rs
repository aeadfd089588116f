use chrono::NaiveDate;
use secrecy::Secret;
use serde::Deserialize;
use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;
use std::path::PathBuf;
use std::str::FromStr;

/// Date format the IK API expects for `fromdate` / `todate`.
pub const IK_DATE_FORMAT: &str = "%d-%m-%Y";

const DEFAULT_BASE_URL: &str = "https://api.indiankanoon.org";

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub ikapi: IkApiSettings,
    pub storage: StorageSettings,
}

/// Options handed to the IK API client. Built once at startup and shared
/// read-only for the lifetime of the process.
#[derive(Debug, Clone, Deserialize)]
pub struct IkApiSettings {
    pub token: Secret<String>,
    pub base_url: String,
    /// Citations to include with a document; 0 leaves the API default.
    pub max_cites: u32,
    /// Citing documents to include with a document; 0 leaves the API default.
    pub max_cited_by: u32,
    /// Upper bound on `maxpages` forwarded for a search.
    pub max_pages: u32,
    pub num_workers: u32,
    /// Restrict searches to documents added today.
    pub added_today: bool,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub sort_by: Option<String>,
}

impl IkApiSettings {
    /// Default limits: 10 cites, 10 cited-by, 10 pages, one worker, no date
    /// filtering or sorting.
    pub fn new(token: Secret<String>) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_cites: 10,
            max_cited_by: 10,
            max_pages: 10,
            num_workers: 1,
            added_today: false,
            from_date: None,
            to_date: None,
            sort_by: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Directory search results are written to.
    pub dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common = core_config::Config::load()?;
        let is_prod = common.is_prod();

        let defaults = IkApiSettings::new(Secret::new(String::new()));

        let ikapi = IkApiSettings {
            token: Secret::new(get_env("IKAPI_TOKEN", None, is_prod)?),
            base_url: get_env("IKAPI_BASE_URL", Some(DEFAULT_BASE_URL), is_prod)?,
            max_cites: parse_env("IKAPI_MAX_CITES", defaults.max_cites, is_prod)?,
            max_cited_by: parse_env("IKAPI_MAX_CITED_BY", defaults.max_cited_by, is_prod)?,
            max_pages: parse_env("IKAPI_MAX_PAGES", defaults.max_pages, is_prod)?,
            num_workers: parse_env("IKAPI_NUM_WORKERS", defaults.num_workers, is_prod)?,
            added_today: parse_env("IKAPI_ADDED_TODAY", defaults.added_today, is_prod)?,
            from_date: optional_date("IKAPI_FROM_DATE")?,
            to_date: optional_date("IKAPI_TO_DATE")?,
            sort_by: std::env::var("IKAPI_SORT_BY").ok().filter(|s| !s.is_empty()),
        };

        if ikapi.num_workers == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "IKAPI_NUM_WORKERS must be at least 1"
            )));
        }

        let storage = match std::env::var("IKAPI_STORAGE_DIR") {
            Ok(dir) => StorageSettings { dir: dir.into() },
            Err(_) => StorageSettings::default(),
        };

        Ok(GatewayConfig {
            common,
            ikapi,
            storage,
        })
    }
}

fn parse_env<T>(key: &str, default: T, is_prod: bool) -> Result<T, AppError>
where
    T: FromStr + ToString,
    T::Err: std::fmt::Display,
{
    let raw = get_env(key, Some(&default.to_string()), is_prod)?;
    raw.parse().map_err(|e: T::Err| {
        AppError::ConfigError(anyhow::anyhow!("Invalid value '{}' for {}: {}", raw, key, e))
    })
}

fn optional_date(key: &str) -> Result<Option<String>, AppError> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => {
            validate_ik_date(&value).map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid value for {}: {}", key, e))
            })?;
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}

/// Checks a `DD-MM-YYYY` date string.
pub fn validate_ik_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, IK_DATE_FORMAT)
        .map_err(|e| format!("'{}' is not a DD-MM-YYYY date ({})", value, e))
}
