use std::{str::FromStr, time::Duration};

use chrono::FixedOffset;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_REQUESTS_PER_MINUTE: u32 = 180;
const DEFAULT_PAGE_SIZE: u32 = 50;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_UTC_OFFSET_HOURS: i32 = -3;
const DEFAULT_CUSTOMER_SYNC_SCHEDULE: &str = "0 0 3 * * *";

/// Store credentials used to obtain a fresh Tray session.
#[derive(Clone)]
pub struct TrayCredentials {
    pub api_address: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub code: String,
}

impl std::fmt::Debug for TrayCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrayCredentials")
            .field("api_address", &self.api_address)
            .finish_non_exhaustive()
    }
}

/// Tunables for the Tray client and the customer import.
#[derive(Debug, Clone)]
pub struct TraySettings {
    pub requests_per_minute: u32,
    pub page_size: u32,
    pub request_timeout: Duration,
    /// Offset used to read the store-local expiry timestamps Tray returns.
    pub utc_offset: FixedOffset,
}

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: Option<String>,
    pub tray_credentials: Option<TrayCredentials>,
    pub tray: TraySettings,
    pub customer_sync_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and tunables parsed
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is unset, or only part of
    ///   the Tray credential group is set
    /// - `Err(ConfigError::InvalidEnvVar)` - A tunable could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let requests_per_minute = parse_or(
            &lookup,
            "TRAY_REQUESTS_PER_MINUTE",
            DEFAULT_REQUESTS_PER_MINUTE,
        )?;
        let page_size = parse_or(&lookup, "TRAY_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let timeout_secs = parse_or(
            &lookup,
            "TRAY_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;
        let offset_hours = parse_or(&lookup, "TRAY_UTC_OFFSET_HOURS", DEFAULT_UTC_OFFSET_HOURS)?;

        require_positive("TRAY_REQUESTS_PER_MINUTE", requests_per_minute)?;
        require_positive("TRAY_PAGE_SIZE", page_size)?;

        let utc_offset = offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "TRAY_UTC_OFFSET_HOURS".to_string(),
                value: offset_hours.to_string(),
                reason: "offset must be between -23 and 23 hours".to_string(),
            })?;

        Ok(Self {
            database_url,
            discord_bot_token: lookup("DISCORD_BOT_TOKEN"),
            tray_credentials: tray_credentials(&lookup)?,
            tray: TraySettings {
                requests_per_minute,
                page_size,
                request_timeout: Duration::from_secs(timeout_secs),
                utc_offset,
            },
            customer_sync_schedule: lookup("CUSTOMER_SYNC_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_CUSTOMER_SYNC_SCHEDULE.to_string()),
        })
    }

    /// Discord bot token, required only by the bot binary.
    pub fn require_bot_token(&self) -> Result<&str, ConfigError> {
        self.discord_bot_token
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))
    }
}

/// Reads the Tray credential group. Either all four variables are set or none.
fn tray_credentials<F>(lookup: &F) -> Result<Option<TrayCredentials>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    const NAMES: [&str; 4] = [
        "TRAY_API_ADDRESS",
        "TRAY_CONSUMER_KEY",
        "TRAY_CONSUMER_SECRET",
        "TRAY_CODE",
    ];

    if NAMES.iter().all(|name| lookup(name).is_none()) {
        return Ok(None);
    }

    let required =
        |name: &str| lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

    Ok(Some(TrayCredentials {
        api_address: required(NAMES[0])?,
        consumer_key: required(NAMES[1])?,
        consumer_secret: required(NAMES[2])?,
        code: required(NAMES[3])?,
    }))
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

fn require_positive(name: &str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults_when_only_database_url_is_set() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")]))
            .unwrap();

        assert_eq!(config.tray.requests_per_minute, 180);
        assert_eq!(config.tray.page_size, 50);
        assert_eq!(config.tray.request_timeout, Duration::from_secs(30));
        assert_eq!(config.tray.utc_offset.local_minus_utc(), -3 * 3600);
        assert_eq!(config.customer_sync_schedule, "0 0 3 * * *");
        assert!(config.tray_credentials.is_none());
        assert!(config.require_bot_token().is_err());
    }

    #[test]
    fn rejects_missing_database_url() {
        let result = Config::from_lookup(lookup_from(&[]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(name)) if name == "DATABASE_URL"));
    }

    #[test]
    fn rejects_partial_tray_credentials() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("TRAY_API_ADDRESS", "store.example.com/web_api"),
            ("TRAY_CONSUMER_KEY", "key"),
        ]));

        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(name)) if name == "TRAY_CONSUMER_SECRET")
        );
    }

    #[test]
    fn reads_complete_tray_credentials() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("TRAY_API_ADDRESS", "store.example.com/web_api"),
            ("TRAY_CONSUMER_KEY", "key"),
            ("TRAY_CONSUMER_SECRET", "secret"),
            ("TRAY_CODE", "code"),
        ]))
        .unwrap();

        let credentials = config.tray_credentials.unwrap();
        assert_eq!(credentials.api_address, "store.example.com/web_api");
        assert_eq!(credentials.code, "code");
    }

    #[test]
    fn rejects_unparsable_tunable() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("TRAY_PAGE_SIZE", "fifty"),
        ]));

        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { name, .. }) if name == "TRAY_PAGE_SIZE")
        );
    }

    #[test]
    fn rejects_zero_quota() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("TRAY_REQUESTS_PER_MINUTE", "0"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }

    #[test]
    fn rejects_out_of_range_offset() {
        for hours in ["24", "-24", "1000000"] {
            let result = Config::from_lookup(lookup_from(&[
                ("DATABASE_URL", "sqlite::memory:"),
                ("TRAY_UTC_OFFSET_HOURS", hours),
            ]));

            assert!(
                matches!(&result, Err(ConfigError::InvalidEnvVar { name, .. }) if name == "TRAY_UTC_OFFSET_HOURS"),
                "offset {} should be rejected",
                hours
            );
        }
    }
}
