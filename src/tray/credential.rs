//! The Tray bearer credential and the auth endpoint response it is built from.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::tray::model::lenient;

/// Timestamp layout Tray uses for token expirations, in store-local time.
const TRAY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Access and refresh tokens for one store, with their expirations.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Store endpoint the credential was obtained from, as configured.
    pub api_address: String,
    pub access_token: String,
    pub refresh_token: String,
    /// Base URL for API calls, as returned by the auth endpoint.
    pub api_host: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
    pub store_id: Option<String>,
}

impl Credential {
    /// Whether the access token can still be used at `now`.
    pub fn access_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.access_token.is_empty() && now < self.access_expires_at
    }

    /// Whether the refresh token can still be exchanged at `now`.
    pub fn refresh_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.refresh_token.is_empty() && now < self.refresh_expires_at
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_address", &self.api_address)
            .field("api_host", &self.api_host)
            .field("access_expires_at", &self.access_expires_at)
            .field("refresh_expires_at", &self.refresh_expires_at)
            .field("store_id", &self.store_id)
            .finish_non_exhaustive()
    }
}

/// Body returned by `POST /auth` and `GET /auth?refresh_token=...`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AuthResponse {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub access_token: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub refresh_token: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub api_host: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub date_expiration_access_token: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub date_expiration_refresh_token: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub store_id: Option<String>,
}

impl AuthResponse {
    /// Builds a credential from the response.
    ///
    /// Fields a refresh response leaves out are taken from `previous`.
    ///
    /// # Arguments
    /// - `api_address` - Store endpoint the request was sent to
    /// - `previous` - Credential being refreshed, if any
    /// - `offset` - UTC offset of the store-local expiry timestamps
    ///
    /// # Returns
    /// - `Ok(Credential)` - All fields present and both expirations parsed
    /// - `Err(String)` - Description of the missing or malformed field
    pub fn into_credential(
        self,
        api_address: &str,
        previous: Option<&Credential>,
        offset: FixedOffset,
    ) -> Result<Credential, String> {
        let access_token = self
            .access_token
            .ok_or_else(|| "response has no access_token".to_string())?;
        let refresh_token = self
            .refresh_token
            .or_else(|| previous.map(|p| p.refresh_token.clone()))
            .ok_or_else(|| "response has no refresh_token".to_string())?;
        let api_host = self
            .api_host
            .or_else(|| previous.map(|p| p.api_host.clone()))
            .ok_or_else(|| "response has no api_host".to_string())?;

        let access_expires_at = expiry(
            self.date_expiration_access_token.as_deref(),
            "date_expiration_access_token",
            offset,
        )?;
        let refresh_expires_at = match self.date_expiration_refresh_token.as_deref() {
            Some(raw) => expiry(Some(raw), "date_expiration_refresh_token", offset)?,
            None => previous
                .map(|p| p.refresh_expires_at)
                .ok_or_else(|| "response has no date_expiration_refresh_token".to_string())?,
        };

        Ok(Credential {
            api_address: api_address.to_string(),
            access_token,
            refresh_token,
            api_host: api_host.trim_end_matches('/').to_string(),
            access_expires_at,
            refresh_expires_at,
            store_id: self
                .store_id
                .or_else(|| previous.and_then(|p| p.store_id.clone())),
        })
    }
}

fn expiry(raw: Option<&str>, field: &str, offset: FixedOffset) -> Result<DateTime<Utc>, String> {
    let raw = raw.ok_or_else(|| format!("response has no {}", field))?;
    parse_expiry(raw, offset).ok_or_else(|| format!("cannot parse {} '{}'", field, raw))
}

/// Parses a Tray expiry timestamp.
///
/// RFC 3339 strings carry their own offset. Tray's usual `YYYY-MM-DD HH:MM:SS`
/// form is read as local time at `offset`.
pub fn parse_expiry(raw: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, TRAY_DATETIME_FORMAT).ok()?;
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

/// Base URL of the auth endpoint for a configured store address.
///
/// A bare host or host/path gets `https://`; an explicit scheme is kept.
pub fn auth_base_url(api_address: &str) -> Result<String, String> {
    let trimmed = api_address.trim().trim_end_matches('/');
    let base = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    url::Url::parse(&base).map_err(|e| format!("invalid store address '{}': {}", api_address, e))?;
    Ok(base)
}
