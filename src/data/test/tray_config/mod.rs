use crate::{data::tray_config::TrayConfigRepository, tray::credential::Credential};
use chrono::{Duration, DurationRound, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod load;
mod record_last_sync;
mod save;

fn credential(access_token: &str) -> Credential {
    let now = Utc::now().duration_trunc(Duration::seconds(1)).unwrap();
    Credential {
        api_address: "https://loja.example.com/web_api".to_string(),
        access_token: access_token.to_string(),
        refresh_token: "refresh".to_string(),
        api_host: "https://loja.example.com/web_api".to_string(),
        access_expires_at: now + Duration::hours(3),
        refresh_expires_at: now + Duration::days(30),
        store_id: Some("391250".to_string()),
    }
}
