use std::sync::Arc;

use crate::{
    config::Config,
    data::store::DatabaseStore,
    error::AppError,
    tray::{RateLimitConfig, RateLimiter, ReqwestTransport, TokenManager, TrayClient},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the Tray client and loads the stored credential, if any.
///
/// The token manager and the client share one rate limiter so auth calls count
/// against the same per-minute quota as API calls.
///
/// # Arguments
/// - `config` - Tray tunables
/// - `store` - Credential store backed by the application database
///
/// # Returns
/// - `Ok(TrayClient)` - Client ready for use, authenticated when a credential was stored
/// - `Err(AppError::TrayErr)` - HTTP client could not be built or the store could not be read
pub async fn build_tray_client(config: &Config, store: DatabaseStore) -> Result<TrayClient, AppError> {
    let transport = Arc::new(ReqwestTransport::new(config.tray.request_timeout)?);
    let limiter = RateLimiter::new(RateLimitConfig::per_minute(config.tray.requests_per_minute));
    let tokens = TokenManager::new(
        transport.clone(),
        Arc::new(store),
        limiter.clone(),
        config.tray.utc_offset,
    );

    if !tokens.load().await? {
        tracing::warn!("No stored Tray credential, customer lookups stay offline until one is obtained");
    }

    Ok(TrayClient::new(tokens, limiter, transport))
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter, which keeps sqlx and serenity quiet.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,serenity=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
