//! One-shot import of every Tray customer into the local database.
//!
//! Uses the stored Tray credential, refreshing it when expired, and falls back to
//! authenticating with the configured consumer credentials.

use std::process::ExitCode;

use storelink::{
    config::Config, data::plan::PlanRepository, data::store::DatabaseStore, error::AppError,
    model::customer::ImportSummary, service::customer_import::CustomerImportService,
    service::session::SessionService, startup,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    match run().await {
        Ok(summary) if summary.completed => ExitCode::SUCCESS,
        Ok(_) => {
            tracing::warn!("Customer sync stopped before the last page");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("Customer sync failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ImportSummary, AppError> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    PlanRepository::new(&db).ensure_defaults().await?;

    let store = DatabaseStore::new(db.clone());
    let client = startup::build_tray_client(&config, store.clone()).await?;

    let credential = SessionService::new(&client)
        .establish(config.tray_credentials.as_ref())
        .await?;
    tracing::info!(
        "Tray session ready, access token valid until {}",
        credential.access_expires_at
    );

    let summary = CustomerImportService::new(&client, &store, &store, config.tray.page_size)
        .import_all()
        .await?;

    tracing::info!(
        "Imported {} customers, skipped {}, read {} pages",
        summary.total_imported,
        summary.skipped,
        summary.pages_fetched
    );

    Ok(summary)
}
