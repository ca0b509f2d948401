use storelink::{
    bot, config::Config, data::plan::PlanRepository, data::store::DatabaseStore,
    error::AppError, scheduler::customer_sync, service::session::SessionService, startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    config.require_bot_token()?;

    let db = startup::connect_to_database(&config).await?;

    let created = PlanRepository::new(&db).ensure_defaults().await?;
    if created > 0 {
        tracing::info!("Created {} default plans", created);
    }

    let store = DatabaseStore::new(db.clone());
    let client = startup::build_tray_client(&config, store.clone()).await?;

    let tray = match SessionService::new(&client)
        .establish(config.tray_credentials.as_ref())
        .await
    {
        Ok(_) => Some(client),
        Err(e) => {
            tracing::warn!(
                "Tray integration disabled, registrations only match stored customers: {}",
                e
            );
            None
        }
    };

    // Keep the scheduler handle alive for the lifetime of the bot
    let _scheduler = match &tray {
        Some(client) => Some(
            customer_sync::start_scheduler(
                &config.customer_sync_schedule,
                client.clone(),
                store,
                config.tray.page_size,
            )
            .await?,
        ),
        None => None,
    };

    tracing::info!("Starting storelink");

    bot::start::start_bot(&config, db, tray).await
}
