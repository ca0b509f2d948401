use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::store::DatabaseStore, error::AppError, service::customer_import::CustomerImportService,
    tray::client::TrayClient,
};

/// Starts the scheduled customer import.
///
/// The import runs on `schedule` (six-field cron, seconds first). Failures are logged
/// and the next run proceeds as usual.
///
/// # Arguments
/// - `schedule`: Cron expression from `CUSTOMER_SYNC_SCHEDULE`
/// - `client`: Tray client shared with the bot
/// - `store`: Database-backed customer and credential store
/// - `page_size`: Customers requested per page
pub async fn start_scheduler(
    schedule: &str,
    client: TrayClient,
    store: DatabaseStore,
    page_size: u32,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let client = client.clone();
        let store = store.clone();

        Box::pin(async move {
            tracing::info!("Starting scheduled customer sync");
            let service = CustomerImportService::new(&client, &store, &store, page_size);
            if let Err(e) = service.import_all().await {
                tracing::error!(code = e.code(), "Scheduled customer sync failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Customer sync scheduled with '{}'", schedule);

    Ok(scheduler)
}
