use serenity::all::{CommandInteraction, CreateCommand, Permissions};

use crate::bot::command::require_admin;
use crate::bot::handler::Handler;
use crate::data::store::DatabaseStore;
use crate::error::AppError;
use crate::model::customer::ImportSummary;
use crate::service::customer_import::CustomerImportService;

pub const NAME: &str = "sync-customers";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Import every customer from the store now")
        .default_member_permissions(Permissions::ADMINISTRATOR)
}

pub async fn run(handler: &Handler, command: &CommandInteraction) -> Result<String, AppError> {
    require_admin(command)?;

    let client = handler.tray.as_ref().ok_or_else(|| {
        AppError::BadRequest("The store integration is not configured".to_string())
    })?;

    tracing::info!("Customer sync requested by user {}", command.user.id);

    let store = DatabaseStore::new(handler.db.clone());
    let summary = CustomerImportService::new(client, &store, &store, handler.page_size)
        .import_all()
        .await?;

    Ok(summary_reply(&summary))
}

fn summary_reply(summary: &ImportSummary) -> String {
    let mut reply = format!(
        "Customer sync finished: {} imported, {} skipped, {} pages read.",
        summary.total_imported, summary.skipped, summary.pages_fetched
    );
    if !summary.completed {
        reply.push_str("\nA page could not be read, so the sync stopped early. Check the logs.");
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_incomplete_sync() {
        let reply = summary_reply(&ImportSummary {
            total_imported: 10,
            skipped: 2,
            pages_fetched: 1,
            completed: false,
        });

        assert!(reply.contains("10 imported, 2 skipped, 1 pages read"));
        assert!(reply.contains("stopped early"));
    }

    #[test]
    fn omits_warning_for_complete_sync() {
        let reply = summary_reply(&ImportSummary {
            total_imported: 3,
            skipped: 0,
            pages_fetched: 1,
            completed: true,
        });

        assert!(!reply.contains("stopped early"));
    }
}
