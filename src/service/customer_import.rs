//! Bulk import of every Tray customer into local storage.

use chrono::Utc;

use crate::error::tray::TrayError;
use crate::model::customer::{ImportSummary, LocalAddress, LocalCustomer};
use crate::tray::client::TrayClient;
use crate::tray::model::{CustomerSummary, ListCustomersParam, TrayCustomer};
use crate::tray::store::{CredentialStore, CustomerStore};

pub const DEFAULT_PAGE_SIZE: u32 = 50;

pub struct CustomerImportService<'a> {
    client: &'a TrayClient,
    customers: &'a dyn CustomerStore,
    credentials: &'a dyn CredentialStore,
    page_size: u32,
}

impl<'a> CustomerImportService<'a> {
    pub fn new(
        client: &'a TrayClient,
        customers: &'a dyn CustomerStore,
        credentials: &'a dyn CredentialStore,
        page_size: u32,
    ) -> Self {
        Self {
            client,
            customers,
            credentials,
            page_size: page_size.max(1),
        }
    }

    /// Imports every customer, page by page.
    ///
    /// Each listed customer is fetched in full, stored with its addresses and counted.
    /// A customer that cannot be fetched, mapped or stored is logged and skipped. A
    /// failed page listing stops pagination and marks the summary incomplete.
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - Import ran, possibly with skipped customers
    /// - `Err(TrayError::ImportError)` - No valid Tray session, nothing was imported
    pub async fn import_all(&self) -> Result<ImportSummary, TrayError> {
        if let Err(e) = self.client.ensure_valid_session().await {
            tracing::error!(code = e.code(), "Cannot import customers: {}", e);
            return Err(TrayError::ImportError(format!(
                "no valid Tray session: {}",
                e
            )));
        }

        if let Err(e) = self.customers.ensure_default_plans().await {
            tracing::warn!("Failed to ensure default plans before import: {}", e);
        }

        let mut summary = ImportSummary {
            completed: true,
            ..Default::default()
        };
        let mut page = 1;

        loop {
            let param = ListCustomersParam::page(page, self.page_size);
            let listing = match self.client.list_customers(&param).await {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::error!(
                        code = e.code(),
                        "Failed to list customer page {}, stopping import: {}",
                        page,
                        e
                    );
                    summary.completed = false;
                    break;
                }
            };
            summary.pages_fetched += 1;

            let listed = listing.customers.len();
            tracing::debug!("Customer page {} listed {} customers", page, listed);

            for entry in listing.customers {
                match self.import_one(&entry.customer).await {
                    Ok(_) => summary.total_imported += 1,
                    Err(e) => {
                        tracing::warn!(
                            code = e.code(),
                            "Skipping customer {}: {}",
                            entry.customer.id.as_deref().unwrap_or("<no id>"),
                            e
                        );
                        summary.skipped += 1;
                    }
                }
            }

            if listed < self.page_size as usize {
                break;
            }
            page += 1;
        }

        if let Err(e) = self.credentials.record_last_sync(Utc::now()).await {
            tracing::warn!("Failed to record last customer sync: {}", e);
        }

        tracing::info!(
            "Customer import finished: {} imported, {} skipped over {} pages{}",
            summary.total_imported,
            summary.skipped,
            summary.pages_fetched,
            if summary.completed { "" } else { " (incomplete)" }
        );

        Ok(summary)
    }

    async fn import_one(&self, listed: &CustomerSummary) -> Result<LocalCustomer, TrayError> {
        let id = listed
            .id
            .as_deref()
            .ok_or_else(|| TrayError::MissingRequiredField("customer id".to_string()))?;

        let remote = self.client.get_customer(id).await?;

        persist_remote_customer(self.customers, &remote).await
    }
}

/// Stores a Tray customer and its addresses.
///
/// The default plan is dropped when it does not exist locally. Bare address
/// references are ignored and address failures are logged without failing the
/// customer.
///
/// # Returns
/// - `Ok(LocalCustomer)` - The customer as stored
/// - `Err(TrayError)` - The customer has no id or could not be stored
pub(crate) async fn persist_remote_customer(
    store: &dyn CustomerStore,
    remote: &TrayCustomer,
) -> Result<LocalCustomer, TrayError> {
    let mut customer = LocalCustomer::from_remote(remote)?;

    if let Some(plan_id) = customer.plan_id.as_deref() {
        if !store.plan_exists(plan_id).await? {
            tracing::warn!(
                "Plan {} does not exist, storing customer {} without a plan",
                plan_id,
                customer.id
            );
            customer.plan_id = None;
        }
    }

    store.upsert_customer(&customer).await?;

    for address in remote.addresses.iter().filter(|a| !a.is_bare_reference()) {
        let stored = match LocalAddress::from_remote(address, &customer.id) {
            Ok(local) => store.upsert_address(&local).await,
            Err(e) => Err(e),
        };
        if let Err(e) = stored {
            tracing::warn!(
                code = e.code(),
                "Failed to store an address of customer {}: {}",
                customer.id,
                e
            );
        }
    }

    Ok(customer)
}
