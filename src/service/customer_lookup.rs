use crate::error::tray::TrayError;
use crate::model::customer::LocalCustomer;
use crate::service::customer_import::persist_remote_customer;
use crate::tray::client::TrayClient;
use crate::tray::model::ListCustomersParam;
use crate::tray::store::CustomerStore;
use crate::util::parse::normalize_email;

/// Fetches single customers from Tray on demand and stores them locally.
pub struct CustomerLookupService<'a> {
    client: &'a TrayClient,
    customers: &'a dyn CustomerStore,
}

impl<'a> CustomerLookupService<'a> {
    pub fn new(client: &'a TrayClient, customers: &'a dyn CustomerStore) -> Self {
        Self { client, customers }
    }

    /// Looks a customer up in Tray by email and stores it.
    ///
    /// # Arguments
    /// - `email` - Email to search for, normalized before the request
    ///
    /// # Returns
    /// - `Ok(LocalCustomer)` - The customer as stored locally
    /// - `Err(TrayError::CustomerNotFound)` - Tray has no customer with that email
    /// - `Err(TrayError)` - No valid session, request failure or storage failure
    pub async fn fetch_by_email(&self, email: &str) -> Result<LocalCustomer, TrayError> {
        let email = normalize_email(email);

        self.client.ensure_valid_session().await?;

        let listing = self
            .client
            .list_customers(&ListCustomersParam::by_email(email.as_str()))
            .await?;
        let id = listing
            .customers
            .into_iter()
            .find_map(|entry| entry.customer.id)
            .ok_or_else(|| TrayError::CustomerNotFound(email.clone()))?;

        let remote = self.client.get_customer(&id).await?;

        if let Err(e) = self.customers.ensure_default_plans().await {
            tracing::warn!("Failed to ensure default plans: {}", e);
        }

        let customer = persist_remote_customer(self.customers, &remote).await?;
        tracing::info!("Fetched customer {} from Tray by email", customer.id);

        Ok(customer)
    }
}
