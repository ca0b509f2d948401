//! Client for the Tray `customers` collection.
//!
//! Every operation first asks the `TokenManager` for a usable access token and
//! then goes through the shared `RateLimiter`. Failures come back as
//! `TrayError` values; nothing here retries.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::tray::TrayError;
use crate::tray::credential::Credential;
use crate::tray::encode::flatten_resource;
use crate::tray::model::{
    CustomerDetail, CustomerPage, CustomerRecord, ListCustomersParam, MutationResponse,
    TrayCustomer,
};
use crate::tray::rate_limiter::RateLimiter;
use crate::tray::token::{TokenManager, TokenStatus};
use crate::tray::transport::{Method, Transport, TransportRequest};

#[derive(Clone)]
pub struct TrayClient {
    tokens: TokenManager,
    limiter: RateLimiter,
    transport: Arc<dyn Transport>,
}

impl TrayClient {
    /// Creates a client.
    ///
    /// `limiter` should be the same limiter the token manager uses so auth calls
    /// and API calls share one quota.
    pub fn new(tokens: TokenManager, limiter: RateLimiter, transport: Arc<dyn Transport>) -> Self {
        Self {
            tokens,
            limiter,
            transport,
        }
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Makes sure a usable session exists, loading the stored credential first
    /// when nothing is loaded yet.
    ///
    /// # Returns
    /// - `Ok(Credential)` - Usable credential, refreshed if it had expired
    /// - `Err(TrayError::InvalidToken)` - Nothing stored, or the refresh was refused
    /// - `Err(TrayError::Storage)` - The credential store could not be read
    pub async fn ensure_valid_session(&self) -> Result<Credential, TrayError> {
        if self.tokens.status() == TokenStatus::Unauthenticated && !self.tokens.load().await? {
            return Err(TrayError::InvalidToken(
                "no stored Tray credential".to_string(),
            ));
        }

        self.tokens.ensure_valid().await
    }

    /// Fetches one page of customers.
    ///
    /// # Arguments
    /// - `param` - Page number, page size and optional email filter
    ///
    /// # Returns
    /// - `Ok(CustomerPage)` - The page; `customers` is empty past the last page
    /// - `Err(TrayError::InvalidToken)` - No usable access token, nothing was sent
    /// - `Err(TrayError::RequestError)` - Transport failure or non-2xx status
    /// - `Err(TrayError::Decode)` - Unexpected response body
    pub async fn list_customers(&self, param: &ListCustomersParam) -> Result<CustomerPage, TrayError> {
        let mut request = self.authorized(Method::Get, &["customers"]).await?;
        request.query.extend(param.to_query());

        let body = self.execute(request).await?;
        if body.is_null() {
            return Ok(CustomerPage::default());
        }
        decode(body, "customer listing")
    }

    /// Fetches the full record of one customer, addresses included.
    pub async fn get_customer(&self, id: &str) -> Result<TrayCustomer, TrayError> {
        let request = self
            .authorized(Method::Get, &["customers", id])
            .await?;

        let detail: CustomerDetail = decode(self.execute(request).await?, "customer detail")?;
        Ok(detail.customer)
    }

    /// Creates a customer. Not idempotent.
    pub async fn create_customer(
        &self,
        record: &CustomerRecord,
    ) -> Result<MutationResponse, TrayError> {
        let request = self
            .authorized(Method::Post, &["customers"])
            .await?
            .form(customer_form(record)?);

        decode_mutation(self.execute(request).await?)
    }

    /// Replaces the given fields of a customer.
    pub async fn update_customer(
        &self,
        id: &str,
        record: &CustomerRecord,
    ) -> Result<MutationResponse, TrayError> {
        let request = self
            .authorized(Method::Put, &["customers", id])
            .await?
            .form(customer_form(record)?);

        decode_mutation(self.execute(request).await?)
    }

    pub async fn delete_customer(&self, id: &str) -> Result<MutationResponse, TrayError> {
        let request = self
            .authorized(Method::Delete, &["customers", id])
            .await?;

        decode_mutation(self.execute(request).await?)
    }

    /// Builds a request against the API host with the current access token.
    ///
    /// Each entry of `segments` becomes one percent-encoded path segment, so a
    /// customer id can never add segments or a query of its own.
    async fn authorized(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<TransportRequest, TrayError> {
        let credential = self
            .tokens
            .ensure_valid()
            .await
            .map_err(TrayError::into_invalid_token)?;

        let url = endpoint_url(&credential.api_host, segments)?;

        Ok(TransportRequest::new(method, url).query("access_token", credential.access_token))
    }

    /// Sends through the limiter and turns non-2xx statuses into `RequestError`.
    async fn execute(&self, request: TransportRequest) -> Result<Value, TrayError> {
        let method = request.method;
        let url = request.url.clone();
        let transport = Arc::clone(&self.transport);

        let response = self
            .limiter
            .submit(move || async move { transport.send(request).await })
            .await?;

        if !response.is_success() {
            tracing::warn!("{} {} returned HTTP {}", method, url, response.status);
            return Err(TrayError::RequestError(format!(
                "{} {} returned HTTP {}: {}",
                method,
                url,
                response.status,
                response.error_message()
            )));
        }

        Ok(response.body)
    }
}

/// Appends `segments` to the path of `api_host`.
fn endpoint_url(api_host: &str, segments: &[&str]) -> Result<String, TrayError> {
    let mut url = Url::parse(api_host)
        .map_err(|e| TrayError::RequestError(format!("invalid API host '{}': {}", api_host, e)))?;

    url.path_segments_mut()
        .map_err(|_| TrayError::RequestError(format!("API host '{}' cannot take a path", api_host)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url.to_string())
}

fn customer_form(record: &CustomerRecord) -> Result<Vec<(String, String)>, TrayError> {
    let value = serde_json::to_value(record)
        .map_err(|e| TrayError::Decode(format!("cannot encode customer record: {}", e)))?;
    Ok(flatten_resource("Customer", &value))
}

fn decode<T: DeserializeOwned>(body: Value, what: &str) -> Result<T, TrayError> {
    serde_json::from_value(body).map_err(|e| TrayError::Decode(format!("{}: {}", what, e)))
}

fn decode_mutation(body: Value) -> Result<MutationResponse, TrayError> {
    if body.is_null() {
        return Ok(MutationResponse::default());
    }
    decode(body, "mutation response")
}
