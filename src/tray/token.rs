//! Lifecycle of the Tray bearer credential.
//!
//! `TokenManager` owns the only in-memory copy of the credential. It seeds it from
//! the `CredentialStore`, replaces it on authenticate and refresh, and writes every
//! replacement back to the store. Expired access tokens are refreshed on demand
//! from `ensure_valid()`; concurrent callers share a single in-flight refresh and
//! all observe its outcome.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{FixedOffset, Utc};
use futures::future::{BoxFuture, FutureExt, Shared};

use crate::error::tray::TrayError;
use crate::tray::credential::{auth_base_url, AuthResponse, Credential};
use crate::tray::rate_limiter::RateLimiter;
use crate::tray::store::CredentialStore;
use crate::tray::transport::{Method, Transport, TransportRequest, TransportResponse};

type SharedRefresh = Shared<BoxFuture<'static, Result<Credential, TrayError>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// No credential loaded or obtained yet.
    Unauthenticated,
    /// Access token usable.
    Valid,
    /// Access token past its expiration; the next `ensure_valid()` refreshes it.
    Expiring,
    /// A refresh request is in flight.
    Refreshing,
    /// The last authenticate or refresh attempt failed.
    Failed,
}

#[derive(Default)]
struct TokenState {
    credential: Option<Credential>,
    failure: Option<TrayError>,
}

struct TokenInner {
    transport: Arc<dyn Transport>,
    store: Arc<dyn CredentialStore>,
    limiter: RateLimiter,
    utc_offset: FixedOffset,
    state: RwLock<TokenState>,
    in_flight: Mutex<Option<SharedRefresh>>,
}

/// Shared handle to the credential lifecycle. Clones see the same state.
#[derive(Clone)]
pub struct TokenManager {
    inner: Arc<TokenInner>,
}

impl TokenManager {
    /// Creates a manager with no credential loaded.
    ///
    /// # Arguments
    /// - `transport` - HTTP seam used for the auth endpoints
    /// - `store` - Where credentials are loaded from and persisted to
    /// - `limiter` - Limiter shared with the API client, auth calls count against it
    /// - `utc_offset` - Offset of the store-local expiry timestamps
    pub fn new(
        transport: Arc<dyn Transport>,
        store: Arc<dyn CredentialStore>,
        limiter: RateLimiter,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            inner: Arc::new(TokenInner {
                transport,
                store,
                limiter,
                utc_offset,
                state: RwLock::new(TokenState::default()),
                in_flight: Mutex::new(None),
            }),
        }
    }

    /// Current position in the credential lifecycle.
    ///
    /// `Refreshing` lasts exactly as long as the refresh task, whether or not any
    /// caller is still waiting on it.
    pub fn status(&self) -> TokenStatus {
        if self
            .inner
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
        {
            return TokenStatus::Refreshing;
        }

        let state = self.inner.state.read().unwrap_or_else(PoisonError::into_inner);
        if state.failure.is_some() {
            return TokenStatus::Failed;
        }
        match &state.credential {
            None => TokenStatus::Unauthenticated,
            Some(credential) if credential.access_valid_at(Utc::now()) => TokenStatus::Valid,
            Some(_) => TokenStatus::Expiring,
        }
    }

    /// Current credential, valid or not.
    pub fn credential(&self) -> Option<Credential> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .credential
            .clone()
    }

    /// Seeds the manager from the credential store.
    ///
    /// # Returns
    /// - `Ok(true)` - A stored credential was loaded
    /// - `Ok(false)` - The store holds no credential
    /// - `Err(TrayError::Storage)` - The store could not be read
    pub async fn load(&self) -> Result<bool, TrayError> {
        let Some(credential) = self.inner.store.load_credential().await? else {
            tracing::debug!("No stored Tray credential");
            return Ok(false);
        };

        tracing::debug!(
            "Loaded stored Tray credential for {}, access token expires at {}",
            credential.api_address,
            credential.access_expires_at
        );
        self.install(credential);

        Ok(true)
    }

    /// Exchanges consumer credentials and an authorization code for a new credential.
    ///
    /// # Arguments
    /// - `api_address` - Store API address, with or without scheme
    /// - `consumer_key` - Application consumer key
    /// - `consumer_secret` - Application consumer secret
    /// - `code` - Authorization code issued by the store
    ///
    /// # Returns
    /// - `Ok(Credential)` - Authenticated and persisted
    /// - `Err(TrayError::AuthFailed)` - Credentials rejected or response unusable
    /// - `Err(TrayError::RequestError)` - The auth endpoint could not be reached
    /// - `Err(TrayError::Storage)` - Authenticated but the credential could not be persisted
    pub async fn authenticate(
        &self,
        api_address: &str,
        consumer_key: &str,
        consumer_secret: &str,
        code: &str,
    ) -> Result<Credential, TrayError> {
        let base = auth_base_url(api_address).map_err(|e| self.fail(TrayError::AuthFailed(e)))?;

        let request = TransportRequest::new(Method::Post, format!("{}/auth", base)).form(vec![
            ("consumer_key".to_string(), consumer_key.to_string()),
            ("consumer_secret".to_string(), consumer_secret.to_string()),
            ("code".to_string(), code.to_string()),
        ]);

        let response = self.send(request).await.map_err(|e| self.fail(e))?;
        if !response.is_success() {
            return Err(self.fail(TrayError::AuthFailed(format!(
                "auth endpoint returned HTTP {}: {}",
                response.status,
                response.error_message()
            ))));
        }

        let credential = serde_json::from_value::<AuthResponse>(response.body)
            .map_err(|e| e.to_string())
            .and_then(|body| body.into_credential(api_address, None, self.inner.utc_offset))
            .map_err(|e| self.fail(TrayError::AuthFailed(e)))?;

        self.install(credential.clone());
        self.inner.store.save_credential(&credential).await?;

        tracing::info!(
            "Authenticated with Tray store {}, access token expires at {}",
            api_address,
            credential.access_expires_at
        );

        Ok(credential)
    }

    /// Returns a credential whose access token is usable now.
    ///
    /// Refreshes first when the access token has expired. If a refresh is already
    /// in flight the caller waits for it instead of starting another.
    ///
    /// # Returns
    /// - `Ok(Credential)` - Usable credential
    /// - `Err(TrayError::InvalidToken)` - No credential loaded, or the refresh was refused
    /// - `Err(TrayError::RequestError)` - The refresh request could not be sent
    pub async fn ensure_valid(&self) -> Result<Credential, TrayError> {
        self.join_or_start_refresh(false).await
    }

    /// Refreshes the access token now, whether or not it has expired.
    ///
    /// Joins a refresh already in flight instead of starting another.
    pub async fn refresh(&self) -> Result<Credential, TrayError> {
        self.join_or_start_refresh(true).await
    }

    async fn join_or_start_refresh(&self, force: bool) -> Result<Credential, TrayError> {
        let pending = {
            let mut in_flight = self
                .inner
                .in_flight
                .lock()
                .unwrap_or_else(PoisonError::into_inner);

            match in_flight.as_ref() {
                Some(pending) => pending.clone(),
                None => {
                    if !force {
                        match self.credential() {
                            None => {
                                return Err(TrayError::InvalidToken(
                                    "no Tray credential loaded".to_string(),
                                ))
                            }
                            Some(credential) if credential.access_valid_at(Utc::now()) => {
                                return Ok(credential)
                            }
                            Some(_) => {}
                        }
                    }

                    // The refresh runs on its own task so it completes, and clears
                    // `in_flight`, even when every caller stops waiting. A refresh
                    // cut short could spend the refresh token without keeping its
                    // replacement.
                    let manager = self.clone();
                    let task = tokio::spawn(async move { manager.run_refresh().await });
                    let pending = async move {
                        task.await.unwrap_or_else(|e| {
                            Err(TrayError::RequestError(format!(
                                "token refresh task ended unexpectedly: {}",
                                e
                            )))
                        })
                    }
                    .boxed()
                    .shared();
                    *in_flight = Some(pending.clone());
                    pending
                }
            }
        };

        pending.await
    }

    async fn run_refresh(&self) -> Result<Credential, TrayError> {
        tracing::debug!("Refreshing Tray access token");

        let outcome = self.exchange_refresh_token().await;
        match &outcome {
            Ok(credential) => {
                self.install(credential.clone());
                // The old refresh token is spent, so the new credential stays in
                // memory even when it cannot be written.
                if let Err(e) = self.inner.store.save_credential(credential).await {
                    tracing::error!("Failed to persist refreshed Tray credential: {}", e);
                }
                tracing::info!(
                    "Refreshed Tray access token, expires at {}",
                    credential.access_expires_at
                );
            }
            Err(e) => {
                tracing::error!("Tray token refresh failed ({}): {}", e.code(), e);
                self.fail(e.clone());
            }
        }

        *self
            .inner
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;

        outcome
    }

    async fn exchange_refresh_token(&self) -> Result<Credential, TrayError> {
        let current = self
            .credential()
            .ok_or_else(|| TrayError::InvalidToken("no Tray credential to refresh".to_string()))?;

        if current.refresh_token.is_empty() || current.api_host.is_empty() {
            return Err(TrayError::InvalidToken(
                "no refresh token available".to_string(),
            ));
        }
        if !current.refresh_valid_at(Utc::now()) {
            return Err(TrayError::InvalidToken(format!(
                "refresh token expired at {}",
                current.refresh_expires_at
            )));
        }

        let request = TransportRequest::new(Method::Get, format!("{}/auth", current.api_host))
            .query("refresh_token", current.refresh_token.clone());

        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(TrayError::InvalidToken(format!(
                "refresh rejected with HTTP {}: {}",
                response.status,
                response.error_message()
            )));
        }

        serde_json::from_value::<AuthResponse>(response.body)
            .map_err(|e| e.to_string())
            .and_then(|body| {
                body.into_credential(&current.api_address, Some(&current), self.inner.utc_offset)
            })
            .map_err(TrayError::InvalidToken)
    }

    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TrayError> {
        let transport = Arc::clone(&self.inner.transport);
        self.inner
            .limiter
            .submit(move || async move { transport.send(request).await })
            .await
    }

    fn install(&self, credential: Credential) {
        let mut state = self.inner.state.write().unwrap_or_else(PoisonError::into_inner);
        state.credential = Some(credential);
        state.failure = None;
    }

    fn fail(&self, err: TrayError) -> TrayError {
        let mut state = self.inner.state.write().unwrap_or_else(PoisonError::into_inner);
        state.failure = Some(err.clone());
        err
    }
}
