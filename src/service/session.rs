use crate::config::TrayCredentials;
use crate::error::{config::ConfigError, tray::TrayError, AppError};
use crate::tray::client::TrayClient;
use crate::tray::credential::Credential;

/// Brings up a usable Tray session before a batch job runs.
pub struct SessionService<'a> {
    client: &'a TrayClient,
}

impl<'a> SessionService<'a> {
    pub fn new(client: &'a TrayClient) -> Self {
        Self { client }
    }

    /// Makes sure the client holds a usable credential.
    ///
    /// The stored credential is used, refreshed when expired. When there is none or
    /// it can no longer be refreshed, a new one is obtained with the configured
    /// consumer credentials and authorization code.
    ///
    /// # Arguments
    /// - `credentials` - Consumer credentials from the environment, if configured
    ///
    /// # Returns
    /// - `Ok(Credential)` - Usable credential
    /// - `Err(AppError::ConfigErr)` - Authentication needed but no credentials configured
    /// - `Err(AppError::TrayErr)` - Storage failure or authentication rejected
    pub async fn establish(
        &self,
        credentials: Option<&TrayCredentials>,
    ) -> Result<Credential, AppError> {
        match self.client.ensure_valid_session().await {
            Ok(credential) => {
                tracing::info!("Using stored Tray credential");
                return Ok(credential);
            }
            Err(TrayError::InvalidToken(reason)) => {
                tracing::warn!("Stored Tray credential unusable: {}", reason);
            }
            Err(e) => return Err(e.into()),
        }

        let credentials = credentials
            .ok_or_else(|| ConfigError::MissingEnvVar("TRAY_CONSUMER_KEY".to_string()))?;

        tracing::info!("Authenticating against {}", credentials.api_address);
        let credential = self
            .client
            .tokens()
            .authenticate(
                &credentials.api_address,
                &credentials.consumer_key,
                &credentials.consumer_secret,
                &credentials.code,
            )
            .await?;

        Ok(credential)
    }
}
