use thiserror::Error;

/// Errors produced while talking to the Tray Commerce API or storing what it returns.
///
/// The type is `Clone` so a single refresh outcome can be handed to every caller
/// waiting on it. Wrapped causes are therefore carried as messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrayError {
    /// The auth endpoint rejected the consumer credentials or authorization code.
    #[error("Tray authentication failed: {0}")]
    AuthFailed(String),

    /// No usable access token: none loaded, refresh token missing or expired, or the
    /// refresh request was rejected.
    #[error("Invalid Tray token: {0}")]
    InvalidToken(String),

    /// Transport failure, timeout or non-2xx response.
    #[error("Tray request failed: {0}")]
    RequestError(String),

    /// A record is missing a field it cannot be stored without.
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// The customer does not exist remotely or locally.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// The import could not run at all.
    #[error("Customer import aborted: {0}")]
    ImportError(String),

    /// A store collaborator failed to read or write.
    #[error("Storage failure: {0}")]
    Storage(String),

    /// A response body did not have the expected shape.
    #[error("Unexpected Tray response: {0}")]
    Decode(String),
}

impl TrayError {
    /// Stable code used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthFailed(_) => "AUTH_FAILED",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::RequestError(_) => "REQUEST_ERROR",
            Self::MissingRequiredField(_) => "MISSING_REQUIRED_FIELD",
            Self::CustomerNotFound(_) => "CUSTOMER_NOT_FOUND",
            Self::ImportError(_) => "IMPORT_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }

    /// Reclassifies a credential failure as `InvalidToken`, keeping its message.
    pub fn into_invalid_token(self) -> Self {
        match self {
            Self::InvalidToken(msg) => Self::InvalidToken(msg),
            other => Self::InvalidToken(other.to_string()),
        }
    }
}

impl From<sea_orm::DbErr> for TrayError {
    fn from(err: sea_orm::DbErr) -> Self {
        TrayError::Storage(err.to_string())
    }
}
