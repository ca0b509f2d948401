//! Error types for the bot, the Tray integration and the sync binary.
//!
//! `AppError` is the top-level error returned by startup code, services and
//! command handlers. Domain errors live in their own modules and convert into it
//! with `#[from]`.

pub mod config;
pub mod registration;
pub mod tray;

use thiserror::Error;

use crate::error::{config::ConfigError, registration::RegistrationError, tray::TrayError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Tray Commerce API or customer import error.
    #[error(transparent)]
    TrayErr(#[from] TrayError),

    /// Email registration command error.
    #[error(transparent)]
    RegistrationErr(#[from] RegistrationError),

    /// Resource not found error.
    #[error("{0}")]
    NotFound(String),

    /// Invalid command input.
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with a message meant for logs only.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to keep the size of every `AppError` variant small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message safe to show to the Discord user that triggered the error.
    ///
    /// Validation failures are echoed back verbatim. Everything else is reduced to
    /// a generic message and the details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::RegistrationErr(
                err @ (RegistrationError::InvalidEmail(_)
                | RegistrationError::EmailAlreadyRegistered(_)
                | RegistrationError::UserAlreadyRegistered(_)
                | RegistrationError::CustomerNotFound(_)
                | RegistrationError::NotRegistered),
            ) => err.to_string(),
            Self::RegistrationErr(RegistrationError::Tray(TrayError::CustomerNotFound(_))) => {
                "No customer found with that email".to_string()
            }
            _ => "Something went wrong while handling this command, please try again later"
                .to_string(),
        }
    }
}
