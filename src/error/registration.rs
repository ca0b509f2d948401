use thiserror::Error;

use crate::error::tray::TrayError;

/// Failures of the email registration commands.
///
/// Every variant except `Database` carries a message meant to be shown to the
/// Discord user who ran the command.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("The email {0} is already registered to another user")]
    EmailAlreadyRegistered(String),

    #[error("You already registered the email {0}; unlink it first to use another one")]
    UserAlreadyRegistered(String),

    #[error("No customer found with the email {0}")]
    CustomerNotFound(String),

    #[error("You have no registered email")]
    NotRegistered,

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Tray(#[from] TrayError),
}
