use warden_interfaces::api::error::ServerError;

use crate::utils::signature::SigningError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Failed to get nonce: {0}")]
    Nonce(ServerError),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("Authentication rejected: {0}")]
    Rejected(ServerError),

    #[error("Authentication response has no token")]
    MissingToken,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Failed to start chat thread: {0}")]
    Thread(ServerError),

    #[error("Failed to report chat activity: {0}")]
    Activity(ServerError),
}
