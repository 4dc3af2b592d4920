use alloy::primitives::Address;
use async_trait::async_trait;

use crate::api::error::ServerError;

use super::types::AuthenticateResponse;

/// Sign-In-With-Ethereum identity provider.
#[async_trait(?Send)]
pub trait SiweClientInterface: Sync + Send {
    /// Requests a one-time nonce scoped to `address`.
    async fn init(&self, address: Address) -> Result<String, ServerError>;

    /// Exchanges a signed sign-in message for a session.
    async fn authenticate(
        &self,
        message: &str,
        signature: &str,
        chain_id: &str,
    ) -> Result<AuthenticateResponse, ServerError>;
}
