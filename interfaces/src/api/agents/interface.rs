use async_trait::async_trait;

use crate::{api::error::ServerError, data::session_token::SessionToken};

/// AI agents backend. Only thread creation is used; replies are never read.
#[async_trait(?Send)]
pub trait AgentsClientInterface: Sync + Send {
    /// Opens a new conversation thread and returns its id.
    async fn create_thread(&self, token: &SessionToken) -> Result<String, ServerError>;
}
