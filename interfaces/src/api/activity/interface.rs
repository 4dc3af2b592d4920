use async_trait::async_trait;

use crate::{api::error::ServerError, data::session_token::SessionToken};

use super::types::{ActivityOutcome, ActivityRecord};

#[async_trait(?Send)]
pub trait ActivityClientInterface: Sync + Send {
    async fn submit_activity(
        &self,
        token: &SessionToken,
        record: &ActivityRecord,
    ) -> Result<ActivityOutcome, ServerError>;
}
