use async_trait::async_trait;
use reqwest::Client;
use warden_interfaces::{
    api::{
        activity::{
            interface::ActivityClientInterface,
            types::{ActivityOutcome, ActivityRecord},
        },
        error::ServerError,
    },
    data::session_token::SessionToken,
};

use super::utils::{headers::build_http_client, query::post_request_without_response};

pub const DEFAULT_WARDEN_API_BASE_URL: &str = "https://api.app.wardenprotocol.org/api";

/// Substring the backend puts in the error message of a duplicate submission.
const ALREADY_RECORDED: &str = "already recorded";

#[derive(Debug, Clone)]
pub struct ActivityClient {
    base_url: String,
    client: Client,
}

impl ActivityClient {
    pub fn new(base_url: &str) -> Result<Self, ServerError> {
        Ok(ActivityClient {
            base_url: base_url.to_string(),
            client: build_http_client(&[])?,
        })
    }
}

#[async_trait(?Send)]
impl ActivityClientInterface for ActivityClient {
    async fn submit_activity(
        &self,
        token: &SessionToken,
        record: &ActivityRecord,
    ) -> Result<ActivityOutcome, ServerError> {
        let result = post_request_without_response(
            &self.client,
            &self.base_url,
            "/tokens/activity",
            Some(token),
            record,
        )
        .await;
        match result {
            Ok(()) => Ok(ActivityOutcome::Recorded),
            Err(e) if is_already_recorded(&e) => Ok(ActivityOutcome::AlreadyRecorded),
            Err(e) => Err(e),
        }
    }
}

fn is_already_recorded(error: &ServerError) -> bool {
    error
        .server_message()
        .is_some_and(|message| message.contains(ALREADY_RECORDED))
}
