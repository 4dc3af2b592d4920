use async_trait::async_trait;
use reqwest::Client;
use warden_interfaces::{
    api::{
        agents::{
            interface::AgentsClientInterface,
            types::{CreateThreadRequest, CreateThreadResponse},
        },
        error::ServerError,
    },
    data::session_token::SessionToken,
};

use super::utils::{headers::build_http_client, query::post_request};

pub const DEFAULT_AGENTS_BASE_URL: &str =
    "https://warden-app-agents-prod-new-d1025b697dc25df9a5654bc047bbe875.us.langgraph.app";
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone)]
pub struct AgentsClient {
    base_url: String,
    client: Client,
}

impl AgentsClient {
    pub fn new(base_url: &str, api_key: Option<&str>) -> Result<Self, ServerError> {
        let client = match api_key {
            Some(key) => build_http_client(&[(API_KEY_HEADER, key)])?,
            None => build_http_client(&[])?,
        };
        Ok(AgentsClient {
            base_url: base_url.to_string(),
            client,
        })
    }
}

#[async_trait(?Send)]
impl AgentsClientInterface for AgentsClient {
    async fn create_thread(&self, token: &SessionToken) -> Result<String, ServerError> {
        let response: CreateThreadResponse = post_request(
            &self.client,
            &self.base_url,
            "/threads",
            Some(token),
            &CreateThreadRequest::default(),
        )
        .await?;
        Ok(response.thread_id)
    }
}
