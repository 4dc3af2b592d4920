use alloy::primitives::Address;
use async_trait::async_trait;
use reqwest::Client;
use warden_interfaces::api::{
    error::ServerError,
    siwe::{
        interface::SiweClientInterface,
        types::{AuthenticateRequest, AuthenticateResponse, InitRequest, InitResponse},
    },
};

use super::utils::{headers::build_http_client, query::post_request};

pub const DEFAULT_PRIVY_BASE_URL: &str = "https://auth.privy.io";
pub const DEFAULT_PRIVY_APP_ID: &str = "cm7f00k5c02tibel0m4o9tdy1";
pub const PRIVY_APP_ID_HEADER: &str = "privy-app-id";

#[derive(Debug, Clone)]
pub struct SiweClient {
    base_url: String,
    client: Client,
}

impl SiweClient {
    pub fn new(base_url: &str, app_id: &str) -> Result<Self, ServerError> {
        let client = build_http_client(&[(PRIVY_APP_ID_HEADER, app_id)])?;
        Ok(SiweClient {
            base_url: base_url.to_string(),
            client,
        })
    }
}

#[async_trait(?Send)]
impl SiweClientInterface for SiweClient {
    async fn init(&self, address: Address) -> Result<String, ServerError> {
        let request = InitRequest {
            address: address.to_checksum(None),
        };
        let response: InitResponse = post_request(
            &self.client,
            &self.base_url,
            "/api/v1/siwe/init",
            None,
            &request,
        )
        .await?;
        Ok(response.nonce)
    }

    async fn authenticate(
        &self,
        message: &str,
        signature: &str,
        chain_id: &str,
    ) -> Result<AuthenticateResponse, ServerError> {
        let request = AuthenticateRequest {
            message: message.to_string(),
            signature: signature.to_string(),
            chain_id: chain_id.to_string(),
        };
        post_request(
            &self.client,
            &self.base_url,
            "/api/v1/siwe/authenticate",
            None,
            &request,
        )
        .await
    }
}
