use chrono::Utc;
use warden_interfaces::{
    api::{
        activity::interface::ActivityClientInterface, agents::interface::AgentsClientInterface,
        siwe::interface::SiweClientInterface,
    },
    data::{session_token::SessionToken, sign_in_message::SignInMessage},
};

use crate::utils::signature::{signature_to_hex, Credential};

use super::{client::Client, error::AuthError};

impl<S, A, G> Client<S, A, G>
where
    S: SiweClientInterface,
    A: ActivityClientInterface,
    G: AgentsClientInterface,
{
    /// Nonce, sign, token exchange. Each step is attempted once.
    pub async fn authenticate(&self, credential: &Credential) -> Result<SessionToken, AuthError> {
        let address = credential.address();
        let nonce = self.siwe.init(address).await.map_err(AuthError::Nonce)?;
        log::info!("Received nonce");
        self.pause().await;

        let message = SignInMessage::new(&self.config.sign_in, address, &nonce, Utc::now());
        let message = message.to_string();
        let signature = credential.sign_message(&message).await?;

        let response = self
            .siwe
            .authenticate(
                &message,
                &signature_to_hex(&signature),
                &self.config.sign_in.caip2_chain_id(),
            )
            .await
            .map_err(AuthError::Rejected)?;
        match response.token {
            Some(token) if !token.is_empty() => Ok(SessionToken::new(token)),
            _ => Err(AuthError::MissingToken),
        }
    }

    /// Same as [`Self::authenticate`], but logs the failure and returns `None`.
    pub async fn login(&self, credential: &Credential) -> Option<SessionToken> {
        log::info!("Logging in account {}", credential.address());
        match self.authenticate(credential).await {
            Ok(token) => {
                log::info!("Login succeeded");
                Some(token)
            }
            Err(e) => {
                log::error!("Login failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use alloy::primitives::Address;
    use async_trait::async_trait;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use warden_interfaces::api::{error::ServerError, siwe::types::AuthenticateResponse};

    use super::*;
    use crate::{
        client::{
            client::test_utils::{mock_client, PRIVATE_KEY},
            config::ClientConfig,
        },
        external_api::{activity::ActivityClient, agents::AgentsClient},
    };

    #[tokio::test]
    async fn test_login_succeeds() {
        let mut server = Server::new_async().await;
        let credential = Credential::from_private_key(PRIVATE_KEY).unwrap();
        let init = server
            .mock("POST", "/api/v1/siwe/init")
            .match_body(Matcher::Json(
                json!({ "address": credential.address().to_checksum(None) }),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"nonce": "n0nce123"}"#)
            .create_async()
            .await;
        let authenticate = server
            .mock("POST", "/api/v1/siwe/authenticate")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({ "chainId": "eip155:1" })),
                Matcher::Regex("Nonce: n0nce123".to_string()),
                Matcher::Regex(r#""signature":"0x[0-9a-f]{130}""#.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token": "jwt-token"}"#)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        let token = client.login(&credential).await;

        assert_eq!(token, Some(SessionToken::new("jwt-token")));
        init.assert_async().await;
        authenticate.assert_async().await;
    }

    #[tokio::test]
    async fn test_nonce_failure_short_circuits() {
        let mut server = Server::new_async().await;
        let init = server
            .mock("POST", "/api/v1/siwe/init")
            .with_status(500)
            .with_body("Internal Server Error")
            .expect(2)
            .create_async()
            .await;
        let authenticate = server
            .mock("POST", "/api/v1/siwe/authenticate")
            .expect(0)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        let credential = Credential::from_private_key(PRIVATE_KEY).unwrap();
        let result = client.authenticate(&credential).await;

        match result {
            Err(AuthError::Nonce(e)) => assert_eq!(e.status(), Some(500)),
            other => panic!("expected nonce error, got {other:?}"),
        }
        assert!(client.login(&credential).await.is_none());
        init.assert_async().await;
        authenticate.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejected_signature() {
        let mut server = Server::new_async().await;
        let _init = server
            .mock("POST", "/api/v1/siwe/init")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"nonce": "n0nce123"}"#)
            .create_async()
            .await;
        let _authenticate = server
            .mock("POST", "/api/v1/siwe/authenticate")
            .with_status(401)
            .with_body(r#"{"error": "Invalid signature"}"#)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        let credential = Credential::from_private_key(PRIVATE_KEY).unwrap();
        match client.authenticate(&credential).await {
            Err(AuthError::Rejected(e)) => {
                assert_eq!(e.server_message(), Some("Invalid signature"))
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_token() {
        let mut server = Server::new_async().await;
        let _init = server
            .mock("POST", "/api/v1/siwe/init")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"nonce": "n0nce123"}"#)
            .create_async()
            .await;
        let _authenticate = server
            .mock("POST", "/api/v1/siwe/authenticate")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"token": ""}"#)
            .create_async()
            .await;

        let client = mock_client(&server.url());
        let credential = Credential::from_private_key(PRIVATE_KEY).unwrap();
        assert!(matches!(
            client.authenticate(&credential).await,
            Err(AuthError::MissingToken)
        ));
    }

    /// Identity provider stand-in that keeps what it was asked to verify.
    #[derive(Default)]
    struct RecordingSiwe {
        submitted: Mutex<Option<(String, String, String)>>,
    }

    #[async_trait(?Send)]
    impl SiweClientInterface for RecordingSiwe {
        async fn init(&self, _address: Address) -> Result<String, ServerError> {
            Ok("n0nce123".to_string())
        }

        async fn authenticate(
            &self,
            message: &str,
            signature: &str,
            chain_id: &str,
        ) -> Result<AuthenticateResponse, ServerError> {
            *self.submitted.lock().unwrap() = Some((
                message.to_string(),
                signature.to_string(),
                chain_id.to_string(),
            ));
            Ok(AuthenticateResponse {
                token: Some("jwt-token".to_string()),
            })
        }
    }

    #[tokio::test]
    async fn test_signed_message_verifies_against_address() {
        let client = Client {
            siwe: RecordingSiwe::default(),
            activity: ActivityClient::new("http://127.0.0.1:1").unwrap(),
            agents: AgentsClient::new("http://127.0.0.1:1", None).unwrap(),
            config: ClientConfig {
                task_delay_ms: 0,
                ..Default::default()
            },
        };
        let credential = Credential::from_private_key(PRIVATE_KEY).unwrap();
        client.authenticate(&credential).await.unwrap();

        let (message, signature, chain_id) = client.siwe.submitted.lock().unwrap().take().unwrap();
        let lines: Vec<&str> = message.split('\n').collect();
        assert_eq!(
            lines[0],
            "app.wardenprotocol.org wants you to sign in with your Ethereum account:"
        );
        assert_eq!(lines[1], credential.address().to_checksum(None));
        assert_eq!(lines[8], "Nonce: n0nce123");
        let issued_at = lines[9].strip_prefix("Issued At: ").unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(issued_at).is_ok());
        assert!(issued_at.ends_with('Z'));
        assert_eq!(chain_id, "eip155:1");

        let expected = credential.sign_message(&message).await.unwrap();
        assert_eq!(signature, signature_to_hex(&expected));
        assert!(crate::utils::signature::verify_signature(
            &message,
            &expected,
            credential.address()
        ));
    }
}
