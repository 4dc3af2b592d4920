use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitRequest {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InitResponse {
    pub nonce: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest {
    pub message: String,
    pub signature: String,
    /// CAIP-2 chain reference, e.g. `eip155:1`.
    pub chain_id: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthenticateResponse {
    #[serde(default)]
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_request_field_names() {
        let request = AuthenticateRequest {
            message: "hello".to_string(),
            signature: "0x00".to_string(),
            chain_id: "eip155:1".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"message": "hello", "signature": "0x00", "chainId": "eip155:1"})
        );
    }

    #[test]
    fn test_authenticate_response_ignores_extra_fields() {
        let response: AuthenticateResponse = serde_json::from_str(
            r#"{"user":{"id":"did:privy:abc"},"token":"jwt-token","refresh_token":null}"#,
        )
        .unwrap();
        assert_eq!(response.token.as_deref(), Some("jwt-token"));

        let response: AuthenticateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.token.is_none());
    }
}
