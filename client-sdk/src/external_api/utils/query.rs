use reqwest::{header::AUTHORIZATION, Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use warden_interfaces::{api::error::ServerError, data::session_token::SessionToken};

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub async fn post_request<B: Serialize, R: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    token: Option<&SessionToken>,
    body: &B,
) -> Result<R, ServerError> {
    let url = format!("{}{}", base_url, endpoint);
    let response = send_post(client, &url, token, body).await?;
    response
        .json::<R>()
        .await
        .map_err(|e| ServerError::DeserializationError(e.to_string()))
}

/// Like [`post_request`] but only checks the status; the body is dropped.
pub async fn post_request_without_response<B: Serialize>(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    token: Option<&SessionToken>,
    body: &B,
) -> Result<(), ServerError> {
    let url = format!("{}{}", base_url, endpoint);
    send_post(client, &url, token, body).await?;
    Ok(())
}

async fn send_post<B: Serialize>(
    client: &Client,
    url: &str,
    token: Option<&SessionToken>,
    body: &B,
) -> Result<Response, ServerError> {
    let mut request = client.post(url).json(body);
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, token.bearer());
    }
    let response = request
        .send()
        .await
        .map_err(|e| ServerError::NetworkError(e.to_string()))?;
    handle_response(response, url).await
}

async fn handle_response(response: Response, url: &str) -> Result<Response, ServerError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error response".to_string());
    let error_message = match serde_json::from_str::<ErrorResponse>(&error_text) {
        Ok(ErrorResponse {
            message: Some(message),
            ..
        }) => message,
        Ok(ErrorResponse {
            error: Some(error), ..
        }) => error,
        _ => error_text,
    };
    Err(ServerError::ServerError(
        status.as_u16(),
        error_message,
        url.to_string(),
    ))
}
