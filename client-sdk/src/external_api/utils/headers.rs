use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ORIGIN, REFERER, USER_AGENT},
    Client,
};
use warden_interfaces::api::error::ServerError;

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
pub const APP_ORIGIN: &str = "https://app.wardenprotocol.org";
pub const APP_REFERER: &str = "https://app.wardenprotocol.org/";

/// Headers every request carries, matching what the web app sends.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ORIGIN, HeaderValue::from_static(APP_ORIGIN));
    headers.insert(REFERER, HeaderValue::from_static(APP_REFERER));
    headers
}

/// Builds a client with the browser headers plus `extra` installed as defaults.
pub fn build_http_client(extra: &[(&'static str, &str)]) -> Result<Client, ServerError> {
    let mut headers = browser_headers();
    for &(name, value) in extra {
        let header = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ServerError::InvalidRequest(format!("Invalid header name {name}: {e}"))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            ServerError::InvalidRequest(format!("Invalid value for header {name}: {e}"))
        })?;
        headers.insert(header, value);
    }
    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| ServerError::InvalidRequest(format!("Failed to build http client: {e}")))
}
