#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Server error status={0}, message={1}, url={2}")]
    ServerError(u16, String, String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ServerError {
    /// HTTP status of a non-2xx response, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServerError::ServerError(status, ..) => Some(*status),
            _ => None,
        }
    }

    /// Error message extracted from a non-2xx response body.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ServerError::ServerError(_, message, _) => Some(message.as_str()),
            _ => None,
        }
    }
}
