use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Authentication rejected: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Non-success status outside the mapped cases
    #[error("Service returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to deserialize service response: {0}")]
    Deserialize(String),
}

impl ClientError {
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            ClientError::Auth(_)
                | ClientError::Api {
                    status: 401 | 403,
                    ..
                }
        )
    }
}
