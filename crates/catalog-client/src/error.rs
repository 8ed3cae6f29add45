use thiserror::Error;

/// Failure of a single metadata request. No variant is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (DNS, connect, timeout, body read).
    #[error("Request to {endpoint} failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("TMDB returned {status} for {endpoint}: {message}")]
    Api {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Failed to decode TMDB response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    /// One half of a paired request failed, so the pair failed.
    #[error("{operation} failed: {source}")]
    Combined {
        operation: &'static str,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    pub fn api(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        }
    }

    pub fn combined(operation: &'static str, source: ClientError) -> Self {
        ClientError::Combined {
            operation,
            source: Box::new(source),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Combined { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
