use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyError {
    /// No `x-api-key` header on the request.
    Missing,
    /// Header present but does not match the configured key.
    Invalid,
}

impl fmt::Display for ApiKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiKeyError::Missing => write!(f, "API key is missing"),
            ApiKeyError::Invalid => write!(f, "API key is invalid"),
        }
    }
}

impl std::error::Error for ApiKeyError {}

/// Guards every mutating route.
pub trait ApiKeyVerifier: Send + Sync {
    fn verify(&self, presented: Option<&str>) -> Result<(), ApiKeyError>;
}
