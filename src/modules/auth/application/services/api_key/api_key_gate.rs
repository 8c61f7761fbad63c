use sha2::{Digest, Sha256};

use crate::modules::auth::application::ports::incoming::{ApiKeyError, ApiKeyVerifier};

/// Static single-key gate.
///
/// Only the SHA-256 digest of the configured key is kept, and presented keys
/// are compared digest to digest so the comparison cost does not depend on
/// how many leading bytes match.
#[derive(Clone)]
pub struct ApiKeyGate {
    expected_digest: [u8; 32],
}

impl ApiKeyGate {
    pub fn new(app_key: &str) -> Self {
        Self {
            expected_digest: digest(app_key),
        }
    }
}

impl ApiKeyVerifier for ApiKeyGate {
    fn verify(&self, presented: Option<&str>) -> Result<(), ApiKeyError> {
        // compared byte for byte; surrounding whitespace makes a different key
        let presented = presented
            .filter(|k| !k.is_empty())
            .ok_or(ApiKeyError::Missing)?;

        let candidate = digest(presented);
        let diff = candidate
            .iter()
            .zip(self.expected_digest.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        if diff == 0 {
            Ok(())
        } else {
            Err(ApiKeyError::Invalid)
        }
    }
}

fn digest(key: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_key_passes() {
        let gate = ApiKeyGate::new("s3cret");
        assert!(gate.verify(Some("s3cret")).is_ok());
    }

    #[test]
    fn test_missing_key() {
        let gate = ApiKeyGate::new("s3cret");
        assert_eq!(gate.verify(None), Err(ApiKeyError::Missing));
        assert_eq!(gate.verify(Some("")), Err(ApiKeyError::Missing));
    }

    #[test]
    fn test_padded_key_is_not_trimmed() {
        let gate = ApiKeyGate::new("s3cret");
        assert_eq!(gate.verify(Some(" s3cret ")), Err(ApiKeyError::Invalid));
        assert_eq!(gate.verify(Some("  ")), Err(ApiKeyError::Invalid));
    }

    #[test]
    fn test_wrong_key() {
        let gate = ApiKeyGate::new("s3cret");
        assert_eq!(gate.verify(Some("s3cre")), Err(ApiKeyError::Invalid));
        assert_eq!(gate.verify(Some("S3CRET")), Err(ApiKeyError::Invalid));
    }

    #[test]
    fn test_digest_length() {
        assert_eq!(digest("any").len(), 32);
        assert_ne!(digest("a"), digest("b"));
    }
}
