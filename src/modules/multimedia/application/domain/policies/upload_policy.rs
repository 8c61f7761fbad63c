use std::fmt;

/// Limits applied to one multipart upload field.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_files: usize,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPolicyError {
    UnsupportedType(String),
    TooLarge { limit_bytes: u64 },
    TooManyFiles { limit: usize },
    InvalidFileName,
}

impl fmt::Display for UploadPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadPolicyError::UnsupportedType(mime) => {
                write!(f, "unsupported file type: {}", mime)
            }
            UploadPolicyError::TooLarge { limit_bytes } => {
                write!(f, "file exceeds the {} byte limit", limit_bytes)
            }
            UploadPolicyError::TooManyFiles { limit } => {
                write!(f, "at most {} files may be uploaded", limit)
            }
            UploadPolicyError::InvalidFileName => write!(f, "invalid file name"),
        }
    }
}

impl std::error::Error for UploadPolicyError {}

impl UploadPolicy {
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];
    pub const DEFAULT_MAX_FILE_NAME_LEN: usize = 255;

    /// Single `image` field on achievements.
    pub fn achievement_image() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            max_files: 1,
            max_file_name_len: Self::DEFAULT_MAX_FILE_NAME_LEN,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }

    /// Repeated `images` field on project details.
    pub fn project_images() -> Self {
        Self {
            max_file_size_bytes: 10 * 1024 * 1024, // 10MB
            max_files: 10,
            max_file_name_len: Self::DEFAULT_MAX_FILE_NAME_LEN,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }

    pub fn check_name_and_type(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> Result<(), UploadPolicyError> {
        let name = file_name.trim();
        if name.is_empty() || name.len() > self.max_file_name_len {
            return Err(UploadPolicyError::InvalidFileName);
        }

        let mime = content_type.trim().to_ascii_lowercase();
        if !self.allowed_mime_types.contains(&mime.as_str()) {
            return Err(UploadPolicyError::UnsupportedType(mime));
        }

        Ok(())
    }

    pub fn check_size(&self, size_bytes: u64) -> Result<(), UploadPolicyError> {
        if size_bytes > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge {
                limit_bytes: self.max_file_size_bytes,
            });
        }
        Ok(())
    }

    pub fn check_count(&self, count: usize) -> Result<(), UploadPolicyError> {
        if count > self.max_files {
            return Err(UploadPolicyError::TooManyFiles {
                limit: self.max_files,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievement_limits() {
        let policy = UploadPolicy::achievement_image();
        assert!(policy.check_size(5 * 1024 * 1024).is_ok());
        assert_eq!(
            policy.check_size(5 * 1024 * 1024 + 1),
            Err(UploadPolicyError::TooLarge {
                limit_bytes: 5 * 1024 * 1024
            })
        );
        assert!(policy.check_count(1).is_ok());
        assert!(policy.check_count(2).is_err());
    }

    #[test]
    fn test_project_image_limits() {
        let policy = UploadPolicy::project_images();
        assert!(policy.check_size(10 * 1024 * 1024).is_ok());
        assert!(policy.check_count(10).is_ok());
        assert_eq!(
            policy.check_count(11),
            Err(UploadPolicyError::TooManyFiles { limit: 10 })
        );
    }

    #[test]
    fn test_only_images_allowed() {
        let policy = UploadPolicy::project_images();
        assert!(policy.check_name_and_type("shot.png", "image/png").is_ok());
        assert!(policy.check_name_and_type("shot.GIF", "IMAGE/GIF").is_ok());
        assert_eq!(
            policy.check_name_and_type("notes.pdf", "application/pdf"),
            Err(UploadPolicyError::UnsupportedType("application/pdf".to_string()))
        );
    }

    #[test]
    fn test_file_name_rules() {
        let policy = UploadPolicy::achievement_image();
        assert_eq!(
            policy.check_name_and_type("  ", "image/png"),
            Err(UploadPolicyError::InvalidFileName)
        );
        let long = format!("{}.png", "a".repeat(300));
        assert_eq!(
            policy.check_name_and_type(&long, "image/png"),
            Err(UploadPolicyError::InvalidFileName)
        );
    }
}
