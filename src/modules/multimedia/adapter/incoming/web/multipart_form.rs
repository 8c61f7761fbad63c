use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures::future::try_join_all;
use futures::StreamExt;
use std::collections::HashMap;
use tracing::{error, warn};

use crate::modules::multimedia::application::domain::policies::{UploadPolicy, UploadPolicyError};
use crate::modules::multimedia::application::ports::outgoing::{
    ImageFile, ImageUploadError, ImageUploader,
};
use crate::shared::api::ApiResponse;

/// Cap on any non-file form field.
pub const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// A multipart body split into text fields and the files of one field.
#[derive(Debug, Default)]
pub struct ParsedForm {
    pub texts: HashMap<String, String>,
    pub files: Vec<ImageFile>,
}

impl ParsedForm {
    /// Trimmed text value; blank counts as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.texts
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

#[derive(Debug)]
pub enum FormError {
    Malformed(String),
    Policy(UploadPolicyError),
}

impl FormError {
    pub fn into_response(self) -> HttpResponse {
        match self {
            FormError::Malformed(msg) => {
                warn!(error = %msg, "Rejected multipart body");
                ApiResponse::bad_request("INVALID_MULTIPART", &msg)
            }
            FormError::Policy(e @ UploadPolicyError::TooLarge { .. }) => {
                ApiResponse::payload_too_large("FILE_TOO_LARGE", &e.to_string())
            }
            FormError::Policy(e @ UploadPolicyError::UnsupportedType(_)) => {
                ApiResponse::unsupported_media_type("UNSUPPORTED_FILE_TYPE", &e.to_string())
            }
            FormError::Policy(e @ UploadPolicyError::TooManyFiles { .. }) => {
                ApiResponse::bad_request("TOO_MANY_FILES", &e.to_string())
            }
            FormError::Policy(e @ UploadPolicyError::InvalidFileName) => {
                ApiResponse::bad_request("INVALID_FILE_NAME", &e.to_string())
            }
        }
    }
}

/// Drains the multipart stream.
///
/// Parts named `file_field` that carry a filename are collected as images and
/// checked against `policy` while streaming; every other part is text. A file
/// part with an empty filename and no bytes (an untouched file input) is
/// skipped.
pub async fn read_form(
    mut payload: Multipart,
    file_field: &str,
    policy: &UploadPolicy,
) -> Result<ParsedForm, FormError> {
    let mut form = ParsedForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| FormError::Malformed(e.to_string()))?;

        let (name, file_name) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().unwrap_or_default().to_string(),
                cd.get_filename().map(str::to_string),
            ),
            None => (String::new(), None),
        };
        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        let is_file = name == file_field && file_name.is_some();
        let limit = if is_file {
            policy.max_file_size_bytes as usize
        } else {
            MAX_TEXT_FIELD_BYTES
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| FormError::Malformed(e.to_string()))?;
            if bytes.len() + chunk.len() > limit {
                return Err(if is_file {
                    FormError::Policy(UploadPolicyError::TooLarge {
                        limit_bytes: policy.max_file_size_bytes,
                    })
                } else {
                    FormError::Malformed(format!("field '{}' is too long", name))
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        if is_file {
            let file_name = file_name.unwrap_or_default();
            if file_name.trim().is_empty() && bytes.is_empty() {
                continue;
            }

            policy
                .check_name_and_type(&file_name, &content_type)
                .map_err(FormError::Policy)?;
            policy
                .check_count(form.files.len() + 1)
                .map_err(FormError::Policy)?;

            form.files.push(ImageFile {
                file_name,
                content_type,
                bytes,
            });
        } else if !name.is_empty() {
            let text = String::from_utf8(bytes)
                .map_err(|_| FormError::Malformed(format!("field '{}' is not UTF-8", name)))?;
            form.texts.insert(name, text);
        }
    }

    Ok(form)
}

/// Uploads every file concurrently; URLs come back in input order.
pub async fn upload_all(
    uploader: &(dyn ImageUploader + Send + Sync),
    files: Vec<ImageFile>,
) -> Result<Vec<String>, ImageUploadError> {
    try_join_all(files.into_iter().map(|file| uploader.upload(file)))
        .await
        .inspect_err(|e| error!(error = %e, "Image upload failed"))
}
