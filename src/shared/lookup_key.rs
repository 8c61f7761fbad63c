use std::fmt;
use uuid::Uuid;

/// How a path segment addresses a project-like record.
///
/// A segment that parses as a UUID is the internal id; anything else is the
/// business key `project_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Id(Uuid),
    ProjectId(String),
}

impl LookupKey {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match Uuid::parse_str(raw) {
            Ok(id) => LookupKey::Id(id),
            Err(_) => LookupKey::ProjectId(raw.to_string()),
        }
    }

    /// A segment that only ever names the business key.
    pub fn project_id(raw: &str) -> Self {
        LookupKey::ProjectId(raw.trim().to_string())
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Id(id) => write!(f, "{id}"),
            LookupKey::ProjectId(key) => write!(f, "{key}"),
        }
    }
}
