pub mod repositories;

mod database;
mod error_mapper;
mod repository_base;

pub use database::Database;
pub use error_mapper::RepositoryErrorMapper;
pub use repository_base::SqliteRepositoryBase;

use chrono::{DateTime, SecondsFormat, Utc};
use dailydiet_domain::shared::DomainError;

/// Fixed-width RFC 3339 so that TEXT ordering matches chronological ordering.
pub(crate) fn encode_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn decode_instant(value: &str, column: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DomainError::DataIntegrity(format!("Invalid {}: {}", column, e)))
}
