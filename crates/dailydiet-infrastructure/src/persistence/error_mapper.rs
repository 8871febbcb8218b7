use dailydiet_domain::shared::DomainError;

/// Translates sqlx failures into domain errors, prefixed with the operation name
pub struct RepositoryErrorMapper;

impl RepositoryErrorMapper {
    pub fn map_sqlx_error(error: sqlx::Error, context: &str) -> DomainError {
        match &error {
            sqlx::Error::RowNotFound => {
                DomainError::NotFound(format!("{}: row not found", context))
            }
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::Conflict(format!("{}: {}", context, db_err.message()))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                DomainError::DataIntegrity(format!("{}: {}", context, db_err.message()))
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DomainError::Infrastructure(format!("{}: {}", context, error))
            }
            _ => DomainError::Repository(format!("{}: {}", context, error)),
        }
    }
}
