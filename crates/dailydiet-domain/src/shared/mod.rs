use serde::{Deserialize, Serialize};

pub mod pagination;
pub use pagination::{Page, PageRequest};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(UserId);
define_id!(MealId);
define_id!(SharedItemId);

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1xxx)
    InvalidCredentials = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    RateLimited = 1004,

    // Resource Not Found (2xxx)
    NotFound = 2001,
    UserNotFound = 2002,
    MealNotFound = 2003,
    SharedItemNotFound = 2004,

    // Business Logic (3xxx)
    Conflict = 3001,
    SelfFollow = 3002,
    InvalidGranularity = 3003,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DataIntegrityError = 4003,
    SerializationError = 4004,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::InvalidCredentials
            | ErrorCode::Unauthorized
            | ErrorCode::Forbidden
            | ErrorCode::RateLimited => ErrorSeverity::Warning,

            ErrorCode::NotFound
            | ErrorCode::UserNotFound
            | ErrorCode::MealNotFound
            | ErrorCode::SharedItemNotFound
            | ErrorCode::Conflict
            | ErrorCode::SelfFollow
            | ErrorCode::InvalidGranularity
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::RepositoryError
            | ErrorCode::DataIntegrityError
            | ErrorCode::SerializationError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("Shared item not found: {0}")]
    SharedItemNotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Cannot follow yourself: {0}")]
    SelfFollow(String),

    #[error("Invalid granularity: {0}")]
    InvalidGranularity(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Several field-level validation failures collected in one pass.
    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            DomainError::Unauthorized(_) => ErrorCode::Unauthorized,
            DomainError::Forbidden(_) => ErrorCode::Forbidden,
            DomainError::RateLimited(_) => ErrorCode::RateLimited,
            DomainError::UserNotFound(_) => ErrorCode::UserNotFound,
            DomainError::MealNotFound(_) => ErrorCode::MealNotFound,
            DomainError::SharedItemNotFound(_) => ErrorCode::SharedItemNotFound,
            DomainError::Conflict(_) => ErrorCode::Conflict,
            DomainError::SelfFollow(_) => ErrorCode::SelfFollow,
            DomainError::InvalidGranularity(_) => ErrorCode::InvalidGranularity,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Validation(_) | DomainError::ValidationFailed(_) => {
                ErrorCode::ValidationError
            }
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::NotFound(_) => ErrorCode::NotFound,
        }
    }

    /// Get error message
    pub fn message(&self) -> String {
        match self {
            DomainError::ValidationFailed(_) => "Validation failed".to_string(),
            DomainError::InvalidGranularity(value) => format!(
                "Invalid period '{}'. Use one of: daily, weekly, monthly",
                value
            ),
            DomainError::InvalidCredentials(msg)
            | DomainError::Unauthorized(msg)
            | DomainError::Forbidden(msg)
            | DomainError::RateLimited(msg)
            | DomainError::UserNotFound(msg)
            | DomainError::MealNotFound(msg)
            | DomainError::SharedItemNotFound(msg)
            | DomainError::Conflict(msg)
            | DomainError::SelfFollow(msg)
            | DomainError::Repository(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Validation(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Serialization(msg)
            | DomainError::NotFound(msg) => msg.clone(),
        }
    }

    /// Field-level details, when the error carries any
    pub fn details(&self) -> Option<&[String]> {
        match self {
            DomainError::ValidationFailed(details) => Some(details),
            _ => None,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
