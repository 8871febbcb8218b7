use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dailydiet_domain::shared::{DomainError, ErrorSeverity};
use serde::Serialize;

/// JSON error body returned by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,

    /// Numeric error code (1xxx-6xxx range)
    pub code: u16,

    /// Field-level failures, when several were collected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// HTTP-facing wrapper around `DomainError`
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation(_)
            | DomainError::ValidationFailed(_)
            | DomainError::InvalidInput(_)
            | DomainError::InvalidGranularity(_)
            | DomainError::SelfFollow(_) => StatusCode::BAD_REQUEST,

            DomainError::InvalidCredentials(_) | DomainError::Unauthorized(_) => {
                StatusCode::UNAUTHORIZED
            }
            DomainError::Forbidden(_) => StatusCode::FORBIDDEN,

            DomainError::NotFound(_)
            | DomainError::UserNotFound(_)
            | DomainError::MealNotFound(_)
            | DomainError::SharedItemNotFound(_) => StatusCode::NOT_FOUND,

            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,

            DomainError::Repository(_)
            | DomainError::Infrastructure(_)
            | DomainError::DataIntegrity(_)
            | DomainError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let status = self.status();
        let error = if status.is_server_error() {
            // internal details stay in the log
            "Internal server error".to_string()
        } else {
            self.0.message()
        };

        ErrorBody {
            error,
            code: self.0.code().code(),
            details: self.0.details().map(|d| d.to_vec()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.0.format_with_code();
        match self.0.severity() {
            ErrorSeverity::Error => tracing::error!(%error, "Request failed"),
            ErrorSeverity::Warning => {
                tracing::warn!(status = status.as_u16(), %error, "Request rejected")
            }
            ErrorSeverity::Info => {
                tracing::debug!(status = status.as_u16(), %error, "Request rejected")
            }
        }

        (status, Json(self.body())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
