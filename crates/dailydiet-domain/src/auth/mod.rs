use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

/// Claims carried by an access token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub user_id: UserId,
    /// Expiry as seconds since the Unix epoch
    pub exp: i64,
}

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError>;
}

pub trait AccessTokenIssuer: Send + Sync {
    fn issue(&self, user_id: UserId) -> Result<String, DomainError>;

    /// Fails with `Unauthorized` for malformed, tampered or expired tokens.
    fn verify(&self, token: &str) -> Result<AccessClaims, DomainError>;
}

pub trait RefreshTokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}
