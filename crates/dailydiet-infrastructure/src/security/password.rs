use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::RngCore;

use dailydiet_domain::auth::PasswordHasher;
use dailydiet_domain::shared::DomainError;

/// Argon2id with default parameters, PHC-encoded
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let mut salt_bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| DomainError::Infrastructure(format!("Failed to encode salt: {}", e)))?;

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::Infrastructure(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| {
            DomainError::DataIntegrity(format!("Stored password hash is invalid: {}", e))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::Infrastructure(format!(
                "Failed to verify password: {}",
                e
            ))),
        }
    }
}
