use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{DomainError, UserId};

const MAX_USERNAME_LEN: usize = 64;
const MAX_EMAIL_LEN: usize = 120;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: Option<UserId>,
    username: String,
    email: String,
    password_hash: String,
    refresh_token: Option<String>,
    refresh_token_expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl User {
    pub const REFRESH_TOKEN_EXPIRATION_DAYS: i64 = 30;

    /// `password_hash` must already be hashed; plain passwords never reach the aggregate.
    pub fn register(
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<Self, DomainError> {
        let username = validate_username(&username)?;
        let email = validate_email(&email)?;

        if password_hash.is_empty() {
            return Err(DomainError::Validation(
                "Password hash cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: None,
            username,
            email,
            password_hash,
            refresh_token: None,
            refresh_token_expires_at: None,
            created_at: Utc::now(),
        })
    }

    pub fn restore(
        id: UserId,
        username: String,
        email: String,
        password_hash: String,
        refresh_token: Option<String>,
        refresh_token_expires_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            username,
            email,
            password_hash,
            refresh_token,
            refresh_token_expires_at,
            created_at,
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Id of a persisted user.
    pub fn persisted_id(&self) -> Result<UserId, DomainError> {
        self.id.ok_or_else(|| {
            DomainError::DataIntegrity(format!("User '{}' has not been persisted", self.username))
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn refresh_token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.refresh_token_expires_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn update_username(&mut self, username: String) -> Result<(), DomainError> {
        self.username = validate_username(&username)?;
        Ok(())
    }

    pub fn update_email(&mut self, email: String) -> Result<(), DomainError> {
        self.email = validate_email(&email)?;
        Ok(())
    }

    pub fn update_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        // a password change invalidates outstanding refresh tokens
        self.revoke_refresh_token();
    }

    pub fn issue_refresh_token(&mut self, token: String, now: DateTime<Utc>) {
        self.refresh_token = Some(token);
        self.refresh_token_expires_at =
            Some(now + Duration::days(Self::REFRESH_TOKEN_EXPIRATION_DAYS));
    }

    pub fn revoke_refresh_token(&mut self) {
        self.refresh_token = None;
        self.refresh_token_expires_at = None;
    }

    pub fn has_valid_refresh_token(&self, token: &str, now: DateTime<Utc>) -> bool {
        match (&self.refresh_token, self.refresh_token_expires_at) {
            (Some(current), Some(expires_at)) => current == token && now < expires_at,
            _ => false,
        }
    }
}

fn validate_username(username: &str) -> Result<String, DomainError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(DomainError::Validation(
            "Username cannot be empty".to_string(),
        ));
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(DomainError::Validation(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LEN
        )));
    }
    if username.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(DomainError::Validation(
            "Username cannot contain whitespace or '/'".to_string(),
        ));
    }
    Ok(username.to_string())
}

fn validate_email(email: &str) -> Result<String, DomainError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(DomainError::Validation("Email cannot be empty".to_string()));
    }
    if email.chars().count() > MAX_EMAIL_LEN {
        return Err(DomainError::Validation(format!(
            "Email must be at most {} characters",
            MAX_EMAIL_LEN
        )));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            Ok(email.to_string())
        }
        _ => Err(DomainError::Validation(format!(
            "Invalid email address: {}",
            email
        ))),
    }
}
