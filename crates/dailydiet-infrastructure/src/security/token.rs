use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use dailydiet_domain::auth::{AccessClaims, AccessTokenIssuer};
use dailydiet_domain::shared::{DomainError, UserId};

type HmacSha256 = Hmac<Sha256>;

const MAX_TOKEN_LEN: usize = 2048;

#[derive(Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// HS256-signed compact JWS access tokens
pub struct HmacAccessTokenIssuer {
    secret: Vec<u8>,
    ttl: Duration,
}

impl HmacAccessTokenIssuer {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    fn mac(&self) -> Result<HmacSha256, DomainError> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| DomainError::Infrastructure(format!("Invalid signing key: {}", e)))
    }

    fn sign(&self, signing_input: &str) -> Result<String, DomainError> {
        let mut mac = self.mac()?;
        mac.update(signing_input.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }

    fn encode_part<T: Serialize>(value: &T) -> Result<String, DomainError> {
        let json = serde_json::to_vec(value)
            .map_err(|e| DomainError::Serialization(format!("Failed to encode token: {}", e)))?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    fn decode_part<T: for<'de> Deserialize<'de>>(part: &str) -> Result<T, DomainError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(part)
            .map_err(|_| invalid_token())?;
        serde_json::from_slice(&bytes).map_err(|_| invalid_token())
    }
}

fn invalid_token() -> DomainError {
    DomainError::Unauthorized("Invalid token".to_string())
}

impl AccessTokenIssuer for HmacAccessTokenIssuer {
    fn issue(&self, user_id: UserId) -> Result<String, DomainError> {
        let header = Header {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        };
        let claims = AccessClaims {
            user_id,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        let signing_input = format!(
            "{}.{}",
            Self::encode_part(&header)?,
            Self::encode_part(&claims)?
        );
        let signature = self.sign(&signing_input)?;
        Ok(format!("{}.{}", signing_input, signature))
    }

    fn verify(&self, token: &str) -> Result<AccessClaims, DomainError> {
        if token.len() > MAX_TOKEN_LEN {
            return Err(invalid_token());
        }

        let mut parts = token.split('.');
        let (header_part, claims_part, signature_part) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(h), Some(c), Some(s), None) => (h, c, s),
                _ => return Err(invalid_token()),
            };

        let signature = URL_SAFE_NO_PAD
            .decode(signature_part)
            .map_err(|_| invalid_token())?;
        let mut mac = self.mac()?;
        mac.update(header_part.as_bytes());
        mac.update(b".");
        mac.update(claims_part.as_bytes());
        mac.verify_slice(&signature).map_err(|_| invalid_token())?;

        let header: Header = Self::decode_part(header_part)?;
        if header.alg != "HS256" {
            return Err(invalid_token());
        }

        let claims: AccessClaims = Self::decode_part(claims_part)?;
        if claims.exp <= Utc::now().timestamp() {
            return Err(DomainError::Unauthorized("Token has expired".to_string()));
        }

        Ok(claims)
    }
}
