mod password;
mod refresh;
mod token;

pub use password::Argon2PasswordHasher;
pub use refresh::RandomRefreshTokenGenerator;
pub use token::HmacAccessTokenIssuer;
