use rand::RngCore;
use std::fmt::Write;

use dailydiet_domain::auth::RefreshTokenGenerator;

const TOKEN_BYTES: usize = 32;

/// 32 random bytes, lowercase hex
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRefreshTokenGenerator;

impl RefreshTokenGenerator for RandomRefreshTokenGenerator {
    fn generate(&self) -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);

        bytes
            .iter()
            .fold(String::with_capacity(TOKEN_BYTES * 2), |mut out, b| {
                let _ = write!(out, "{:02x}", b);
                out
            })
    }
}
