use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use dailydiet_domain::shared::DomainError;

/// Fixed-window request counter keyed by client address
pub struct RateLimiter {
    name: &'static str,
    limit: u32,
    window: Duration,
    windows: Mutex<HashMap<String, (Instant, u32)>>,
}

impl RateLimiter {
    pub fn new(name: &'static str, limit: u32, window: Duration) -> Self {
        Self {
            name,
            limit,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn per_minute(name: &'static str, limit: u32) -> Self {
        Self::new(name, limit, Duration::from_secs(60))
    }

    /// Count one hit for `client`; fails once the window's budget is spent.
    pub async fn check(&self, client: &str) -> Result<(), DomainError> {
        self.check_at(client, Instant::now()).await
    }

    async fn check_at(&self, client: &str, now: Instant) -> Result<(), DomainError> {
        let mut windows = self.windows.lock().await;

        // drop windows that have run out so the map does not grow unbounded
        windows.retain(|_, (started, _)| now.duration_since(*started) < self.window);

        let (_, hits) = windows.entry(client.to_string()).or_insert((now, 0));
        if *hits >= self.limit {
            tracing::warn!(limiter = self.name, client, "Rate limit exceeded");
            return Err(DomainError::RateLimited(format!(
                "Too many requests: {} per {} seconds allowed",
                self.limit,
                self.window.as_secs()
            )));
        }
        *hits += 1;
        Ok(())
    }
}

/// Limits applied to the unauthenticated auth endpoints
pub struct RateLimits {
    pub register: RateLimiter,
    pub login: RateLimiter,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            register: RateLimiter::per_minute("register", 10),
            login: RateLimiter::per_minute("login", 5),
        }
    }
}
