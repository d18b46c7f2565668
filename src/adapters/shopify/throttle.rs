//! Outbound request throttle
//!
//! A minimum-interval throttle at the fetcher boundary. The hook exists so
//! operators can cap the request rate against the platform's API limits;
//! it is disabled by default and no specific rate is assumed.

use crate::config::ThrottleConfig;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Minimum-interval throttle
///
/// `acquire` resolves immediately when disabled or when enough time has
/// passed since the previous request, and sleeps for the remainder of the
/// interval otherwise.
pub struct Throttle {
    min_interval: Option<Duration>,
    last_request: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Build a throttle from configuration
    pub fn from_config(config: &ThrottleConfig) -> Self {
        let min_interval = config
            .enabled
            .then(|| Duration::from_millis(config.min_interval_ms));

        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// A throttle that never delays
    pub fn disabled() -> Self {
        Self {
            min_interval: None,
            last_request: Mutex::new(None),
        }
    }

    /// Whether the throttle will ever delay a request
    pub fn is_enabled(&self) -> bool {
        self.min_interval.is_some()
    }

    /// Wait until the next request is allowed to go out
    pub async fn acquire(&self) {
        let Some(min_interval) = self.min_interval else {
            return;
        };

        let mut last = self.last_request.lock().await;
        let now = Instant::now();

        if let Some(previous) = *last {
            let elapsed = now.duration_since(previous);
            if elapsed < min_interval {
                let wait = min_interval - elapsed;
                tracing::debug!(wait_ms = wait.as_millis() as u64, "Throttling request");
                tokio::time::sleep(wait).await;
            }
        }

        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_throttle_never_delays() {
        let throttle = Throttle::disabled();
        assert!(!throttle.is_enabled());

        let start = Instant::now();
        throttle.acquire().await;
        throttle.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_enabled_throttle_spaces_requests() {
        let throttle = Throttle::from_config(&ThrottleConfig {
            enabled: true,
            min_interval_ms: 40,
        });
        assert!(throttle.is_enabled());

        let start = Instant::now();
        throttle.acquire().await;
        throttle.acquire().await;
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_config_disabled_yields_noop() {
        let throttle = Throttle::from_config(&ThrottleConfig {
            enabled: false,
            min_interval_ms: 10_000,
        });
        assert!(!throttle.is_enabled());

        let start = Instant::now();
        throttle.acquire().await;
        throttle.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
