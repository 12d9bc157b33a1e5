use std::collections::HashMap;
use std::collections::VecDeque;
use std::net::IpAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Rolling-window request limiter keyed by client IP.
///
/// Each key may make at most `max_requests` calls in any `window`-long span.
/// Disabled instances admit everything, which is how tests opt out without
/// touching global state.
pub struct RateLimiter {
    enabled: bool,
    max_requests: usize,
    window: Duration,
    hits: Mutex<HashMap<IpAddr, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration, enabled: bool) -> Self {
        Self {
            enabled,
            max_requests,
            window,
            hits: Mutex::new(HashMap::new()),
        }
    }

    /// Limiter matching the service default: 10 requests per rolling minute
    pub fn per_minute(enabled: bool) -> Self {
        Self::new(10, Duration::from_secs(60), enabled)
    }

    /// Record a request from `key` and report whether it is admitted.
    /// The check and the count update happen under one lock, so concurrent
    /// requests from the same key can't both sneak under the cap.
    pub fn check(&self, key: IpAddr) -> bool {
        if !self.enabled {
            return true;
        }

        let now = Instant::now();
        let mut hits = self.hits.lock().unwrap_or_else(|e| e.into_inner());
        let timestamps = hits.entry(key).or_default();

        while let Some(&front) = timestamps.front() {
            if now.duration_since(front) >= self.window {
                timestamps.pop_front();
            } else {
                break;
            }
        }

        if timestamps.len() >= self.max_requests {
            return false;
        }
        timestamps.push_back(now);
        true
    }
}
