use std::num::NonZeroU32;

use governor::{
    Quota, RateLimiter, clock::DefaultClock, state::InMemoryState, state::direct::NotKeyed,
};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Token bucket shared by every search request of the process.
pub struct SearchThrottle {
    limiter: DirectRateLimiter,
}

impl SearchThrottle {
    pub fn per_second(rate: u32) -> Self {
        let rate = NonZeroU32::new(rate).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: RateLimiter::direct(Quota::per_second(rate)),
        }
    }

    /// Waits until the next request may go out.
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }
}
