//! Request pacing for the collector.
//!
//! The collector calls [`Pacer::pause`] between listing pages and after each
//! detail-page fetch. Production uses [`FixedDelay`]; tests use [`NoDelay`]
//! so they never sleep.

use std::future::Future;
use std::time::Duration;

/// The request that has just completed, or is about to be issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Before requesting the next listing page.
    ListingPage,
    /// After a detail-page request.
    DetailPage,
}

/// Waits before the next request goes out.
pub trait Pacer {
    fn pause(&self, step: Step) -> impl Future<Output = ()> + Send;
}

/// Blind fixed sleep per step; not adaptive to server responses.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    pub listing: Duration,
    pub detail: Duration,
}

impl FixedDelay {
    #[must_use]
    pub fn from_millis(listing_ms: u64, detail_ms: u64) -> Self {
        Self {
            listing: Duration::from_millis(listing_ms),
            detail: Duration::from_millis(detail_ms),
        }
    }

    #[must_use]
    pub fn delay_for(&self, step: Step) -> Duration {
        match step {
            Step::ListingPage => self.listing,
            Step::DetailPage => self.detail,
        }
    }
}

impl Pacer for FixedDelay {
    async fn pause(&self, step: Step) {
        let delay = self.delay_for(step);
        if delay.is_zero() {
            return;
        }
        tracing::trace!(?step, ?delay, "pacing before next request");
        tokio::time::sleep(delay).await;
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    async fn pause(&self, _step: Step) {}
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn fixed_delay_picks_duration_per_step() {
        let pacer = FixedDelay::from_millis(250, 1000);
        assert_eq!(pacer.delay_for(Step::ListingPage), Duration::from_millis(250));
        assert_eq!(pacer.delay_for(Step::DetailPage), Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn fixed_delay_sleeps_at_least_configured_duration() {
        let pacer = FixedDelay::from_millis(0, 30);
        let started = Instant::now();
        pacer.pause(Step::DetailPage).await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn zero_delay_returns_immediately() {
        let pacer = FixedDelay::from_millis(0, 0);
        let started = Instant::now();
        pacer.pause(Step::ListingPage).await;
        pacer.pause(Step::DetailPage).await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn no_delay_returns_immediately() {
        let started = Instant::now();
        for _ in 0..100 {
            NoDelay.pause(Step::DetailPage).await;
        }
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
