//! Rate gates for results page requests
//!
//! The orchestrator waits on a gate before every scrape and reports back
//! once the response is in. [`IntervalGate`] keeps at least its interval
//! between the end of one request and the start of the next, on the tokio
//! clock so tests can drive it with a paused runtime; [`NoDelay`] never
//! waits.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

#[async_trait]
pub trait RateGate: Send + Sync {
    /// Resolves once the next request may be sent
    async fn wait(&self);

    /// Marks the end of the request admitted by the last [`RateGate::wait`]
    fn done(&self) {}
}

/// Fixed-interval gate
///
/// The interval runs from the later of the last pass and the last
/// [`RateGate::done`], so a slow response never eats into the delay.
#[derive(Debug)]
pub struct IntervalGate {
    interval: Duration,
    last_pass: Mutex<Option<Instant>>,
}

impl IntervalGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_pass: Mutex::new(None),
        }
    }

    fn last_pass(&self) -> Option<Instant> {
        match self.last_pass.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn stamp(&self) {
        let now = Instant::now();
        match self.last_pass.lock() {
            Ok(mut guard) => *guard = Some(now),
            Err(poisoned) => *poisoned.into_inner() = Some(now),
        }
    }
}

#[async_trait]
impl RateGate for IntervalGate {
    async fn wait(&self) {
        if let Some(previous) = self.last_pass() {
            let ready_at = previous + self.interval;
            if ready_at > Instant::now() {
                tracing::trace!("Rate gate holding for {:?}", ready_at - Instant::now());
                tokio::time::sleep_until(ready_at).await;
            }
        }

        self.stamp();
    }

    fn done(&self) {
        self.stamp();
    }
}

/// Gate that never waits
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl RateGate for NoDelay {
    async fn wait(&self) {}
}
