use async_trait::async_trait;
use std::time::Duration;

/// Source of delays for simulated latency.
///
/// Injected into the session manager so tests can resolve logins without
/// waiting on wall-clock time. Futures are not required to be `Send`
/// because the browser timer is tied to the JS event loop.
#[async_trait(?Send)]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Resolves every sleep immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantClock;

#[async_trait(?Send)]
impl Clock for InstantClock {
    async fn sleep(&self, _duration: Duration) {}
}

/// Real delay on the tokio timer.
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn instant_clock_does_not_wait() {
        let start = std::time::Instant::now();
        InstantClock.sleep(Duration::from_secs(30)).await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[cfg(feature = "native")]
    #[tokio::test(start_paused = true)]
    async fn tokio_clock_advances_virtual_time() {
        let start = tokio::time::Instant::now();
        TokioClock.sleep(Duration::from_millis(1000)).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
