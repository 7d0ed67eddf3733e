//! Latency injector: one configuration plus one random source.
//!
//! Every wrapper and middleware delegates its per-invocation work here, so the
//! two orderings of decision and delay live in exactly one place.

use std::{sync::Arc, time::Duration};

use domain::{InjectedError, InvocationMode, LatencyConfig, Outcome};
use tracing::debug;

use super::{
    Lagged, LaggedHandler, LatencyMiddleware, RandomSource, decider::should_fail,
    delay::sample_delay,
};

/// Injects latency and failures according to one immutable configuration.
///
/// Cheap to clone: the configuration is shared and the random source is a
/// handle. Holds no per-invocation state, so concurrent invocations never
/// influence each other beyond sharing the random sequence.
#[derive(Debug, Clone)]
pub struct LatencyInjector {
    config: Arc<LatencyConfig>,
    rng: RandomSource,
}

impl Default for LatencyInjector {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

impl LatencyInjector {
    /// Create an injector drawing from operating system entropy
    pub fn new(config: LatencyConfig) -> Self {
        Self::with_rng(config, RandomSource::from_os_rng())
    }

    /// Create an injector with an explicit random source
    pub fn with_rng(config: LatencyConfig, rng: RandomSource) -> Self {
        Self {
            config: Arc::new(config),
            rng,
        }
    }

    /// Create an injector from a deterministic seed
    pub fn seeded(config: LatencyConfig, seed: u64) -> Self {
        Self::with_rng(config, RandomSource::seeded(seed))
    }

    /// Get the configuration
    pub fn config(&self) -> &LatencyConfig {
        &self.config
    }

    /// Get the random source
    pub fn rng(&self) -> &RandomSource {
        &self.rng
    }

    /// Draw one delay from the configured bounds
    pub fn draw_delay(&self) -> Duration {
        sample_delay(&self.config, &self.rng)
    }

    /// Run one Bernoulli trial with the configured error rate
    pub fn decide(&self) -> Outcome {
        Outcome::from_decision(should_fail(self.config.error_rate, &self.rng))
    }

    /// Decide, then delay: the ordering used when wrapping an operation.
    ///
    /// The delay is drawn after the decision and always elapses before the
    /// result is returned, whichever way the decision went.
    #[allow(clippy::cast_possible_truncation)]
    pub async fn admit(&self, mode: InvocationMode) -> Result<(), InjectedError> {
        let outcome = self.decide();
        let delay = self.draw_delay();

        debug!(
            mode = %mode,
            outcome = %outcome,
            delay_ms = delay.as_millis() as u64,
            "Injecting latency"
        );

        tokio::time::sleep(delay).await;

        if outcome.is_failure() {
            Err(InjectedError::new())
        } else {
            Ok(())
        }
    }

    /// Delay, then decide: the ordering used by middleware.
    #[allow(clippy::cast_possible_truncation)]
    pub async fn gate(&self) -> Result<(), InjectedError> {
        let delay = self.draw_delay();
        tokio::time::sleep(delay).await;

        let outcome = self.decide();
        debug!(
            outcome = %outcome,
            delay_ms = delay.as_millis() as u64,
            "Latency gate elapsed"
        );

        if outcome.is_failure() {
            Err(InjectedError::new())
        } else {
            Ok(())
        }
    }

    /// Wrap a direct-call async operation
    pub fn wrap<F>(&self, operation: F) -> Lagged<F> {
        Lagged::new(operation, self.clone())
    }

    /// Wrap a request/response/continuation handler
    pub fn wrap_handler<H>(&self, handler: H) -> LaggedHandler<H> {
        LaggedHandler::new(handler, self.clone())
    }

    /// Build a middleware unit sharing this configuration
    pub fn middleware(&self) -> LatencyMiddleware {
        LatencyMiddleware::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[test]
    fn default_uses_default_config() {
        let injector = LatencyInjector::default();
        assert_eq!(*injector.config(), LatencyConfig::default());
    }

    #[test]
    fn draw_delay_within_bounds() {
        let injector = LatencyInjector::seeded(LatencyConfig::new(40, 10, 0.0), 1);
        for _ in 0..500 {
            let d = injector.draw_delay();
            assert!(d >= Duration::from_millis(10) && d <= Duration::from_millis(40));
        }
    }

    #[test]
    fn decide_respects_extremes() {
        let never = LatencyInjector::seeded(LatencyConfig::new(0, 0, 0.0), 1);
        let always = LatencyInjector::seeded(LatencyConfig::new(0, 0, 1.0), 1);
        for _ in 0..500 {
            assert_eq!(never.decide(), Outcome::Proceeding);
            assert_eq!(always.decide(), Outcome::Failing);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn admit_waits_at_least_min() {
        let injector = LatencyInjector::seeded(LatencyConfig::new(100, 150, 0.0), 2);

        let start = Instant::now();
        let result = injector.admit(InvocationMode::Direct).await;

        assert!(result.is_ok());
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(160));
    }

    #[tokio::test(start_paused = true)]
    async fn admit_fails_after_delay() {
        let injector = LatencyInjector::seeded(LatencyConfig::new(20, 20, 1.0), 3);

        let start = Instant::now();
        let result = injector.admit(InvocationMode::Handler).await;

        assert_eq!(result, Err(InjectedError));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test(start_paused = true)]
    async fn gate_waits_then_decides() {
        let injector = LatencyInjector::seeded(LatencyConfig::new(50, 50, 1.0), 4);

        let start = Instant::now();
        let result = injector.gate().await;

        assert_eq!(result, Err(InjectedError));
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn gate_passes_with_zero_rate() {
        let injector = LatencyInjector::seeded(LatencyConfig::new(0, 5, 0.0), 5);
        for _ in 0..50 {
            assert!(injector.gate().await.is_ok());
        }
    }

    #[test]
    fn clones_share_config() {
        let injector = LatencyInjector::new(LatencyConfig::new(1, 2, 0.5));
        let clone = injector.clone();
        assert!(std::ptr::eq(injector.config(), clone.config()));
    }
}
