//! Sequential request simulation against a latency-wrapped mock fetch

use std::time::Duration;

use domain::InjectedError;
use infrastructure::LatencyInjector;
use tokio::time::Instant;
use tracing::debug;

/// Result of one simulated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOutcome {
    /// 1-based request number
    pub index: u32,
    /// Wall time from issuing the request to its settlement
    pub elapsed: Duration,
    /// Fetched data, or the injected failure
    pub result: Result<String, InjectedError>,
}

/// Totals over a simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: u32,
    pub failed: u32,
    pub total_elapsed: Duration,
}

impl Summary {
    /// Fold one outcome into the totals
    pub fn record(&mut self, outcome: &RequestOutcome) {
        if outcome.result.is_ok() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.total_elapsed += outcome.elapsed;
    }

    pub const fn total(&self) -> u32 {
        self.succeeded + self.failed
    }

    /// Mean elapsed time per request, zero for an empty run
    pub fn mean_elapsed(&self) -> Duration {
        match self.total() {
            0 => Duration::ZERO,
            n => self.total_elapsed / n,
        }
    }
}

/// Stand-in for a remote lookup
pub async fn fetch_mock_data(id: u32) -> Result<String, InjectedError> {
    Ok(format!("Data for item {id}"))
}

/// Issue `requests` sequential fetches through `injector`, reporting each
/// outcome as it settles.
pub async fn run_simulation<F>(injector: &LatencyInjector, requests: u32, mut report: F) -> Summary
where
    F: FnMut(&RequestOutcome),
{
    let fetch = injector.wrap(fetch_mock_data);
    let mut summary = Summary::default();

    for index in 1..=requests {
        let start = Instant::now();
        let result = fetch.call(index).await;
        let outcome = RequestOutcome {
            index,
            elapsed: start.elapsed(),
            result,
        };
        debug!(index, ok = outcome.result.is_ok(), "Simulated request settled");

        summary.record(&outcome);
        report(&outcome);
    }

    summary
}
