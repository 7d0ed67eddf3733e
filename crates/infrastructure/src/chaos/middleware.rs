//! Standalone latency middleware for request/response/continuation chains.

use domain::LatencyConfig;
use tokio::task::JoinHandle;

use super::{Continuation, LatencyInjector};

/// Build a middleware unit from a configuration.
///
/// Shorthand for `LatencyInjector::new(config).middleware()`.
pub fn latency_middleware(config: LatencyConfig) -> LatencyMiddleware {
    LatencyInjector::new(config).middleware()
}

/// A gate on a chain's continuation.
///
/// Each call schedules a task that waits one drawn delay, then resumes the
/// continuation with either nothing (proceed) or a fresh injected error. The
/// continuation always runs on that task, never on the caller's stack, even
/// when the delay is zero.
#[derive(Debug, Clone)]
pub struct LatencyMiddleware {
    injector: LatencyInjector,
}

impl LatencyMiddleware {
    pub(super) fn new(injector: LatencyInjector) -> Self {
        Self { injector }
    }

    /// The injector driving this middleware
    pub fn injector(&self) -> &LatencyInjector {
        &self.injector
    }

    /// Run the middleware for one request.
    ///
    /// The request and response are accepted but never inspected. Must be
    /// called from within a Tokio runtime. The returned handle completes once
    /// the continuation has been resumed.
    pub fn handle<Req, Res, N>(&self, _request: &Req, _response: &Res, next: N) -> JoinHandle<()>
    where
        Req: ?Sized,
        Res: ?Sized,
        N: Continuation + Send + 'static,
    {
        let injector = self.injector.clone();
        tokio::spawn(async move {
            let result = injector.gate().await;
            next.resume(result.err());
        })
    }
}
