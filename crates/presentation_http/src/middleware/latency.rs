//! Latency injection middleware
//!
//! Delays every request by a drawn amount, then either forwards it to the
//! inner service or answers with an injected fault.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use domain::{InjectedError, LatencyConfig};
use infrastructure::{LatencyInjector, LatencyMiddleware};
use tokio::sync::oneshot;
use tower::{Layer, Service};

use crate::error::ApiError;

/// Layer that injects latency and faults in front of a service
#[derive(Clone, Debug)]
pub struct LatencyLayer {
    middleware: LatencyMiddleware,
}

impl LatencyLayer {
    /// Create a layer drawing from operating system entropy
    #[must_use]
    pub fn new(config: LatencyConfig) -> Self {
        Self::from_injector(&LatencyInjector::new(config))
    }

    /// Create a layer sharing an existing injector's configuration and
    /// random source
    #[must_use]
    pub fn from_injector(injector: &LatencyInjector) -> Self {
        Self {
            middleware: injector.middleware(),
        }
    }

    /// Configuration applied to each request
    pub fn config(&self) -> &LatencyConfig {
        self.middleware.injector().config()
    }
}

impl<S> Layer<S> for LatencyLayer {
    type Service = LatencyService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LatencyService {
            inner,
            middleware: self.middleware.clone(),
        }
    }
}

/// Middleware service for latency injection
#[derive(Clone, Debug)]
pub struct LatencyService<S> {
    inner: S,
    middleware: LatencyMiddleware,
}

impl<S> Service<Request> for LatencyService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        // The clone has not been polled; the ready service goes into the future
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let (tx, rx) = oneshot::channel();
        self.middleware
            .handle(&req, &(), move |error: Option<InjectedError>| {
                let _ = tx.send(error);
            });

        Box::pin(async move {
            match rx.await {
                Ok(None) => inner.call(req).await,
                Ok(Some(error)) => Ok(ApiError::from(error).into_response()),
                Err(_) => Ok(ApiError::Internal("latency gate dropped".to_string()).into_response()),
            }
        })
    }
}
