//! Invocation wrappers for direct-call operations and handler-style steps.

use std::{fmt, future::Future, pin::Pin, sync::Arc};

use domain::{InjectedError, InvocationMode, LatencyConfig};

use super::LatencyInjector;

/// Continuation of a request-processing chain.
///
/// Resumed with `None` to proceed, or with `Some(error)` to abort and hand
/// the error to the chain's error handling.
pub trait Continuation {
    /// Resume the chain
    fn resume(self, error: Option<InjectedError>);
}

impl<F> Continuation for F
where
    F: FnOnce(Option<InjectedError>),
{
    fn resume(self, error: Option<InjectedError>) {
        self(error);
    }
}

/// Wrap a direct-call async operation with latency and failure injection.
///
/// Shorthand for `LatencyInjector::new(config).wrap(operation)`.
pub fn with_latency<F>(operation: F, config: LatencyConfig) -> Lagged<F> {
    LatencyInjector::new(config).wrap(operation)
}

/// A direct-call async operation behind a latency injector.
///
/// The operation takes one argument value (use a tuple for several) and
/// returns a `Result`. Injected failures are returned as `Err(E::from(..))`;
/// the operation's own results and errors are forwarded unchanged.
pub struct Lagged<F> {
    operation: Arc<F>,
    injector: LatencyInjector,
}

impl<F> Lagged<F> {
    pub(super) fn new(operation: F, injector: LatencyInjector) -> Self {
        Self {
            operation: Arc::new(operation),
            injector,
        }
    }

    /// Calling convention of this wrapper
    pub const fn mode(&self) -> InvocationMode {
        InvocationMode::Direct
    }

    /// The injector driving this wrapper
    pub fn injector(&self) -> &LatencyInjector {
        &self.injector
    }

    /// Invoke the wrapped operation.
    ///
    /// Always suspends for one drawn delay before settling.
    pub async fn call<A, Fut, T, E>(&self, args: A) -> Result<T, E>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<InjectedError>,
    {
        self.injector.admit(self.mode()).await?;
        (self.operation)(args).await
    }

    /// Turn the wrapper into a plain function of the same shape as the
    /// wrapped operation, suitable for storing or passing as a callback.
    #[allow(clippy::type_complexity)]
    pub fn into_fn<A, Fut, T, E>(
        self,
    ) -> impl Fn(A) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send>> + Clone + Send + Sync
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        A: Send + 'static,
        T: Send + 'static,
        E: From<InjectedError> + Send + 'static,
    {
        move |args: A| {
            let lagged = self.clone();
            let fut: Pin<Box<dyn Future<Output = Result<T, E>> + Send>> =
                Box::pin(async move { lagged.call(args).await });
            fut
        }
    }
}

impl<F> Clone for Lagged<F> {
    fn clone(&self) -> Self {
        Self {
            operation: Arc::clone(&self.operation),
            injector: self.injector.clone(),
        }
    }
}

impl<F> fmt::Debug for Lagged<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lagged")
            .field("mode", &self.mode())
            .field("config", self.injector.config())
            .finish_non_exhaustive()
    }
}

/// A handler-style step (`request, response, continuation`) behind a latency
/// injector.
///
/// Injected failures are never returned: the continuation is resumed with the
/// error, the handler is skipped, and the call settles with `None`.
pub struct LaggedHandler<H> {
    handler: Arc<H>,
    injector: LatencyInjector,
}

impl<H> LaggedHandler<H> {
    pub(super) fn new(handler: H, injector: LatencyInjector) -> Self {
        Self {
            handler: Arc::new(handler),
            injector,
        }
    }

    /// Calling convention of this wrapper
    pub const fn mode(&self) -> InvocationMode {
        InvocationMode::Handler
    }

    /// The injector driving this wrapper
    pub fn injector(&self) -> &LatencyInjector {
        &self.injector
    }

    /// Invoke the wrapped handler.
    ///
    /// Returns `Some(output)` when the handler ran and `None` when the
    /// failure was delegated to `next`.
    pub async fn call<Req, Res, N, Fut, T>(&self, request: Req, response: Res, next: N) -> Option<T>
    where
        H: Fn(Req, Res, N) -> Fut,
        Fut: Future<Output = T>,
        N: Continuation,
    {
        match self.injector.admit(self.mode()).await {
            Ok(()) => Some((self.handler)(request, response, next).await),
            Err(error) => {
                next.resume(Some(error));
                None
            },
        }
    }
}

impl<H> Clone for LaggedHandler<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            injector: self.injector.clone(),
        }
    }
}

impl<H> fmt::Debug for LaggedHandler<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaggedHandler")
            .field("mode", &self.mode())
            .field("config", self.injector.config())
            .finish_non_exhaustive()
    }
}
