//! Latency-wrapped axum handlers
//!
//! Wraps an `async fn(Request) -> impl IntoResponse` so each call first
//! decides whether to fail, then waits a drawn delay, and only then runs the
//! handler. Failures skip the handler and are answered as [`ApiError`].

use std::{future::Future, pin::Pin};

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use domain::InjectedError;
use infrastructure::{Continuation, LatencyInjector};
use tokio::sync::oneshot;

use crate::error::ApiError;

/// Boxed future returned by a lagged handler
pub type LaggedFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// Error stage of a lagged handler's chain
///
/// Receives an injected failure in place of the handler's response.
#[derive(Debug)]
pub struct ErrorStage(oneshot::Sender<InjectedError>);

impl Continuation for ErrorStage {
    fn resume(self, error: Option<InjectedError>) {
        if let Some(error) = error {
            let _ = self.0.send(error);
        }
    }
}

/// Wrap an axum handler with latency and failure injection.
///
/// The returned function is itself an axum handler taking the full request.
pub fn lagged<H, Fut, R>(
    injector: &LatencyInjector,
    handler: H,
) -> impl Fn(Request) -> LaggedFuture + Clone + Send + Sync + 'static
where
    H: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send,
{
    let wrapped = injector
        .wrap_handler(move |request: Request, _response: (), _stage: ErrorStage| handler(request));

    move |request: Request| {
        let wrapped = wrapped.clone();
        let fut: LaggedFuture = Box::pin(async move {
            let (tx, mut rx) = oneshot::channel();
            match wrapped.call(request, (), ErrorStage(tx)).await {
                Some(output) => output.into_response(),
                None => match rx.try_recv() {
                    Ok(error) => ApiError::from(error).into_response(),
                    Err(_) => {
                        ApiError::Internal("handler skipped without error".to_string())
                            .into_response()
                    },
                },
            }
        });
        fut
    }
}
