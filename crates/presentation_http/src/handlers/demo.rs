//! Demo endpoints served behind latency injection

use axum::extract::Request;

use crate::error::ApiError;

/// Body served by the middleware-wrapped index route
pub const INDEX_BODY: &str = "Hello World with Latency (Middleware)!";

/// Body served by the wrapped users route
pub const USERS_BODY: &str = "User list (wrapped handler)";

/// Body served by the wrapped login route
pub const LOGIN_BODY: &str = "Login successful";

pub async fn index() -> &'static str {
    INDEX_BODY
}

pub async fn list_users(_request: Request) -> &'static str {
    USERS_BODY
}

pub async fn login(_request: Request) -> &'static str {
    LOGIN_BODY
}

/// Fallback for unknown routes
pub async fn not_found(request: Request) -> ApiError {
    ApiError::NotFound(request.uri().path().to_string())
}
