//! Route definitions

use axum::{Router, routing::get};
use domain::LatencyConfig;
use infrastructure::{AppConfig, LatencyInjector, RandomSource};
use tracing::info;

use crate::{
    handlers::{demo, health, lagged},
    middleware::LatencyLayer,
};

/// Injection applied to `GET /` through the latency layer
pub const INDEX_LATENCY: LatencyConfig = LatencyConfig::new(100, 200, 0.0);

/// Injection applied to the wrapped `GET /users` handler
pub const USERS_LATENCY: LatencyConfig = LatencyConfig::new(300, 1200, 0.0);

/// Injection applied to the wrapped `GET /login` handler
pub const LOGIN_LATENCY: LatencyConfig = LatencyConfig::new(200, 2000, 0.1);

/// Create the main router with all routes
///
/// The random source is seeded from `config.seed` when set.
pub fn create_router(config: &AppConfig) -> Router {
    create_router_with_rng(config, RandomSource::from_seed_option(config.seed))
}

/// Create the main router drawing every delay and decision from `rng`
pub fn create_router_with_rng(config: &AppConfig, rng: RandomSource) -> Router {
    let index = LatencyInjector::with_rng(INDEX_LATENCY, rng.clone());
    let users = LatencyInjector::with_rng(USERS_LATENCY, rng.clone());
    let login = LatencyInjector::with_rng(LOGIN_LATENCY, rng.clone());

    let router = Router::new()
        // Demo endpoints
        .route(
            "/",
            get(demo::index).route_layer(LatencyLayer::from_injector(&index)),
        )
        .route("/users", get(lagged(&users, demo::list_users)))
        .route("/login", get(lagged(&login, demo::login)))
        // Health endpoint
        .route("/health", get(health::health_check))
        .fallback(demo::not_found);

    if config.latency.global_injection {
        let global = LatencyInjector::with_rng(config.latency.to_latency_config(), rng);
        info!(
            min = global.config().min,
            max = global.config().max,
            error_rate = global.config().error_rate,
            "Global latency injection enabled"
        );
        router.layer(LatencyLayer::from_injector(&global))
    } else {
        router
    }
}
