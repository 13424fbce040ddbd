use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

use automation_gateway::config::GatewayConfig;
use automation_gateway::health::{
    Criticality, ReadinessChecker, RedisCacheCheck, SqlStoreCheck,
};
use automation_gateway::logging::init_structured_logging;
use automation_gateway::web::auth::TokenVerifier;
use automation_gateway::web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Arc::new(GatewayConfig::load().context("failed to load configuration")?);
    init_structured_logging(&config.environment);

    info!(
        service = %config.service_name,
        environment = %config.environment,
        bind_address = %config.bind_address,
        "starting automation gateway"
    );

    // Lazy pool: the store being down must not prevent startup, only flip
    // readiness to 503.
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(
            config.readiness.store_timeout.as_secs().max(1),
        ))
        .connect_lazy(&config.database_url)
        .context("invalid database URL")?;

    let redis_client =
        redis::Client::open(config.redis_url.as_str()).context("invalid redis URL")?;

    let readiness = ReadinessChecker::new()
        .with_check(
            Arc::new(SqlStoreCheck::new(pool, config.readiness.store_timeout)),
            Criticality::Critical,
        )
        .with_check(
            Arc::new(RedisCacheCheck::new(
                redis_client,
                config.readiness.cache_connect_timeout,
            )),
            Criticality::Advisory,
        );

    let verifier = TokenVerifier::from_config(&config.auth);
    let state = AppState::new(config.clone(), verifier, readiness);
    let router = automation_gateway::web::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;

    info!(address = %config.bind_address, "gateway listening");
    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}
