//! # Dependency Health Aggregator
//!
//! Readiness probing for the gateway's external dependencies. Every
//! readiness call re-probes each registered dependency fresh; results are
//! never memoized, since a stale verdict would misreport availability to
//! the orchestrator's restart and traffic-routing logic.
//!
//! Dependencies carry a criticality: a *critical* dependency (the store)
//! flips the overall verdict to down when it fails, an *advisory* one (the
//! cache) is reported in the detail map but does not block readiness.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

/// A failed dependency probe
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("DOWN: {reason}")]
    Down { reason: String },

    #[error("DOWN: probe timed out after {timeout:?}")]
    Timeout { timeout: Duration },
}

/// Whether a dependency failure blocks readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    Critical,
    Advisory,
}

/// A single external dependency that can be probed for liveness.
///
/// Probes must be memoryless: one attempt per call, no caching, no retry.
/// The orchestrator's periodic re-invocation is the retry mechanism.
#[async_trait]
pub trait DependencyCheck: Send + Sync {
    /// Dependency name as reported in the readiness detail map.
    fn name(&self) -> &str;

    /// Attempt one liveness round trip against the dependency.
    async fn probe(&self) -> Result<(), ProbeError>;
}

/// Aggregated outcome of one readiness call
#[derive(Debug)]
pub struct ReadinessReport {
    /// True iff every critical dependency probed up.
    pub ready: bool,
    /// Per-dependency detail, `"UP"` or `"DOWN: <reason>"`. Always complete,
    /// so an operator can tell "down because of cache" from "down because
    /// of store".
    pub checks: BTreeMap<String, String>,
}

struct RegisteredCheck {
    check: Arc<dyn DependencyCheck>,
    criticality: Criticality,
}

/// Runs all registered dependency checks and folds them into a verdict.
pub struct ReadinessChecker {
    checks: Vec<RegisteredCheck>,
}

impl ReadinessChecker {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn with_check(mut self, check: Arc<dyn DependencyCheck>, criticality: Criticality) -> Self {
        self.checks.push(RegisteredCheck { check, criticality });
        self
    }

    /// Probe every dependency and synthesize the readiness verdict.
    ///
    /// Ready iff all critical dependencies are up. Probe failures are folded
    /// into the report here, never propagated past the aggregator.
    pub async fn check_readiness(&self) -> ReadinessReport {
        let mut checks = BTreeMap::new();
        let mut ready = true;

        for registered in &self.checks {
            let name = registered.check.name();
            match registered.check.probe().await {
                Ok(()) => {
                    debug!(dependency = name, "dependency probe succeeded");
                    checks.insert(name.to_string(), "UP".to_string());
                }
                Err(err) => {
                    warn!(dependency = name, error = %err, "dependency probe failed");
                    checks.insert(name.to_string(), err.to_string());
                    if registered.criticality == Criticality::Critical {
                        ready = false;
                    }
                }
            }
        }

        ReadinessReport { ready, checks }
    }

    /// Probe only the critical dependencies, for the narrow `/metrics/ready`
    /// form of the readiness question.
    pub async fn critical_dependencies_up(&self) -> bool {
        for registered in &self.checks {
            if registered.criticality != Criticality::Critical {
                continue;
            }
            if let Err(err) = registered.check.probe().await {
                warn!(
                    dependency = registered.check.name(),
                    error = %err,
                    "critical dependency probe failed"
                );
                return false;
            }
        }
        true
    }
}

impl Default for ReadinessChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Store (MySQL) liveness check: a trivial `SELECT 1` round trip.
///
/// Bounded by an explicit timeout so a hung store cannot stall the entire
/// readiness path. The pooled connection is scoped to the query.
pub struct SqlStoreCheck {
    pool: sqlx::MySqlPool,
    timeout: Duration,
}

impl SqlStoreCheck {
    pub fn new(pool: sqlx::MySqlPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl DependencyCheck for SqlStoreCheck {
    fn name(&self) -> &str {
        "database"
    }

    async fn probe(&self) -> Result<(), ProbeError> {
        let query = sqlx::query("SELECT 1").execute(&self.pool);
        match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(err)) => Err(ProbeError::Down {
                reason: format!("database connection failed: {err}"),
            }),
            Err(_) => Err(ProbeError::Timeout {
                timeout: self.timeout,
            }),
        }
    }
}

/// Cache (Redis) liveness check: connect within the configured timeout and
/// `PING`. The connection is dropped when the probe returns, success or not.
pub struct RedisCacheCheck {
    client: redis::Client,
    connect_timeout: Duration,
}

impl RedisCacheCheck {
    pub fn new(client: redis::Client, connect_timeout: Duration) -> Self {
        Self {
            client,
            connect_timeout,
        }
    }
}

#[async_trait]
impl DependencyCheck for RedisCacheCheck {
    fn name(&self) -> &str {
        "cache"
    }

    async fn probe(&self) -> Result<(), ProbeError> {
        let connect = self.client.get_multiplexed_async_connection();
        let mut conn = match tokio::time::timeout(self.connect_timeout, connect).await {
            Ok(Ok(conn)) => conn,
            Ok(Err(err)) => {
                return Err(ProbeError::Down {
                    reason: format!("cache connection failed: {err}"),
                })
            }
            Err(_) => {
                return Err(ProbeError::Timeout {
                    timeout: self.connect_timeout,
                })
            }
        };

        let pong: Result<String, _> = redis::cmd("PING").query_async(&mut conn).await;
        match pong {
            Ok(_) => Ok(()),
            Err(err) => Err(ProbeError::Down {
                reason: format!("cache ping failed: {err}"),
            }),
        }
    }
}
