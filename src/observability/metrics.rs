use std::sync::Arc;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry};
use tokio::sync::OnceCell;
use tracing::info;

static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

pub const CALL_IAM: &str = "iam";
pub const CALL_GENERATION: &str = "generation";
pub const OUTCOME_OK: &str = "ok";
pub const OUTCOME_ERROR: &str = "error";

/// Lazily initializes and returns the process-wide metrics.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Inbound
    pub relay_requests: IntCounterVec,

    // Outbound
    pub upstream_requests: IntCounterVec,
    pub upstream_duration: HistogramVec,
    pub token_exchange_failures: IntCounter,

    // Config/runtime
    pub config_validation_errors: IntCounter,
    pub up: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("incidentrelay".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            relay_requests: IntCounterVec::new(Opts::new("relay_requests_total", "Orchestrate requests by outcome"), &["outcome"]).unwrap(),

            upstream_requests: IntCounterVec::new(Opts::new("upstream_requests_total", "Outbound calls by target and HTTP status"), &["call", "status"]).unwrap(),
            upstream_duration: HistogramVec::new(HistogramOpts::new("upstream_duration_seconds", "Outbound call duration seconds").buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]), &["call"]).unwrap(),
            token_exchange_failures: IntCounter::new("token_exchange_failures_total", "IAM token exchange failures").unwrap(),

            config_validation_errors: IntCounter::new("config_validation_errors_total", "Validation problems found at startup").unwrap(),
            up: IntGauge::new("up", "1 if service is serving").unwrap(),

            registry,
        });

        let reg = &metrics.registry;
        reg.register(Box::new(metrics.relay_requests.clone())).unwrap();
        reg.register(Box::new(metrics.upstream_requests.clone())).unwrap();
        reg.register(Box::new(metrics.upstream_duration.clone())).unwrap();
        reg.register(Box::new(metrics.token_exchange_failures.clone())).unwrap();
        reg.register(Box::new(metrics.config_validation_errors.clone())).unwrap();
        reg.register(Box::new(metrics.up.clone())).unwrap();

        metrics
    }
}
