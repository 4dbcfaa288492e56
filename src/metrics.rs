use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus recorder and register the calculator counters.
/// `PrometheusHandle::render()` produces the text exposition format.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {e}"))?;

    // Pre-register counters so they appear even before the first increment.
    counter!("calculations_total").absolute(0);
    counter!("invalid_calculations_total").absolute(0);
    counter!("session_events_total").absolute(0);
    counter!("session_resets_total").absolute(0);

    Ok(handle)
}
