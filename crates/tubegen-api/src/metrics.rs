//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Install the Prometheus recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "tubegen_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "tubegen_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "tubegen_http_requests_in_flight";

    // Domain metrics
    pub const SCRIPTS_TOTAL: &str = "tubegen_scripts_total";
    pub const UPLOADS_TOTAL: &str = "tubegen_uploads_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a script by outcome (`generated` or `fallback`).
pub fn record_script(outcome: &str) {
    let labels = [("outcome", outcome.to_string())];
    counter!(names::SCRIPTS_TOTAL, &labels).increment(1);
}

/// Record an upload request by mode (`demo`, `simulated` or `failed`).
pub fn record_upload(mode: &str) {
    let labels = [("mode", mode.to_string())];
    counter!(names::UPLOADS_TOTAL, &labels).increment(1);
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    let status = response.status().as_u16();
    let duration = start.elapsed().as_secs_f64();

    record_http_request(&method, &path, status, duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_counters_render() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_script("fallback");
            record_upload("demo");
            record_upload("demo");
        });

        let rendered = handle.render();
        assert!(rendered.contains("tubegen_scripts_total{outcome=\"fallback\"} 1"));
        assert!(rendered.contains("tubegen_uploads_total{mode=\"demo\"} 2"));
    }
}
