use crate::api::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

/// How a request ended, in terms of the API's error contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Ok,
    /// 404 `{"error": ...}`: the record does not exist.
    NotFound,
    /// 400 `{"errors": [...]}`: bad rating, missing reference or malformed body.
    Rejected,
    /// Any other 4xx produced by the framework itself.
    ClientError,
    /// 5xx `{"error": ...}`.
    Failed,
}

impl Outcome {
    fn classify(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::BAD_REQUEST => Self::Rejected,
            s if s.is_server_error() => Self::Failed,
            s if s.is_client_error() => Self::ClientError,
            _ => Self::Ok,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotFound => "not_found",
            Self::Rejected => "rejected",
            Self::ClientError => "client_error",
            Self::Failed => "failed",
        }
    }
}

/// Wraps each request in a span carrying a fresh request id, then records
/// count and latency labelled by route and outcome.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();

    // Unmatched paths collapse into one label so arbitrary URLs cannot grow
    // the series count.
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_string(), |mp| mp.as_str().to_string());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %req.uri().path(),
    );

    async move {
        let response = next.run(req).await;

        let elapsed = start.elapsed();
        let status = response.status();
        let outcome = Outcome::classify(status);

        let labels = [
            ("method", method.to_string()),
            ("route", route.clone()),
            ("outcome", outcome.as_str().to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(elapsed.as_secs_f64());

        let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        match outcome {
            Outcome::Failed => error!(status = status.as_u16(), duration_ms, %route, "Request failed"),
            Outcome::Rejected | Outcome::ClientError => {
                warn!(status = status.as_u16(), duration_ms, %route, "Request rejected");
            }
            Outcome::NotFound => debug!(duration_ms, %route, "Request found nothing"),
            Outcome::Ok => info!(status = status.as_u16(), duration_ms, %route, "Request finished"),
        }

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_error_contract_outcomes() {
        assert_eq!(Outcome::classify(StatusCode::OK), Outcome::Ok);
        assert_eq!(Outcome::classify(StatusCode::CREATED), Outcome::Ok);
        assert_eq!(Outcome::classify(StatusCode::NO_CONTENT), Outcome::Ok);
        assert_eq!(Outcome::classify(StatusCode::NOT_FOUND), Outcome::NotFound);
        assert_eq!(Outcome::classify(StatusCode::BAD_REQUEST), Outcome::Rejected);
        assert_eq!(
            Outcome::classify(StatusCode::METHOD_NOT_ALLOWED),
            Outcome::ClientError
        );
        assert_eq!(
            Outcome::classify(StatusCode::INTERNAL_SERVER_ERROR),
            Outcome::Failed
        );
        assert_eq!(Outcome::NotFound.as_str(), "not_found");
    }
}
