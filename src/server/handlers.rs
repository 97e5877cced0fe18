use std::any::Any;

use axum::Json;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tracing::{debug, error, warn};

use crate::core::PipelineStats;
use crate::error::PipelineDagError;
use crate::pipeline::PipelineRequest;

const REQUEST_BODY: &str = "request body";

/// `GET /`
pub async fn ping() -> Json<Value> {
    Json(json!({ "Ping": "Pong" }))
}

/// `POST /pipelines/parse`
pub async fn parse_pipeline(body: Bytes) -> Result<Json<PipelineStats>, ApiError> {
    let request = PipelineRequest::from_json_slice(REQUEST_BODY, &body).inspect_err(|err| {
        warn!(reason = %err.detail(), bytes = body.len(), "rejected pipeline payload");
    })?;

    let stats = request.evaluate();
    debug!(
        num_nodes = stats.num_nodes,
        num_edges = stats.num_edges,
        is_dag = stats.is_dag,
        "evaluated pipeline"
    );

    Ok(Json(stats))
}

/// Error half of a handler result, rendered as `{"detail": ...}`
#[derive(Debug)]
pub struct ApiError(pub PipelineDagError);

impl From<PipelineDagError> for ApiError {
    fn from(err: PipelineDagError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PipelineDagError::MalformedGraph(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "detail": self.0.detail() }))).into_response()
    }
}

/// Turn a handler panic into a 500 instead of dropping the connection
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "internal server error".to_string()
    };

    error!(%detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "detail": detail })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping() {
        let Json(body) = ping().await;
        assert_eq!(body, json!({"Ping": "Pong"}));
    }

    #[tokio::test]
    async fn test_parse_pipeline_cycle() {
        let body = Bytes::from_static(
            br#"{"nodes": [{"id": "a"}, {"id": "b"}],
                 "edges": [{"id": "e1", "source": "a", "target": "b"},
                           {"id": "e2", "source": "b", "target": "a"}]}"#,
        );

        let Json(stats) = parse_pipeline(body).await.unwrap();
        assert_eq!(
            stats,
            PipelineStats {
                num_nodes: 2,
                num_edges: 2,
                is_dag: false
            }
        );
    }

    #[tokio::test]
    async fn test_parse_pipeline_malformed() {
        let err = parse_pipeline(Bytes::from_static(b"{\"nodes\": []}"))
            .await
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_panic_response_uses_message() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
