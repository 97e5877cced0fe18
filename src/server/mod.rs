//! # HTTP Server
//!
//! Serves the pipeline editor:
//!
//! - `GET /` answers `{"Ping": "Pong"}`
//! - `POST /pipelines/parse` evaluates a pipeline and answers
//!   `{"num_nodes": N, "num_edges": M, "is_dag": bool}`
//!
//! Malformed payloads get a 422, handler panics a 500, and oversized bodies a
//! 413. Each request evaluates its own graph; the router holds no state.

mod cors;
mod handlers;

use std::future::Future;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use cors::cors_layer;
pub use handlers::{ApiError, panic_response, parse_pipeline, ping};

use crate::config::ServerSettings;
use crate::constants::server::PARSE_ROUTE;
use crate::error::PipelineDagError;

/// Routes with every layer applied
pub fn router(settings: &ServerSettings) -> Result<Router, PipelineDagError> {
    let routes = Router::new()
        .route("/", get(ping))
        .route(PARSE_ROUTE, post(parse_pipeline));

    with_layers(routes, settings)
}

/// Wrap `routes` in the body limit, panic catcher, CORS policy and request
/// tracing
pub fn with_layers(routes: Router, settings: &ServerSettings) -> Result<Router, PipelineDagError> {
    Ok(routes
        .layer(DefaultBodyLimit::max(settings.max_body_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(&settings.cors)?)
        .layer(TraceLayer::new_for_http()))
}

/// Bind `settings.bind` and serve until Ctrl-C or SIGTERM
pub async fn serve(settings: ServerSettings) -> Result<(), PipelineDagError> {
    let listener =
        TcpListener::bind(settings.bind)
            .await
            .map_err(|e| PipelineDagError::ServerError {
                message: format!("failed to bind {}", settings.bind),
                source: e,
            })?;

    serve_on(listener, &settings, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` completes
pub async fn serve_on<F>(
    listener: TcpListener,
    settings: &ServerSettings,
    shutdown: F,
) -> Result<(), PipelineDagError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(settings)?;
    let address = listener.local_addr()?;

    info!(
        %address,
        allow_origins = ?settings.cors.allow_origins,
        allow_credentials = settings.cors.allow_credentials,
        max_body_bytes = settings.max_body_bytes,
        "pipeline server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| PipelineDagError::ServerError {
            message: format!("server on {address} stopped unexpectedly"),
            source: e,
        })?;

    info!("pipeline server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
