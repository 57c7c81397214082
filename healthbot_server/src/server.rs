use axum::Router;
use axum::extract::MatchedPath;
use axum::http::{HeaderValue, Method, Request};
use axum::routing::{get, post};
use healthbot_config::ServerConfig;
use std::future::Future;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Span, info, warn};

use crate::handler::{self, AppState};
use crate::{Error, Result};

/// Build the CORS layer. An empty allow-list admits any origin.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| Error::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// Resolves when the process receives Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// HTTP front end for the chatbot.
pub struct ChatServer {
    state: AppState,
    config: ServerConfig,
}

impl ChatServer {
    #[must_use]
    pub const fn new(state: AppState, config: ServerConfig) -> Self {
        Self { state, config }
    }

    pub fn router(&self) -> Result<Router> {
        let router = Router::new()
            .route("/chat", post(handler::chat))
            .route("/health", get(handler::health))
            .with_state(self.state.clone())
            .layer(cors_layer(&self.config.allowed_origins)?)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<_>| {
                        let path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map_or(request.uri().path(), MatchedPath::as_str);

                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            path = %path,
                        )
                    })
                    .on_request(|_request: &Request<_>, _span: &Span| {})
                    .on_response(
                        |response: &axum::http::Response<_>, latency: Duration, _span: &Span| {
                            info!(
                                status = %response.status().as_u16(),
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        },
                    ),
            );

        Ok(router)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router()?;
        let listener = tokio::net::TcpListener::bind(self.config.bind_address()).await?;

        info!("Server listening on {}", listener.local_addr()?);
        info!(
            "Serving {} disease records",
            self.state.store().len()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}
