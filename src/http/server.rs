//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS header, timeout)
//! - Apply reloaded generator settings to the data state
//! - Serve until the shutdown broadcast fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::{get_data, get_health, get_stats, not_found};
use crate::http::request::{make_request_span, UuidRequestId, X_REQUEST_ID};
use crate::state::DataState;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<DataState>,
}

/// HTTP server for the mock data service.
pub struct HttpServer {
    router: Router,
    data: Arc<DataState>,
}

impl HttpServer {
    /// Create a new HTTP server with an entropy-seeded data state.
    pub fn new(config: ServiceConfig) -> Self {
        let data = DataState::new(&config.generator);
        Self::with_state(&config, data)
    }

    /// Create a server around an existing data state.
    pub fn with_state(config: &ServiceConfig, data: DataState) -> Self {
        let data = Arc::new(data);
        let state = AppState { data: data.clone() };
        let router = Self::build_router(config, state);
        Self { router, data }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let allow_origin = match HeaderValue::from_str(&config.cors.allow_origin) {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    allow_origin = %config.cors.allow_origin,
                    "Invalid cors.allow_origin, falling back to \"*\""
                );
                HeaderValue::from_static("*")
            }
        };

        Router::new()
            .route("/data", get(get_data))
            .route("/health", get(get_health))
            .route("/stats", get(get_stats))
            .fallback(not_found)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(SetResponseHeaderLayer::overriding(
                        ACCESS_CONTROL_ALLOW_ORIGIN,
                        allow_origin,
                    ))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared data state behind the handlers.
    pub fn data(&self) -> Arc<DataState> {
        self.data.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Config updates arriving on `config_updates` replace the generator
    /// settings. Returns once `shutdown` fires and in-flight requests finish.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<ServiceConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let data = self.data.clone();
        tokio::spawn(async move {
            while let Some(config) = config_updates.recv().await {
                data.apply_config(&config.generator);
                tracing::info!(
                    min_records = config.generator.min_records,
                    max_records = config.generator.max_records,
                    regenerate_every = config.generator.regenerate_every,
                    "Generator configuration reloaded"
                );
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
