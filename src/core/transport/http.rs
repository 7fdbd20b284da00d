//! HTTP transport implementation.
//!
//! Exposes the bill-splitting endpoint over HTTP:
//! - `GET /`       usage hint
//! - `POST /price` quote, or 422 with the error envelope
//! - `GET /health` liveness probe

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use http::StatusCode;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::PriceServer;
use crate::domains::pricing::{ErrorEnvelope, PricingError};

const USAGE_MESSAGE: &str = "Calculate the total amount to be paid per person on the route: /price";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Body of a successful quote.
#[derive(Debug, Clone, Serialize)]
pub struct PriceResponse {
    pub result: String,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: PriceServer) -> TransportResult<()> {
        let addr = self.address();
        info!("Starting transport: {}", self.config.description());

        let app = router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Quote:  POST /price");
        info!("  → Health: GET /health");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the application router.
pub fn router(server: PriceServer, enable_cors: bool) -> Router {
    let app = Router::new()
        .route("/", get(root_handler))
        .route("/price", post(price_handler))
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(server)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app.layer(cors)
    } else {
        app
    }
}

impl IntoResponse for PricingError {
    fn into_response(self) -> Response {
        let envelope = ErrorEnvelope::from_violations(self.violations());
        (StatusCode::UNPROCESSABLE_ENTITY, Json(envelope)).into_response()
    }
}

/// Root handler - tells clients where to send quotes.
async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "message": USAGE_MESSAGE }))
}

/// Health check endpoint.
async fn health_check(State(server): State<PriceServer>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "name": server.name(),
        "version": server.version(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Quote the per-person share of a bill.
///
/// The body is read raw so that malformed JSON is reported in the same
/// envelope as field-level failures.
#[instrument(skip_all)]
async fn price_handler(
    State(server): State<PriceServer>,
    body: Bytes,
) -> Result<Json<PriceResponse>, PricingError> {
    let result = server.quote(&body)?;

    Ok(Json(PriceResponse {
        result: result.message(),
    }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "detail": "Not Found" })),
    )
}
