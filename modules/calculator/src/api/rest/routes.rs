//! Router assembly and OpenAPI document for the calculator module.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use crate::domain::Service;

use super::dto::{BinaryOperands, CalculationResponse, HealthResponse, OperandEcho, UnaryOperands};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "A comprehensive calculator API with web interface",
        version = "1.0.0"
    ),
    paths(
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::power,
        handlers::square_root,
        handlers::percentage,
        handlers::health,
    ),
    components(schemas(
        BinaryOperands,
        UnaryOperands,
        OperandEcho,
        CalculationResponse,
        HealthResponse,
        http_problem::Problem,
    ))
)]
struct ApiDoc;

/// Build the calculator router.
///
/// Wires every operation endpoint, the liveness endpoint, the static
/// web page, and the OpenAPI document. The service is shared through
/// an `Extension`; it is stateless, so the `Arc` exists only to fit
/// the extension pattern.
pub fn router(service: Arc<Service>) -> Router {
    // Built once, served as static JSON
    let openapi_doc = Arc::new(ApiDoc::openapi());

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/add", post(handlers::add))
        .route("/api/subtract", post(handlers::subtract))
        .route("/api/multiply", post(handlers::multiply))
        .route("/api/divide", post(handlers::divide))
        .route("/api/power", post(handlers::power))
        .route("/api/square-root", post(handlers::square_root))
        .route("/api/percentage", post(handlers::percentage))
        .route(
            "/openapi.json",
            get(move || {
                let doc = Arc::clone(&openapi_doc);
                async move { Json((*doc).clone()) }
            }),
        )
        .layer(Extension(service))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_covers_every_operation() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in [
            "/api/add",
            "/api/subtract",
            "/api/multiply",
            "/api/divide",
            "/api/power",
            "/api/square-root",
            "/api/percentage",
            "/health",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn openapi_document_serializes() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("Calculator API"));
    }
}
