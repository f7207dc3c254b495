//! REST handlers for the calculator module.
//!
//! One handler per operation. Operands arriving here are always valid
//! numbers: the `Json` extractor rejects missing or non-numeric fields
//! with 422 before a handler runs, so handlers only check domain
//! constraints. Every success is the uniform
//! `{result, operation, operands}` envelope.

use std::sync::Arc;

use axum::response::Html;
use axum::{Extension, Json};

use http_problem::Problem;

use crate::domain::{Operation, Service};

use super::dto::{BinaryOperands, CalculationResponse, HealthResponse, UnaryOperands};
use super::error::domain_error_to_problem;

/// Handler for POST /api/add
#[utoipa::path(
    post,
    path = "/api/add",
    tag = "calculator",
    request_body = BinaryOperands,
    responses(
        (status = 200, description = "Sum of a and b", body = CalculationResponse),
        (status = 422, description = "Missing or non-numeric operands"),
    )
)]
pub async fn add(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Json<CalculationResponse> {
    let result = svc.add(req.a.get(), req.b.get());
    Json(CalculationResponse::binary(Operation::Addition, req, result))
}

/// Handler for POST /api/subtract
#[utoipa::path(
    post,
    path = "/api/subtract",
    tag = "calculator",
    request_body = BinaryOperands,
    responses(
        (status = 200, description = "Difference of a and b", body = CalculationResponse),
        (status = 422, description = "Missing or non-numeric operands"),
    )
)]
pub async fn subtract(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Json<CalculationResponse> {
    let result = svc.subtract(req.a.get(), req.b.get());
    Json(CalculationResponse::binary(
        Operation::Subtraction,
        req,
        result,
    ))
}

/// Handler for POST /api/multiply
#[utoipa::path(
    post,
    path = "/api/multiply",
    tag = "calculator",
    request_body = BinaryOperands,
    responses(
        (status = 200, description = "Product of a and b", body = CalculationResponse),
        (status = 422, description = "Missing or non-numeric operands"),
    )
)]
pub async fn multiply(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Json<CalculationResponse> {
    let result = svc.multiply(req.a.get(), req.b.get());
    Json(CalculationResponse::binary(
        Operation::Multiplication,
        req,
        result,
    ))
}

/// Handler for POST /api/divide
#[utoipa::path(
    post,
    path = "/api/divide",
    tag = "calculator",
    request_body = BinaryOperands,
    responses(
        (status = 200, description = "Quotient of a and b", body = CalculationResponse),
        (status = 400, description = "Division by zero", body = Problem),
        (status = 422, description = "Missing or non-numeric operands"),
        (status = 500, description = "Unexpected failure", body = Problem),
    )
)]
pub async fn divide(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Result<Json<CalculationResponse>, Problem> {
    let result = svc
        .divide(req.a.get(), req.b.get())
        .map_err(|e| domain_error_to_problem(&e, "/api/divide"))?;
    Ok(Json(CalculationResponse::binary(
        Operation::Division,
        req,
        result,
    )))
}

/// Handler for POST /api/power
#[utoipa::path(
    post,
    path = "/api/power",
    tag = "calculator",
    request_body = BinaryOperands,
    responses(
        (status = 200, description = "a raised to the power of b", body = CalculationResponse),
        (status = 422, description = "Missing or non-numeric operands"),
    )
)]
pub async fn power(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Json<CalculationResponse> {
    let result = svc.power(req.a.get(), req.b.get());
    Json(CalculationResponse::binary(Operation::Power, req, result))
}

/// Handler for POST /api/square-root
#[utoipa::path(
    post,
    path = "/api/square-root",
    tag = "calculator",
    request_body = UnaryOperands,
    responses(
        (status = 200, description = "Non-negative square root of a", body = CalculationResponse),
        (status = 400, description = "Negative input", body = Problem),
        (status = 422, description = "Missing or non-numeric operand"),
        (status = 500, description = "Unexpected failure", body = Problem),
    )
)]
pub async fn square_root(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<UnaryOperands>,
) -> Result<Json<CalculationResponse>, Problem> {
    let result = svc
        .square_root(req.a.get())
        .map_err(|e| domain_error_to_problem(&e, "/api/square-root"))?;
    Ok(Json(CalculationResponse::unary(
        Operation::SquareRoot,
        req,
        result,
    )))
}

/// Handler for POST /api/percentage
#[utoipa::path(
    post,
    path = "/api/percentage",
    tag = "calculator",
    request_body = BinaryOperands,
    responses(
        (status = 200, description = "b percent of a", body = CalculationResponse),
        (status = 422, description = "Missing or non-numeric operands"),
    )
)]
pub async fn percentage(
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<BinaryOperands>,
) -> Json<CalculationResponse> {
    let result = svc.percentage(req.a.get(), req.b.get());
    Json(CalculationResponse::binary(
        Operation::Percentage,
        req,
        result,
    ))
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Handler for GET / — the calculator web page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../assets/calculator.html"))
}
