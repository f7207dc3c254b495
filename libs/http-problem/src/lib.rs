//! RFC 9457 Problem Details for HTTP APIs.
//!
//! A pure data model over the `http` crate; axum response integration
//! lives behind the `axum` feature so the type stays usable from code
//! that never touches a web framework.

pub mod problem;

pub use problem::{APPLICATION_PROBLEM_JSON, Problem};

use http::StatusCode;

// Convenience constructors for the common response kinds.

pub fn bad_request(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::BAD_REQUEST, "Bad Request", detail)
}

pub fn not_found(detail: impl Into<String>) -> Problem {
    Problem::new(StatusCode::NOT_FOUND, "Not Found", detail)
}

pub fn unprocessable_entity(detail: impl Into<String>) -> Problem {
    Problem::new(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Unprocessable Entity",
        detail,
    )
}

pub fn internal_error(detail: impl Into<String>) -> Problem {
    Problem::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        detail,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convenience_constructors() {
        let bad_req = bad_request("Invalid input");
        assert_eq!(bad_req.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad_req.title, "Bad Request");
        assert_eq!(bad_req.detail, "Invalid input");

        let missing = not_found("No such route");
        assert_eq!(missing.status, StatusCode::NOT_FOUND);
        assert_eq!(missing.title, "Not Found");

        let invalid = unprocessable_entity("Field 'a' must be a number");
        assert_eq!(invalid.status, StatusCode::UNPROCESSABLE_ENTITY);

        let internal = internal_error("Internal server error");
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.title, "Internal Server Error");
    }

    #[cfg(feature = "axum")]
    #[test]
    fn problem_into_response_sets_status_and_content_type() {
        use axum::response::IntoResponse;

        let p = bad_request("invalid payload");
        let resp = p.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let ct = resp
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);
    }
}
