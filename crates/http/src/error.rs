//! `{code, message}` error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mockshelf_core::ApiError;

/// A classified failure; the status line always equals `code`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse(pub ApiError);

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_code() {
        let response = ErrorResponse(ApiError::new(400, "bad request")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ErrorResponse(ApiError::new(500, "boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_out_of_range_code_is_500() {
        let response = ErrorResponse(ApiError::new(42, "odd")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
