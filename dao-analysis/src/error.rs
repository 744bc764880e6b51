//! Error types for the analysis service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Analysis service errors.
///
/// Request-validation failures and analyzer failures stay distinct so a
/// validation problem is never reported as a failed analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = match &self {
            AnalysisError::AnalysisFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AnalysisError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };

        let body = serde_json::json!({
            "detail": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::AnalysisFailed("boom".to_string());
        assert_eq!(err.to_string(), "Analysis failed: boom");
    }

    #[test]
    fn test_analysis_failure_into_response() {
        let err = AnalysisError::AnalysisFailed("boom".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_request_into_response() {
        let err = AnalysisError::InvalidRequest("title must not be empty".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
