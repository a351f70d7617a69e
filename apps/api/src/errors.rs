use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::cutting::program::PlanError;
use crate::cutting::validation::InputShapeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Both failures are terminal: no partial program is ever returned, and the
/// error strings are part of the wire contract (they pass through verbatim).
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidInput(#[from] InputShapeError),

    #[error(transparent)]
    InfeasibleSheet(#[from] PlanError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::debug!("rejecting cut request: {message}");

        let body = Json(json!({
            "success": false,
            "error": message,
        }));

        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_passes_through() {
        let err = AppError::from(InputShapeError);
        assert_eq!(
            err.to_string(),
            "Invalid input format. Please use only positive integers"
        );
    }

    #[test]
    fn test_infeasible_message_passes_through() {
        let err = AppError::from(PlanError::InfeasibleSheet);
        assert_eq!(
            err.to_string(),
            "Invalid sheet size. Too small for producing at least one box"
        );
    }
}
