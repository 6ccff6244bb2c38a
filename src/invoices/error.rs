use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use super::dto::FieldErrors;

/// Outcome of a successful action: where to send the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRedirect {
    pub to: &'static str,
}

impl IntoResponse for ActionRedirect {
    fn into_response(self) -> Response {
        Redirect::to(self.to).into_response()
    }
}

/// Soft failures of the invoice actions. Returned to the caller, never raised.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{message}")]
    Validation {
        errors: FieldErrors,
        message: &'static str,
    },

    #[error("{message}")]
    Database { message: &'static str },

    #[error("Invoice not found.")]
    NotFound,
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ActionError::Validation { errors, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "message": message, "errors": errors }),
            ),
            ActionError::Database { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": message }),
            ),
            ActionError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "message": self.to_string() }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
