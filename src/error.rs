use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::health::NutritionError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Bad or missing request input.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// An external fetch or write failed. Only `message` reaches the client.
    #[error("{message}")]
    Dependency {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Wraps a dependency failure with the message shown to the client.
    pub fn dependency(message: impl Into<String>) -> impl FnOnce(anyhow::Error) -> Self {
        let message = message.into();
        move |source| Self::Dependency { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Dependency { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<NutritionError> for AppError {
    fn from(e: NutritionError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Dependency { message, source } = &self {
            error!(error = %format!("{source:#}"), reason = %message, "dependency failed");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
