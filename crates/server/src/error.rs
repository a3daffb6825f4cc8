//! API error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use uuid::Uuid;

use franchise_assistant_agent::{AgentError, FieldError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("widget {0} not found")]
    WidgetNotFound(Uuid),

    #[error("intake has invalid fields")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    BadRequest(String),

    #[error("metrics exporter is not installed")]
    MetricsUnavailable,

    #[error("widget limit of {0} reached")]
    TooManyWidgets(usize),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Agent(err) => match err {
                AgentError::NoActiveSession => StatusCode::NOT_FOUND,
                AgentError::WidgetClosed
                | AgentError::TurnInProgress
                | AgentError::WrongPhase { .. } => StatusCode::CONFLICT,
                AgentError::UnknownOption { .. } | AgentError::EmptyMessage => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            },
            ApiError::WidgetNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MetricsUnavailable | ApiError::TooManyWidgets(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Agent(err) => err.code(),
            ApiError::WidgetNotFound(_) => "widget_not_found",
            ApiError::Validation(_) => "validation_failed",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::MetricsUnavailable => "metrics_unavailable",
            ApiError::TooManyWidgets(_) => "too_many_widgets",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let mut body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        if let ApiError::Validation(fields) = &self {
            body["fields"] = json!(fields);
        }

        (status, Json(body)).into_response()
    }
}
