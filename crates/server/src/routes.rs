//! HTTP handlers

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use franchise_assistant_agent::{IntakeForm, SessionView, TurnOutcome};
use franchise_assistant_config::QuestionOption;
use franchise_assistant_core::{GuidedStep, Language};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "gateway": state.gateway.name(),
        "open_widgets": state.widgets.len(),
    }))
}

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let handle = state.metrics.as_ref().ok_or(ApiError::MetricsUnavailable)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}

#[derive(Debug, Deserialize)]
pub struct StepQuery {
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub step: u8,
    pub language: String,
    pub question: String,
    pub options: Vec<QuestionOption>,
}

/// GET /api/chat/steps/:step?language=
pub async fn step_text(
    State(state): State<AppState>,
    Path(step): Path<u8>,
    Query(query): Query<StepQuery>,
) -> Result<Json<StepResponse>, ApiError> {
    let step = GuidedStep::new(step)
        .ok_or_else(|| ApiError::BadRequest(format!("step must be 1-4, got {step}")))?;
    let language = query
        .language
        .unwrap_or_else(|| Language::DEFAULT.display_name().to_string());

    Ok(Json(StepResponse {
        step: step.ordinal(),
        question: state.localization.question_text(step, &language).to_string(),
        options: state.localization.options(step, &language).to_vec(),
        language,
    }))
}

#[derive(Debug, Serialize)]
pub struct WidgetResponse {
    pub widget_id: Uuid,
    pub view: SessionView,
}

/// POST /api/chat/widgets
pub async fn open_widget(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let (widget_id, widget) = state.open_widget()?;
    Ok((
        StatusCode::CREATED,
        Json(WidgetResponse {
            widget_id,
            view: widget.view(),
        }),
    ))
}

/// GET /api/chat/widgets/:id
pub async fn get_widget(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WidgetResponse>, ApiError> {
    let widget = state.widget(id)?;
    Ok(Json(WidgetResponse {
        widget_id: id,
        view: widget.view(),
    }))
}

/// DELETE /api/chat/widgets/:id
pub async fn close_widget(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.close_widget(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    pub session_id: Option<Uuid>,
    pub view: SessionView,
}

/// POST /api/chat/widgets/:id/intake
pub async fn submit_intake(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<IntakeForm>,
) -> Result<Json<IntakeResponse>, ApiError> {
    let widget = state.widget(id)?;
    let outcome = widget.submit_intake(form)?;
    if !outcome.ok {
        return Err(ApiError::Validation(outcome.errors));
    }

    // The lead write keeps running detached
    drop(outcome.lead_write);

    Ok(Json(IntakeResponse {
        session_id: outcome.session_id,
        view: widget.view(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct OptionRequest {
    pub key: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TurnResponse {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub view: SessionView,
}

impl TurnResponse {
    fn new(outcome: TurnOutcome, view: SessionView) -> Self {
        let error = match &outcome {
            TurnOutcome::Fallback { error } => Some(error.kind().to_string()),
            _ => None,
        };
        Self {
            outcome: outcome.label(),
            error,
            view,
        }
    }
}

/// POST /api/chat/widgets/:id/options
pub async fn select_option(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<OptionRequest>,
) -> Result<Json<TurnResponse>, ApiError> {
    let widget = state.widget(id)?;
    let outcome = widget.select_option(&request.key).await?;
    Ok(Json(TurnResponse::new(outcome, widget.view())))
}

/// POST /api/chat/widgets/:id/messages
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<TurnResponse>, ApiError> {
    let widget = state.widget(id)?;
    let outcome = widget.send_message(&request.text).await?;
    Ok(Json(TurnResponse::new(outcome, widget.view())))
}
