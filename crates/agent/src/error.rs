//! Agent error types
//!
//! Only caller mistakes surface here. Model failures become a localized
//! fallback message and never reach the caller as errors.

use franchise_assistant_core::Phase;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("widget is closed")]
    WidgetClosed,

    #[error("no active session")]
    NoActiveSession,

    #[error("a reply is still being generated")]
    TurnInProgress,

    #[error("expected {expected} phase, session is in {actual}")]
    WrongPhase { expected: &'static str, actual: Phase },

    #[error("unknown option '{key}' for step {step}")]
    UnknownOption { step: u8, key: String },

    #[error("message is empty")]
    EmptyMessage,
}

impl AgentError {
    /// Stable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            AgentError::WidgetClosed => "widget_closed",
            AgentError::NoActiveSession => "no_active_session",
            AgentError::TurnInProgress => "turn_in_progress",
            AgentError::WrongPhase { .. } => "wrong_phase",
            AgentError::UnknownOption { .. } => "unknown_option",
            AgentError::EmptyMessage => "empty_message",
        }
    }
}
