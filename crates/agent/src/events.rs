//! Session events published to widget observers

use serde::Serialize;
use uuid::Uuid;

use franchise_assistant_core::{Message, Phase};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    SessionStarted { session_id: Uuid },
    /// A message was appended; observers scroll to it
    MessageAppended { session_id: Uuid, message: Message },
    /// A model call started (`true`) or finished (`false`)
    Thinking { session_id: Uuid, active: bool },
    PhaseChanged { session_id: Uuid, from: Phase, to: Phase },
    SessionClosed { session_id: Uuid },
}

impl ConversationEvent {
    pub fn session_id(&self) -> Uuid {
        match self {
            ConversationEvent::SessionStarted { session_id }
            | ConversationEvent::MessageAppended { session_id, .. }
            | ConversationEvent::Thinking { session_id, .. }
            | ConversationEvent::PhaseChanged { session_id, .. }
            | ConversationEvent::SessionClosed { session_id } => *session_id,
        }
    }
}
