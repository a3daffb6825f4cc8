//! Session and append-only message log

use std::collections::BTreeMap;
use uuid::Uuid;

use franchise_assistant_core::{Message, MessageSource, Phase, Role, UserProfile};

/// One run of the widget from intake to close
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub profile: UserProfile,
    pub phase: Phase,
    /// Composed system instruction; also the first logged message
    pub system_instruction: String,
    messages: Vec<Message>,
    /// Selection text recorded per answered step
    pub responses: BTreeMap<u8, String>,
    next_message_id: u64,
}

impl Session {
    pub fn new(profile: UserProfile, system_instruction: String) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            profile,
            phase: Phase::Intake,
            system_instruction,
            messages: Vec::new(),
            responses: BTreeMap::new(),
            next_message_id: 1,
        };
        let instruction = session.system_instruction.clone();
        session.push(Role::System, instruction, MessageSource::Local);
        session
    }

    /// Append a message and return a copy of it
    pub fn push(&mut self, role: Role, text: impl Into<String>, source: MessageSource) -> Message {
        let message = Message::new(self.next_message_id, role, text, source);
        self.next_message_id += 1;
        self.messages.push(message.clone());
        message
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages shown in the widget (everything but the system instruction)
    pub fn visible_messages(&self) -> Vec<Message> {
        self.messages.iter().filter(|m| m.is_visible()).cloned().collect()
    }

    /// Language identifier used for every localized lookup of this session
    pub fn language_key(&self) -> &'static str {
        self.profile.language.display_name()
    }
}
