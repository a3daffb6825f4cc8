//! History serialization
//!
//! Turns sent to the model start at the first user message. The system
//! instruction, the local greeting and every failed exchange (a user message
//! answered by a local fallback) are left out, so the model only ever sees
//! its own replies as `model` turns.

use franchise_assistant_core::{Message, Role, Turn};

pub fn to_turns(messages: &[Message]) -> Vec<Turn> {
    let Some(start) = messages.iter().position(|m| m.role == Role::User) else {
        return Vec::new();
    };

    let mut turns = Vec::new();
    let mut iter = messages[start..].iter().peekable();

    while let Some(message) = iter.next() {
        match message.role {
            Role::System => {}
            Role::User => {
                if iter.peek().is_some_and(|next| next.is_local_reply()) {
                    iter.next();
                    continue;
                }
                turns.push(Turn::user(message.text.as_str()));
            }
            Role::Assistant => {
                if !message.is_local_reply() {
                    turns.push(Turn::model(message.text.as_str()));
                }
            }
        }
    }

    turns
}
