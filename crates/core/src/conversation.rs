//! Conversation log entries, phases and questionnaire steps

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a message in the session log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Composed instruction for the model, never rendered
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the text of a message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSource {
    /// Synthesized by the widget (instruction, greeting, fallback)
    Local,
    /// Typed or selected by the user
    User,
    /// Generated by the external model
    Model,
}

/// A single entry in the append-only session log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Monotonic per session, starting at 1
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub source: MessageSource,
}

impl Message {
    pub fn new(id: u64, role: Role, text: impl Into<String>, source: MessageSource) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            timestamp: Utc::now(),
            source,
        }
    }

    /// Whether the message is shown in the widget
    pub fn is_visible(&self) -> bool {
        self.role != Role::System
    }

    /// Assistant text that was not produced by the model
    pub fn is_local_reply(&self) -> bool {
        self.role == Role::Assistant && self.source == MessageSource::Local
    }
}

/// Topic covered by each questionnaire step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTopic {
    BusinessCategory,
    ExperienceLevel,
    RiskTolerance,
    InvestmentGoals,
}

impl fmt::Display for QuestionTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionTopic::BusinessCategory => write!(f, "Business Category"),
            QuestionTopic::ExperienceLevel => write!(f, "Experience Level"),
            QuestionTopic::RiskTolerance => write!(f, "Risk Tolerance"),
            QuestionTopic::InvestmentGoals => write!(f, "Investment Goals"),
        }
    }
}

/// Ordinal of a guided questionnaire step, always within `1..=4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GuidedStep(u8);

impl GuidedStep {
    pub const FIRST: GuidedStep = GuidedStep(1);
    pub const LAST: GuidedStep = GuidedStep(4);

    /// Returns `None` outside `1..=4`
    pub fn new(ordinal: u8) -> Option<Self> {
        (Self::FIRST.0..=Self::LAST.0)
            .contains(&ordinal)
            .then_some(GuidedStep(ordinal))
    }

    pub fn ordinal(&self) -> u8 {
        self.0
    }

    /// Following step, `None` after the last one
    pub fn next(&self) -> Option<GuidedStep> {
        GuidedStep::new(self.0 + 1)
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    pub fn topic(&self) -> QuestionTopic {
        match self.0 {
            1 => QuestionTopic::BusinessCategory,
            2 => QuestionTopic::ExperienceLevel,
            3 => QuestionTopic::RiskTolerance,
            _ => QuestionTopic::InvestmentGoals,
        }
    }

    /// All steps in order
    pub fn all() -> impl Iterator<Item = GuidedStep> {
        (Self::FIRST.0..=Self::LAST.0).map(GuidedStep)
    }
}

impl TryFrom<u8> for GuidedStep {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GuidedStep::new(value).ok_or_else(|| format!("guided step out of range: {}", value))
    }
}

impl From<GuidedStep> for u8 {
    fn from(step: GuidedStep) -> Self {
        step.0
    }
}

impl fmt::Display for GuidedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse conversational mode of a session.
///
/// Transitions only move forward: `Intake -> Guided(1..=4) -> FreeChat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", content = "step", rename_all = "snake_case")]
pub enum Phase {
    Intake,
    Guided(GuidedStep),
    FreeChat,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Intake
    }
}

impl Phase {
    /// Position in the fixed phase sequence
    pub fn rank(&self) -> u8 {
        match self {
            Phase::Intake => 0,
            Phase::Guided(step) => step.ordinal(),
            Phase::FreeChat => GuidedStep::LAST.ordinal() + 1,
        }
    }

    /// Phase reached after a successful model reply in this phase.
    ///
    /// `Intake` has no model turns and stays put.
    pub fn after_reply(&self) -> Phase {
        match self {
            Phase::Intake => Phase::Intake,
            Phase::Guided(step) => step.next().map(Phase::Guided).unwrap_or(Phase::FreeChat),
            Phase::FreeChat => Phase::FreeChat,
        }
    }

    /// Whether moving to `target` keeps the sequence monotonic
    pub fn can_transition_to(&self, target: Phase) -> bool {
        target.rank() >= self.rank()
    }

    pub fn guided_step(&self) -> Option<GuidedStep> {
        match self {
            Phase::Guided(step) => Some(*step),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Intake => write!(f, "Intake"),
            Phase::Guided(step) => write!(f, "Guided({})", step),
            Phase::FreeChat => write!(f, "FreeChat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guided_step_bounds() {
        assert!(GuidedStep::new(0).is_none());
        assert!(GuidedStep::new(5).is_none());
        assert_eq!(GuidedStep::new(3).map(|s| s.ordinal()), Some(3));
        assert_eq!(GuidedStep::LAST.next(), None);
        assert_eq!(GuidedStep::all().count(), 4);
    }

    #[test]
    fn test_topics_follow_sequence() {
        let topics: Vec<_> = GuidedStep::all().map(|s| s.topic()).collect();
        assert_eq!(
            topics,
            vec![
                QuestionTopic::BusinessCategory,
                QuestionTopic::ExperienceLevel,
                QuestionTopic::RiskTolerance,
                QuestionTopic::InvestmentGoals,
            ]
        );
    }

    #[test]
    fn test_after_reply_walks_forward() {
        let mut phase = Phase::Guided(GuidedStep::FIRST);
        let mut seen = vec![phase];
        while phase != Phase::FreeChat {
            let next = phase.after_reply();
            assert!(phase.can_transition_to(next));
            assert!(next.rank() > phase.rank());
            phase = next;
            seen.push(phase);
        }
        assert_eq!(seen.len(), 5);
        assert_eq!(Phase::FreeChat.after_reply(), Phase::FreeChat);
    }

    #[test]
    fn test_backward_transition_rejected() {
        let step3 = Phase::Guided(GuidedStep::new(3).unwrap());
        assert!(!step3.can_transition_to(Phase::Guided(GuidedStep::FIRST)));
        assert!(!Phase::FreeChat.can_transition_to(Phase::Intake));
    }

    #[test]
    fn test_phase_serde_shape() {
        let json = serde_json::to_value(Phase::Guided(GuidedStep::new(2).unwrap())).unwrap();
        assert_eq!(json, serde_json::json!({"phase": "guided", "step": 2}));
        let json = serde_json::to_value(Phase::FreeChat).unwrap();
        assert_eq!(json, serde_json::json!({"phase": "free_chat"}));
    }

    #[test]
    fn test_system_messages_hidden() {
        let msg = Message::new(1, Role::System, "rules", MessageSource::Local);
        assert!(!msg.is_visible());
        let greeting = Message::new(2, Role::Assistant, "hello", MessageSource::Local);
        assert!(greeting.is_visible());
        assert!(greeting.is_local_reply());
    }
}
