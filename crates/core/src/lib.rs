//! Core types for the franchise assistant
//!
//! Domain-level building blocks shared by every crate in the workspace:
//!
//! - [`Language`] - supported conversation locales
//! - [`UserProfile`] / [`BudgetBand`] - the profile captured at intake
//! - [`Message`] / [`Phase`] / [`GuidedStep`] - conversation log and state
//! - [`ModelGateway`] - the port to the external text-generation service
//!
//! This crate knows nothing about HTTP, storage or localization tables.

pub mod conversation;
pub mod currency;
pub mod gateway;
pub mod language;
pub mod profile;

pub use conversation::{GuidedStep, Message, MessageSource, Phase, QuestionTopic, Role};
pub use currency::format_inr;
pub use gateway::{GatewayError, GenerateRequest, ModelGateway, Turn, TurnRole};
pub use language::{Language, UnknownLanguage};
pub use profile::{BudgetBand, UnknownBudgetBand, UserProfile};
