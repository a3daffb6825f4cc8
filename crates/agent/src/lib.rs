//! Conversational intake and guided questionnaire engine
//!
//! - [`IntakeCollector`]: profile wizard, lead write, session start
//! - [`ConversationController`]: `Intake -> Guided(1..=4) -> FreeChat` state machine
//! - [`history::to_turns`]: message log to model turns
//! - [`ChatWidget`]: open/close shell owning one of each

pub mod controller;
pub mod error;
pub mod events;
pub mod history;
pub mod intake;
pub mod session;
pub mod widget;

pub use controller::{ControllerConfig, ConversationController, InputSurface, SessionView, TurnOutcome};
pub use error::AgentError;
pub use events::ConversationEvent;
pub use intake::{FieldError, IntakeCollector, IntakeField, IntakeForm, IntakeOutcome, IntakeStep};
pub use session::Session;
pub use widget::ChatWidget;
