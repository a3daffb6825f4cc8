//! Intake Collector
//!
//! Four-step wizard gathering the profile:
//! `PersonalInfo -> Language -> Location -> Budget`.
//!
//! `next()` validates only the fields of the current step. `back()` never
//! validates. `submit()` validates everything, starts the lead write in the
//! background and starts the chat session without waiting for that write.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use franchise_assistant_config::constants::intake::OTHER_LOCATION;
use franchise_assistant_core::{BudgetBand, Language, UserProfile};
use franchise_assistant_persistence::{LeadRecord, LeadStore, NewLead, PersistenceError};

use crate::controller::ConversationController;
use crate::AgentError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    PersonalInfo,
    Language,
    Location,
    Budget,
}

impl IntakeStep {
    pub fn next(&self) -> Option<IntakeStep> {
        match self {
            IntakeStep::PersonalInfo => Some(IntakeStep::Language),
            IntakeStep::Language => Some(IntakeStep::Location),
            IntakeStep::Location => Some(IntakeStep::Budget),
            IntakeStep::Budget => None,
        }
    }

    pub fn previous(&self) -> Option<IntakeStep> {
        match self {
            IntakeStep::PersonalInfo => None,
            IntakeStep::Language => Some(IntakeStep::PersonalInfo),
            IntakeStep::Location => Some(IntakeStep::Language),
            IntakeStep::Budget => Some(IntakeStep::Location),
        }
    }

    pub fn fields(&self) -> &'static [IntakeField] {
        match self {
            IntakeStep::PersonalInfo => &[IntakeField::Name, IntakeField::Email, IntakeField::Phone],
            IntakeStep::Language => &[IntakeField::Language],
            IntakeStep::Location => &[IntakeField::Location, IntakeField::OtherLocation],
            IntakeStep::Budget => &[IntakeField::Budget],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeField {
    Name,
    Email,
    Phone,
    Language,
    Location,
    OtherLocation,
    Budget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: IntakeField,
    pub message: String,
}

impl FieldError {
    fn new(field: IntakeField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Raw wizard input, as typed or picked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Language name, native name or code
    pub language: String,
    /// Preset city, or `Other`
    pub location: String,
    /// Typed city when `location` is `Other`
    pub other_location: String,
    /// Budget band label, e.g. `₹50K - ₹100K`
    pub budget: String,
}

impl IntakeForm {
    fn validate_field(&self, field: IntakeField) -> Option<FieldError> {
        match field {
            IntakeField::Name => self
                .name
                .trim()
                .is_empty()
                .then(|| FieldError::new(field, "Name is required")),
            IntakeField::Email => (!EMAIL_PATTERN.is_match(self.email.trim()))
                .then(|| FieldError::new(field, "Enter a valid email address")),
            IntakeField::Phone => (!PHONE_PATTERN.is_match(self.phone.trim()))
                .then(|| FieldError::new(field, "Enter a valid 10-digit mobile number")),
            IntakeField::Language => Language::from_identifier(self.language.trim())
                .is_none()
                .then(|| FieldError::new(field, "Choose a supported language")),
            IntakeField::Location => self
                .location
                .trim()
                .is_empty()
                .then(|| FieldError::new(field, "Location is required")),
            IntakeField::OtherLocation => (self.is_other_location()
                && self.other_location.trim().is_empty())
            .then(|| FieldError::new(field, "Enter your city")),
            IntakeField::Budget => BudgetBand::from_label(self.budget.trim())
                .is_none()
                .then(|| FieldError::new(field, "Choose a budget range")),
        }
    }

    fn is_other_location(&self) -> bool {
        self.location.trim().eq_ignore_ascii_case(OTHER_LOCATION)
    }

    /// Errors for the fields of one wizard step
    pub fn validate_step(&self, step: IntakeStep) -> Vec<FieldError> {
        step.fields()
            .iter()
            .filter_map(|field| self.validate_field(*field))
            .collect()
    }

    /// Validate every field and build the profile
    pub fn to_profile(&self) -> Result<UserProfile, Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            IntakeStep::PersonalInfo,
            IntakeStep::Language,
            IntakeStep::Location,
            IntakeStep::Budget,
        ]
        .iter()
        .flat_map(|step| self.validate_step(*step))
        .collect();

        let (Some(language), Some(budget), true) = (
            Language::from_identifier(self.language.trim()),
            BudgetBand::from_label(self.budget.trim()),
            errors.is_empty(),
        ) else {
            return Err(errors);
        };

        let location = if self.is_other_location() {
            self.other_location.trim()
        } else {
            self.location.trim()
        };

        Ok(UserProfile {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            language,
            location: location.to_string(),
            budget,
        })
    }
}

/// Result of [`IntakeCollector::submit`]
#[derive(Debug)]
pub struct IntakeOutcome {
    pub ok: bool,
    pub errors: Vec<FieldError>,
    pub session_id: Option<Uuid>,
    /// Background lead write, when one was started
    pub lead_write: Option<JoinHandle<Result<LeadRecord, PersistenceError>>>,
}

impl IntakeOutcome {
    fn invalid(errors: Vec<FieldError>) -> Self {
        Self {
            ok: false,
            errors,
            session_id: None,
            lead_write: None,
        }
    }
}

pub struct IntakeCollector {
    step: IntakeStep,
    form: IntakeForm,
    lead_store: Arc<dyn LeadStore>,
}

impl IntakeCollector {
    pub fn new(lead_store: Arc<dyn LeadStore>) -> Self {
        Self {
            step: IntakeStep::PersonalInfo,
            form: IntakeForm::default(),
            lead_store,
        }
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut IntakeForm {
        &mut self.form
    }

    /// Validate the current step and move forward. On the last step the
    /// cursor stays put and the caller submits.
    pub fn next(&mut self) -> Result<IntakeStep, Vec<FieldError>> {
        let errors = self.form.validate_step(self.step);
        if !errors.is_empty() {
            return Err(errors);
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    pub fn back(&mut self) -> IntakeStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn reset(&mut self) {
        self.step = IntakeStep::PersonalInfo;
        self.form = IntakeForm::default();
    }

    /// Validate, write the lead in the background and start the session.
    ///
    /// A failed or slow lead write never delays or blocks the session.
    pub fn submit(
        &mut self,
        controller: &ConversationController,
    ) -> Result<IntakeOutcome, AgentError> {
        let profile = match self.form.to_profile() {
            Ok(profile) => profile,
            Err(errors) => {
                tracing::debug!(errors = errors.len(), "Intake rejected");
                return Ok(IntakeOutcome::invalid(errors));
            }
        };

        if controller
            .localization()
            .incomplete_languages()
            .contains(&profile.language)
        {
            tracing::debug!(language = %profile.language, "Intake language has no full step tables");
            return Ok(IntakeOutcome::invalid(vec![FieldError::new(
                IntakeField::Language,
                "Choose a supported language",
            )]));
        }

        let lead = NewLead::from_profile(&profile);
        let session_id = controller.start_session(profile)?;
        let lead_write = self.spawn_lead_write(lead);

        Ok(IntakeOutcome {
            ok: true,
            errors: Vec::new(),
            session_id: Some(session_id),
            lead_write,
        })
    }

    fn spawn_lead_write(
        &self,
        lead: NewLead,
    ) -> Option<JoinHandle<Result<LeadRecord, PersistenceError>>> {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime; lead not persisted");
            return None;
        };

        let store = self.lead_store.clone();
        Some(handle.spawn(async move {
            let result = store.create_lead(&lead).await;
            match &result {
                Ok(record) => {
                    metrics::counter!("leads_persisted_total", "result" => "ok").increment(1);
                    tracing::info!(lead_id = %record.id, "Lead persisted");
                }
                Err(e) => {
                    metrics::counter!("leads_persisted_total", "result" => "error").increment(1);
                    tracing::warn!(error = %e, "Lead write failed");
                }
            }
            result
        }))
    }
}
