//! Lead records and the store port

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use franchise_assistant_core::UserProfile;

use crate::PersistenceError;

/// Status a lead is written with; later stages belong to the CRM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
        }
    }
}

/// Lead as written at intake completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Language display name, e.g. "Hindi"
    pub language: String,
    pub location: String,
    /// Budget band label, e.g. "₹1L - ₹5L"
    pub budget: String,
    pub status: LeadStatus,
}

impl NewLead {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            language: profile.language.display_name().to_string(),
            location: profile.location.clone(),
            budget: profile.budget.label().to_string(),
            status: LeadStatus::New,
        }
    }
}

/// Stored lead with store-assigned identity and creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: String,
    #[serde(flatten)]
    pub lead: NewLead,
    pub created_at: DateTime<Utc>,
}

/// Write-once lead sink
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Create a lead; the store assigns `id` and `created_at`
    async fn create_lead(&self, lead: &NewLead) -> Result<LeadRecord, PersistenceError>;
}

/// Process-local lead store
#[derive(Debug, Default)]
pub struct InMemoryLeadStore {
    leads: RwLock<Vec<LeadRecord>>,
    fail_with: Option<String>,
    delay: Option<Duration>,
}

impl InMemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every write fails with a connection error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Store that waits `delay` before completing each write
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn leads(&self) -> Vec<LeadRecord> {
        self.leads.read().clone()
    }

    pub fn len(&self) -> usize {
        self.leads.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.read().is_empty()
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn create_lead(&self, lead: &NewLead) -> Result<LeadRecord, PersistenceError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.fail_with {
            return Err(PersistenceError::Connection(message.clone()));
        }

        let record = LeadRecord {
            id: Uuid::new_v4().to_string(),
            lead: lead.clone(),
            created_at: Utc::now(),
        };
        self.leads.write().push(record.clone());

        tracing::debug!(lead_id = %record.id, "Lead stored in memory");
        Ok(record)
    }
}
