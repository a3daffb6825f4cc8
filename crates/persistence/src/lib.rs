//! Lead persistence
//!
//! The conversation engine writes one lead per completed intake and never
//! reads it back. Stores:
//! - [`InMemoryLeadStore`]: process-local, for tests and development
//! - [`FirestoreLeadStore`]: Firestore REST `documents:commit`

pub mod error;
pub mod firestore;
pub mod leads;

pub use error::PersistenceError;
pub use firestore::FirestoreLeadStore;
pub use leads::{InMemoryLeadStore, LeadRecord, LeadStatus, LeadStore, NewLead};

use std::sync::Arc;

use franchise_assistant_config::{LeadBackend, LeadSettings};

/// Build the lead store selected in settings
pub fn create_lead_store(settings: &LeadSettings) -> Result<Arc<dyn LeadStore>, PersistenceError> {
    match settings.backend {
        LeadBackend::Memory => Ok(Arc::new(InMemoryLeadStore::new())),
        LeadBackend::Firestore => Ok(Arc::new(FirestoreLeadStore::from_settings(settings)?)),
    }
}
