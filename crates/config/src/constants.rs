//! Centralized constants for the franchise assistant
//!
//! Single source of truth for defaults used by more than one crate.

/// Conversation defaults
pub mod conversation {
    /// Response length ceiling sent with every model call (tokens)
    pub const MAX_OUTPUT_TOKENS: u32 = 800;

    /// Sampling temperature for the advisor
    pub const TEMPERATURE: f32 = 0.7;

    /// Capacity of the per-session event channel
    pub const EVENT_CHANNEL_CAPACITY: usize = 64;
}

/// Intake form defaults
pub mod intake {
    /// Location choice that requires a typed city
    pub const OTHER_LOCATION: &str = "Other";

    /// Cities offered on the location step
    pub const PRESET_LOCATIONS: &[&str] = &[
        "Mumbai",
        "Delhi",
        "Bangalore",
        "Hyderabad",
        "Chennai",
        "Kolkata",
        "Pune",
        "Ahmedabad",
        "Jaipur",
        "Lucknow",
        OTHER_LOCATION,
    ];
}

/// Lead record defaults
pub mod leads {
    /// Status stamped on every lead written at intake
    pub const INITIAL_STATUS: &str = "new";

    /// Default document collection
    pub const DEFAULT_COLLECTION: &str = "leads";
}

/// Service endpoints
pub mod endpoints {
    /// Generative Language API
    pub const GEMINI_DEFAULT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

    /// Default Gemini model
    pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

    /// Firestore REST API
    pub const FIRESTORE_DEFAULT: &str = "https://firestore.googleapis.com/v1";
}

/// Timeouts (milliseconds)
pub mod timeouts {
    /// Upper bound for one model call
    pub const MODEL_REQUEST_MS: u64 = 30_000;

    /// Upper bound for the lead write
    pub const LEAD_WRITE_MS: u64 = 10_000;
}

/// Server defaults
pub mod server {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 8080;

    /// A widget untouched this long is closed and forgotten
    pub const WIDGET_IDLE_SECS: u64 = 30 * 60;

    /// Upper bound on widgets held at once
    pub const MAX_WIDGETS: usize = 10_000;

    /// Period of the idle widget sweep
    pub const WIDGET_SWEEP_SECS: u64 = 60;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_location_is_offered() {
        assert!(intake::PRESET_LOCATIONS.contains(&intake::OTHER_LOCATION));
        assert_eq!(intake::PRESET_LOCATIONS.last(), Some(&intake::OTHER_LOCATION));
    }

    #[test]
    fn test_model_timeout_exceeds_zero() {
        assert!(timeouts::MODEL_REQUEST_MS > 0);
        assert!(conversation::MAX_OUTPUT_TOKENS > 0);
    }
}
