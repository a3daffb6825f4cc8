//! Firestore lead store
//!
//! One `documents:commit` per lead. `createdAt` is set by a server-value
//! transform so the timestamp comes from Firestore, not this process.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use uuid::Uuid;

use franchise_assistant_config::LeadSettings;

use crate::leads::{LeadRecord, LeadStore, NewLead};
use crate::PersistenceError;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct FirestoreLeadStore {
    client: Client,
    base_url: String,
    project_id: String,
    collection: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for FirestoreLeadStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreLeadStore")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field("collection", &self.collection)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitResponse {
    #[serde(default)]
    write_results: Vec<WriteResult>,
    commit_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WriteResult {
    #[serde(default)]
    transform_results: Vec<Value>,
}

impl FirestoreLeadStore {
    pub fn new(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        collection: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PersistenceError> {
        let project_id = project_id.into();
        if project_id.trim().is_empty() {
            return Err(PersistenceError::Configuration(
                "Firestore project id is empty".into(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PersistenceError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id,
            collection: collection.into(),
            api_key,
        })
    }

    pub fn from_settings(settings: &LeadSettings) -> Result<Self, PersistenceError> {
        let project_id = settings.project_id.clone().ok_or_else(|| {
            PersistenceError::Configuration("leads.project_id is not set".into())
        })?;

        Self::new(
            settings.base_url.clone(),
            project_id,
            settings.collection.clone(),
            settings.api_key.clone(),
            settings.timeout(),
        )
    }

    fn database_path(&self) -> String {
        format!("projects/{}/databases/(default)", self.project_id)
    }

    fn commit_url(&self) -> String {
        format!("{}/{}/documents:commit", self.base_url, self.database_path())
    }

    fn document_name(&self, id: &str) -> String {
        format!("{}/documents/{}/{}", self.database_path(), self.collection, id)
    }

    fn commit_body(&self, id: &str, lead: &NewLead) -> Value {
        let string = |s: &str| json!({ "stringValue": s });

        json!({
            "writes": [{
                "update": {
                    "name": self.document_name(id),
                    "fields": {
                        "name": string(&lead.name),
                        "email": string(&lead.email),
                        "phone": string(&lead.phone),
                        "language": string(&lead.language),
                        "location": string(&lead.location),
                        "budget": string(&lead.budget),
                        "status": string(lead.status.as_str()),
                    }
                },
                "updateTransforms": [{
                    "fieldPath": "createdAt",
                    "setToServerValue": "REQUEST_TIME"
                }],
                "currentDocument": { "exists": false }
            }]
        })
    }
}

/// Server timestamp of the commit: the transform result, else the commit time
fn created_at(response: &CommitResponse) -> Result<DateTime<Utc>, PersistenceError> {
    let raw = response
        .write_results
        .first()
        .and_then(|result| result.transform_results.first())
        .and_then(|value| value.get("timestampValue"))
        .and_then(Value::as_str)
        .or(response.commit_time.as_deref())
        .ok_or_else(|| PersistenceError::InvalidResponse("commit returned no timestamp".into()))?;

    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| PersistenceError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl LeadStore for FirestoreLeadStore {
    async fn create_lead(&self, lead: &NewLead) -> Result<LeadRecord, PersistenceError> {
        let id = Uuid::new_v4().to_string();

        let mut request = self.client.post(self.commit_url());
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.as_str());
        }

        let response = request.json(&self.commit_body(&id, lead)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PersistenceError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: CommitResponse = serde_json::from_str(&body)?;
        let created_at = created_at(&parsed)?;

        tracing::info!(
            lead_id = %id,
            collection = %self.collection,
            "Lead written to Firestore"
        );

        Ok(LeadRecord {
            id,
            lead: lead.clone(),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LeadStatus;

    fn store() -> FirestoreLeadStore {
        FirestoreLeadStore::new(
            "https://firestore.example.test/v1/",
            "franchise-prod",
            "leads",
            Some("k".into()),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    fn lead() -> NewLead {
        NewLead {
            name: "Meera".into(),
            email: "meera@example.com".into(),
            phone: "9988776655".into(),
            language: "Tamil".into(),
            location: "Coimbatore".into(),
            budget: "₹5L - ₹10L".into(),
            status: LeadStatus::New,
        }
    }

    #[test]
    fn test_commit_body() {
        let store = store();
        let body = store.commit_body("abc", &lead());
        let write = &body["writes"][0];

        assert_eq!(
            write["update"]["name"],
            "projects/franchise-prod/databases/(default)/documents/leads/abc"
        );
        assert_eq!(write["update"]["fields"]["status"]["stringValue"], "new");
        assert_eq!(write["update"]["fields"]["location"]["stringValue"], "Coimbatore");
        assert_eq!(write["updateTransforms"][0]["setToServerValue"], "REQUEST_TIME");
        assert_eq!(
            store.commit_url(),
            "https://firestore.example.test/v1/projects/franchise-prod/databases/(default)/documents:commit"
        );
    }

    #[test]
    fn test_created_at_prefers_transform_result() {
        let response: CommitResponse = serde_json::from_str(
            r#"{
                "writeResults": [{"updateTime": "2024-05-01T10:00:00Z",
                                  "transformResults": [{"timestampValue": "2024-05-01T10:00:00.123456Z"}]}],
                "commitTime": "2024-05-01T10:00:01Z"
            }"#,
        )
        .unwrap();
        let t = created_at(&response).unwrap();
        assert_eq!(t.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn test_created_at_falls_back_to_commit_time() {
        let response: CommitResponse =
            serde_json::from_str(r#"{"commitTime": "2024-05-01T10:00:01Z"}"#).unwrap();
        assert!(created_at(&response).is_ok());

        let response: CommitResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(created_at(&response).is_err());
    }

    #[test]
    fn test_requires_project() {
        let err = FirestoreLeadStore::new("http://x", " ", "leads", None, Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, PersistenceError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_unreachable_store_errors() {
        let store = FirestoreLeadStore::new(
            "http://127.0.0.1:9",
            "p",
            "leads",
            None,
            Duration::from_secs(2),
        )
        .unwrap();
        assert!(store.create_lead(&lead()).await.is_err());
    }

    #[tokio::test]
    async fn test_error_omits_api_key() {
        let store = FirestoreLeadStore::new(
            "http://127.0.0.1:9",
            "p",
            "leads",
            Some("SECRET-KEY-123".into()),
            Duration::from_secs(2),
        )
        .unwrap();
        let err = store.create_lead(&lead()).await.unwrap_err();
        assert!(!err.to_string().contains("SECRET-KEY-123"), "{err}");
    }
}
