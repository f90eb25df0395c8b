//! Wizard state management.
//!
//! This module provides:
//! - [`WizardState`] - the full accumulated, persisted progress of the wizard
//! - [`ServiceRecord`] - configuration captured for a provisioned service
//! - [`ProgressStore`] - durable persistence between process invocations

pub mod store;

pub use store::ProgressStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration captured for one provisioned service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Human-readable service name.
    pub name: String,

    /// Primary URL for the service (dashboard or deployment).
    pub url: String,

    /// Service-specific credential fields.
    #[serde(default)]
    pub credentials: BTreeMap<String, String>,

    /// Webhook endpoints registered with the service.
    #[serde(default)]
    pub webhook_urls: Vec<String>,
}

/// The full accumulated progress of the wizard.
///
/// Persisted after every completed step. Every field has a serde default so
/// a document written by an older or newer version still loads; unknown
/// fields degrade to per-field defaults instead of failing the parse.
///
/// Collections round-trip as empty-but-present: a reloaded state always has
/// its sequences and mappings, never "absent" variants of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    /// The 1-indexed step the wizard will run next.
    ///
    /// Monotonically increasing; `TOTAL_STEPS + 1` is the terminal sentinel
    /// meaning every step finished and only the final render remains.
    #[serde(default = "default_step")]
    pub current_step: u32,

    /// Kebab-case project name, immutable once set for the session.
    #[serde(default)]
    pub project_name: String,

    /// Ordered tags of finished steps, append-only.
    #[serde(default)]
    pub completed_services: Vec<String>,

    /// Tokens, URLs, and signing secrets keyed by field name.
    #[serde(default)]
    pub secrets: BTreeMap<String, String>,

    /// Per-service configuration records.
    #[serde(default)]
    pub services: BTreeMap<String, ServiceRecord>,

    /// When this state was last persisted.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

fn default_step() -> u32 {
    1
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Create a fresh state positioned at step 1.
    pub fn new() -> Self {
        Self {
            current_step: 1,
            project_name: String::new(),
            completed_services: Vec::new(),
            secrets: BTreeMap::new(),
            services: BTreeMap::new(),
            saved_at: None,
        }
    }

    /// Whether a resume decision is needed (at least one step completed).
    pub fn has_progress(&self) -> bool {
        self.current_step > 1
    }

    /// Record that a step's service finished.
    pub fn complete_service(&mut self, tag: &str) {
        self.completed_services.push(tag.to_string());
    }

    /// Whether a service tag has been completed.
    pub fn service_completed(&self, tag: &str) -> bool {
        self.completed_services.iter().any(|t| t == tag)
    }

    /// Store a secret value under a field name.
    pub fn set_secret(&mut self, key: &str, value: &str) {
        self.secrets.insert(key.to_string(), value.to_string());
    }

    /// Look up a secret by field name.
    pub fn secret(&self, key: &str) -> Option<&str> {
        self.secrets.get(key).map(|s| s.as_str())
    }

    /// Store a service record.
    pub fn insert_service(&mut self, key: &str, record: ServiceRecord) {
        self.services.insert(key.to_string(), record);
    }

    /// Look up a credential field on a stored service record.
    pub fn service_credential(&self, service: &str, field: &str) -> Option<&str> {
        self.services
            .get(service)
            .and_then(|r| r.credentials.get(field))
            .map(|s| s.as_str())
    }

    /// Move to the next step.
    pub fn advance(&mut self) {
        self.current_step += 1;
    }

    /// Stamp the save timestamp. Called right before persisting.
    pub fn touch(&mut self) {
        self.saved_at = Some(Utc::now());
    }
}
