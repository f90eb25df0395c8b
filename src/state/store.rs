//! Durable progress persistence.
//!
//! The wizard's state lives in a single JSON document at a fixed relative
//! path inside the project directory. The store never aborts the wizard:
//! save failures are logged and swallowed (the step's progress then exists
//! only in memory until a later save succeeds), and a document that is
//! missing or fails to parse loads as "no prior state".

use std::fs;
use std::path::{Path, PathBuf};

use super::WizardState;
use crate::error::Result;

/// Well-known file name for the progress document.
pub const PROGRESS_FILE: &str = ".outfitter-progress.json";

/// Durable store for [`WizardState`], rooted at a project directory.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    dir: PathBuf,
}

impl ProgressStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the progress document.
    pub fn path(&self) -> PathBuf {
        self.dir.join(PROGRESS_FILE)
    }

    /// Whether a progress document exists on disk.
    pub fn exists(&self) -> bool {
        self.path().exists()
    }

    /// Save state, logging and swallowing any I/O failure.
    pub fn save(&self, state: &WizardState) {
        if let Err(e) = self.try_save(state) {
            tracing::warn!("Failed to save progress: {}", e);
        }
    }

    /// Save state, surfacing failures.
    ///
    /// Uses the write-to-temp-then-rename pattern so the document is never
    /// partially written.
    pub fn try_save(&self, state: &WizardState) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path();
        let content =
            serde_json::to_string_pretty(state).map_err(|e| anyhow::anyhow!(e))?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }

    /// Load previously saved state.
    ///
    /// A missing document and a document that fails to parse are treated
    /// identically: both yield `None`. Parse failures are logged.
    pub fn load(&self) -> Option<WizardState> {
        let path = self.path();
        if !path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read progress from {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!("Ignoring unparseable progress at {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Delete the progress document. A missing file is not an error; other
    /// I/O failures are logged and swallowed.
    pub fn clear(&self) {
        let path = self.path();
        if !path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!("Failed to clear progress at {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ServiceRecord;
    use tempfile::TempDir;

    fn populated_state() -> WizardState {
        let mut state = WizardState::new();
        state.project_name = "my-cool-app".into();
        state.current_step = 4;
        state.complete_service("github");
        state.complete_service("vercel");
        state.set_secret("github_repo_url", "https://github.com/alice/my-cool-app");
        let mut record = ServiceRecord {
            name: "Vercel Project".into(),
            url: "https://my-cool-app.vercel.app".into(),
            ..Default::default()
        };
        record.credentials.insert(
            "project_url".into(),
            "https://my-cool-app.vercel.app".into(),
        );
        record
            .webhook_urls
            .push("https://my-cool-app.vercel.app/api/billing/webhook".into());
        state.insert_service("vercel", record);
        state
    }

    #[test]
    fn save_then_load_round_trips_all_fields() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());

        let mut state = populated_state();
        state.touch();
        store.try_save(&state).unwrap();

        let loaded = store.load().expect("state should load");
        assert_eq!(loaded, state);
    }

    #[test]
    fn load_returns_none_when_absent() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());
        assert!(store.load().is_none());
        assert!(!store.exists());
    }

    #[test]
    fn load_returns_none_on_parse_failure() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());

        fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_removes_document() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());

        store.try_save(&WizardState::new()).unwrap();
        assert!(store.exists());

        store.clear();
        assert!(!store.exists());
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_is_noop_when_absent() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());
        store.clear();
        assert!(!store.exists());
    }

    #[test]
    fn save_swallows_io_failure() {
        // Root the store below a path that is a file, so create_dir_all fails.
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        let store = ProgressStore::new(blocker.join("nested"));
        store.save(&WizardState::new());
    }

    #[test]
    fn save_uses_atomic_write() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());

        store.try_save(&populated_state()).unwrap();

        let temp_path = store.path().with_extension("json.tmp");
        assert!(
            !temp_path.exists(),
            "temp file should not exist after successful save"
        );
    }

    #[test]
    fn crash_after_step_save_preserves_completed_step() {
        let temp = TempDir::new().unwrap();
        let store = ProgressStore::new(temp.path());

        // Step k completes: fields recorded, step advanced, state saved.
        let mut state = WizardState::new();
        state.project_name = "my-cool-app".into();
        state.set_secret("github_repo_url", "https://github.com/alice/my-cool-app");
        state.complete_service("github");
        state.advance();
        store.try_save(&state).unwrap();

        // Process dies here; a fresh store over the same directory resumes.
        let resumed = ProgressStore::new(temp.path())
            .load()
            .expect("saved state should survive restart");
        assert_eq!(resumed.current_step, 2);
        assert!(resumed.service_completed("github"));
        assert_eq!(
            resumed.secret("github_repo_url"),
            Some("https://github.com/alice/my-cool-app")
        );
    }
}
