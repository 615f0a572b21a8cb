//! Persistent store adapter.
//!
//! Three independent slots, each a JSON file in the data directory. Loads fall
//! back to the bundled seed data on absence or parse failure and never raise;
//! saves return a `Result` so callers can decide whether a durability warning
//! is worth surfacing.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::tags::{sanitize, TagOptions};
use crate::{seed, Assignment, CommunityPrompt};

const ASSIGNMENTS_SLOT: &str = "assignments-v1";
const COMMUNITY_SLOT: &str = "community-v1";
const TAGS_SLOT: &str = "tags-v1";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolve the global data directory (~/.promptbank/).
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".promptbank")
}

#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the default data directory.
    pub fn default_location() -> Self {
        Self::new(data_dir())
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }

    /// Read and parse a slot. Absence is silent; a file that fails to parse is
    /// logged and treated as absent.
    fn load_slot<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let path = self.slot_path(slot);
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(slot, error = %e, "discarding unparseable slot, using defaults");
                None
            }
        }
    }

    /// Serialize and write a slot. Uses atomic write (temp file + rename) so a
    /// crash mid-write never leaves a truncated slot behind.
    fn save_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value)?;
        let tmp = self.dir.join(format!(".{}.json.tmp", slot));
        let path = self.slot_path(slot);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn load_assignments(&self) -> Vec<Assignment> {
        self.load_slot(ASSIGNMENTS_SLOT)
            .unwrap_or_else(seed::assignments)
    }

    pub fn save_assignments(&self, assignments: &[Assignment]) -> Result<(), StoreError> {
        self.save_slot(ASSIGNMENTS_SLOT, &assignments)
    }

    pub fn load_community(&self) -> Vec<CommunityPrompt> {
        self.load_slot(COMMUNITY_SLOT)
            .unwrap_or_else(seed::community_prompts)
    }

    pub fn save_community(&self, prompts: &[CommunityPrompt]) -> Result<(), StoreError> {
        self.save_slot(COMMUNITY_SLOT, &prompts)
    }

    /// Load the tag vocabulary. The stored record is taken loosely: each
    /// category list is sanitized independently and falls back to the default
    /// vocabulary when missing, empty, or corrupted.
    pub fn load_tags(&self) -> TagOptions {
        let raw: RawTagOptions = self.load_slot(TAGS_SLOT).unwrap_or_default();
        TagOptions {
            subjects: sanitize(&raw.subjects, seed::DEFAULT_SUBJECTS),
            functions: sanitize(&raw.functions, seed::DEFAULT_FUNCTIONS),
            scenarios: sanitize(&raw.scenarios, seed::DEFAULT_SCENARIOS),
        }
    }

    pub fn save_tags(&self, tags: &TagOptions) -> Result<(), StoreError> {
        self.save_slot(TAGS_SLOT, tags)
    }
}

/// Loose shape of the persisted vocabulary record: entries may be anything
/// until sanitized.
#[derive(Debug, Default, Deserialize)]
struct RawTagOptions {
    #[serde(default)]
    subjects: Vec<Value>,
    #[serde(default)]
    functions: Vec<Value>,
    #[serde(default)]
    scenarios: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn assignments_round_trip() {
        let (_guard, store) = temp_store();
        let mut assignments = seed::assignments();
        assignments[0].prompts_used[0].reflection = "Checked the dates myself.".to_string();
        assignments[0].prompts_used[0].rating = Some(4);

        store.save_assignments(&assignments).unwrap();
        assert_eq!(store.load_assignments(), assignments);
    }

    #[test]
    fn missing_slots_fall_back_to_seed() {
        let (_guard, store) = temp_store();
        assert_eq!(store.load_assignments(), seed::assignments());
        assert_eq!(store.load_community(), seed::community_prompts());
        assert_eq!(store.load_tags(), seed::tag_options());
    }

    #[test]
    fn corrupted_slot_falls_back_to_seed() {
        let (_guard, store) = temp_store();
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.slot_path(ASSIGNMENTS_SLOT), "{not json").unwrap();
        assert_eq!(store.load_assignments(), seed::assignments());
    }

    #[test]
    fn community_round_trip_keeps_owner_fields() {
        let (_guard, store) = temp_store();
        let mut prompts = seed::community_prompts();
        prompts[0].owner_assignment_id = Some("a1".to_string());
        prompts[0].owner_prompt_id = Some("a1p1".to_string());

        store.save_community(&prompts).unwrap();
        assert_eq!(store.load_community(), prompts);
    }

    #[test]
    fn tags_load_sanitizes_each_category() {
        let (_guard, store) = temp_store();
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(
            store.slot_path(TAGS_SLOT),
            r#"{"subjects":["Math"," math ",7],"functions":[]}"#,
        )
        .unwrap();

        let tags = store.load_tags();
        assert_eq!(tags.subjects, vec!["Math"]);
        assert_eq!(tags.functions, seed::tag_options().functions);
        assert_eq!(tags.scenarios, seed::tag_options().scenarios);
    }

    #[test]
    fn legacy_string_comments_load() {
        let (_guard, store) = temp_store();
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(
            store.slot_path(COMMUNITY_SLOT),
            r#"[{"id":"c9","title":"Old card","subject":"Math","func":"Explain",
                "scenario":"Homework","promptText":"Explain this.",
                "comments":["from before the comment rework"]}]"#,
        )
        .unwrap();

        let prompts = store.load_community();
        assert_eq!(prompts[0].comments[0].text, "from before the comment rework");
        assert!(!prompts[0].comments[0].user_created);
    }
}
