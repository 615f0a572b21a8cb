pub mod bank;
pub mod report;
pub mod seed;
pub mod store;
pub mod tags;

use serde::{Deserialize, Serialize};

pub use store::{Store, StoreError};
pub use tags::{TagCategory, TagOptions};

// --- Types (matching the dashboard's persisted storage layout) ---

/// A unit of schoolwork with the ordered history of prompts the student used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub study_minutes: u32,
    #[serde(default)]
    pub prompts_used: Vec<PromptRecord>,
}

impl Assignment {
    /// Display label: the short label when present, the full title otherwise.
    pub fn label(&self) -> &str {
        if self.short_label.is_empty() {
            &self.title
        } else {
            &self.short_label
        }
    }

    pub fn find_prompt(&self, prompt_id: &str) -> Option<&PromptRecord> {
        self.prompts_used.iter().find(|p| p.id == prompt_id)
    }

    pub fn find_prompt_mut(&mut self, prompt_id: &str) -> Option<&mut PromptRecord> {
        self.prompts_used.iter_mut().find(|p| p.id == prompt_id)
    }
}

/// A single prompt a student sent to the AI assistant, owned by exactly one
/// assignment, with reflection / rating / publish metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub id: String,
    pub text: String,
    #[serde(default = "default_feature")]
    pub feature: String,
    #[serde(default)]
    pub reflection: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub pushed_to_community: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub user_added: bool,
}

fn default_feature() -> String {
    "Other".to_string()
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Teacher,
    Student,
}

/// A shareable prompt card in the community bank.
///
/// `owner_assignment_id` / `owner_prompt_id` form a non-owning back-reference
/// to the assignment prompt this entry was published from. They exist only to
/// propagate un-publish when the entry is deleted; older data encodes the same
/// relation in an `a-{assignmentId}-{promptId}` entry id (see
/// [`bank::ownership`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPrompt {
    pub id: String,
    pub title: String,
    #[serde(default = "default_role")]
    pub role: Role,
    pub subject: String,
    pub func: String,
    pub scenario: String,
    pub prompt_text: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub helpful_count: u32,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub user_created: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_assignment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_prompt_id: Option<String>,
}

fn default_role() -> Role {
    Role::Student
}

/// A classroom note attached to a community prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", from = "CommentCompat")]
pub struct Comment {
    pub text: String,
    #[serde(default)]
    pub user_created: bool,
}

/// Older data stores comments as bare strings. Accept both shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum CommentCompat {
    Text(String),
    Full {
        text: String,
        #[serde(default, rename = "userCreated")]
        user_created: bool,
    },
}

impl From<CommentCompat> for Comment {
    fn from(value: CommentCompat) -> Self {
        match value {
            CommentCompat::Text(text) => Comment {
                text,
                user_created: false,
            },
            CommentCompat::Full { text, user_created } => Comment { text, user_created },
        }
    }
}

/// The label a community entry carries for its origin filter.
pub const SEED_SOURCE: &str = "Seed prompt";

// --- Errors ---

/// Structured rejections surfaced to the caller. Lookup misses are not errors:
/// they come back as `None` / `false` and the operation silently aborts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Duplicate(String),
}

// --- ID generation ---

/// Generate the next chat-captured prompt ID by scanning existing prompts.
/// Follows the "chat-{N}" pattern with N incrementing per assignment, so ids
/// stay unique within their owner without relying on clocks or randomness.
pub fn next_chat_prompt_id(assignment: &Assignment) -> String {
    let max = assignment
        .prompts_used
        .iter()
        .filter_map(|p| p.id.strip_prefix("chat-").and_then(|s| s.parse::<u64>().ok()))
        .max()
        .unwrap_or(0);
    format!("chat-{}", max + 1)
}
