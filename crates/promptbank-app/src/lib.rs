//! Application state for the promptbank dashboard.
//!
//! [`AppState`] owns the three persisted collections and the current
//! selections, and exposes every operation the UI triggers as a method. Each
//! mutation is a single synchronous read-modify-persist step: the in-memory
//! collections change first, then the touched slots are written through the
//! store. Save failures are logged and swallowed; the in-memory effect stands
//! (best-effort durability).

use tracing::{debug, warn};

use promptbank_core::bank::{self, PublishDetails};
use promptbank_core::report::{self, FeatureShare};
use promptbank_core::tags::TagCategory;
use promptbank_core::{
    next_chat_prompt_id, AppError, Assignment, Comment, CommunityPrompt, PromptRecord, Store,
    TagOptions,
};

pub use promptbank_core::bank::FILTER_ALL;

pub struct AppState {
    store: Store,
    pub assignments: Vec<Assignment>,
    pub community: Vec<CommunityPrompt>,
    pub tags: TagOptions,
    /// Assignment shown on the dashboard.
    pub dashboard_assignment: Option<String>,
    /// Assignment the chat panel captures prompts into.
    pub work_assignment: Option<String>,
}

/// Result of one chat submission: the id of the captured prompt (when an
/// assignment was selected) and the coach reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatExchange {
    pub captured_prompt_id: Option<String>,
    pub reply: String,
}

/// A tag accepted into the vocabulary, echoed back so the UI can select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedTag {
    pub category: TagCategory,
    pub value: String,
}

/// Fields for authoring a community entry directly, without a source prompt.
#[derive(Debug, Clone, Default)]
pub struct CommunityDraft {
    pub title: String,
    pub prompt_text: String,
    pub rationale: String,
    pub subject: Option<String>,
    pub func: Option<String>,
    pub scenario: Option<String>,
    pub tags: Vec<String>,
}

impl AppState {
    /// Load all three slots (seed data on absence or corruption) and select
    /// the first assignment for both the dashboard and the work panel.
    pub fn load(store: Store) -> Self {
        let assignments = store.load_assignments();
        let community = store.load_community();
        let tags = store.load_tags();
        let first = assignments.first().map(|a| a.id.clone());

        Self {
            store,
            assignments,
            community,
            tags,
            dashboard_assignment: first.clone(),
            work_assignment: first,
        }
    }

    // --- persistence (best-effort) ---

    fn persist_assignments(&self) {
        if let Err(e) = self.store.save_assignments(&self.assignments) {
            warn!(error = %e, "assignments not persisted");
        }
    }

    fn persist_community(&self) {
        if let Err(e) = self.store.save_community(&self.community) {
            warn!(error = %e, "community bank not persisted");
        }
    }

    fn persist_tags(&self) {
        if let Err(e) = self.store.save_tags(&self.tags) {
            warn!(error = %e, "tag vocabulary not persisted");
        }
    }

    // --- lookups ---

    pub fn find_assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    fn find_assignment_mut(&mut self, id: &str) -> Option<&mut Assignment> {
        self.assignments.iter_mut().find(|a| a.id == id)
    }

    pub fn find_prompt(&self, assignment_id: &str, prompt_id: &str) -> Option<&PromptRecord> {
        self.find_assignment(assignment_id)?.find_prompt(prompt_id)
    }

    pub fn find_community_prompt(&self, id: &str) -> Option<&CommunityPrompt> {
        self.community.iter().find(|p| p.id == id)
    }

    // --- selections ---

    pub fn select_dashboard_assignment(&mut self, id: &str) -> bool {
        if self.find_assignment(id).is_none() {
            return false;
        }
        self.dashboard_assignment = Some(id.to_string());
        true
    }

    pub fn select_work_assignment(&mut self, id: &str) -> bool {
        if self.find_assignment(id).is_none() {
            return false;
        }
        self.work_assignment = Some(id.to_string());
        true
    }

    // --- assignment / prompt mutations ---

    /// Save a reflection edit. A rating outside 1..=5 is rejected; a lookup
    /// miss is a silent no-op returning `false`.
    pub fn save_reflection(
        &mut self,
        assignment_id: &str,
        prompt_id: &str,
        reflection: &str,
        rating: Option<u8>,
    ) -> Result<bool, AppError> {
        if let Some(value) = rating {
            if !(1..=5).contains(&value) {
                return Err(AppError::Validation(format!(
                    "Rating must be between 1 and 5, got {}.",
                    value
                )));
            }
        }

        let Some(prompt) = self
            .find_assignment_mut(assignment_id)
            .and_then(|a| a.find_prompt_mut(prompt_id))
        else {
            return Ok(false);
        };

        prompt.reflection = reflection.trim().to_string();
        prompt.rating = rating;
        self.persist_assignments();
        Ok(true)
    }

    /// Capture a chat submission as a new prompt on the work assignment
    /// (falling back to the dashboard selection). Returns the new prompt id,
    /// or `None` when the text is empty or no assignment is selected.
    pub fn capture_chat_prompt(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let assignment_id = self
            .work_assignment
            .clone()
            .or_else(|| self.dashboard_assignment.clone())?;
        let assignment = self.find_assignment_mut(&assignment_id)?;

        let id = next_chat_prompt_id(assignment);
        assignment.prompts_used.push(PromptRecord {
            id: id.clone(),
            text: text.to_string(),
            feature: "Other".to_string(),
            reflection: String::new(),
            rating: None,
            pushed_to_community: false,
            user_added: true,
        });
        debug!(assignment = %assignment_id, prompt = %id, "captured chat prompt");
        self.persist_assignments();
        Some(id)
    }

    /// One chat turn: capture the prompt, then answer with the canned coach
    /// reply. The reply comes back even when nothing could be captured.
    pub fn chat_exchange(&mut self, text: &str) -> ChatExchange {
        ChatExchange {
            captured_prompt_id: self.capture_chat_prompt(text),
            reply: promptbank_suggest::reply(text),
        }
    }

    // --- community bank ---

    /// Publish a prompt into the community bank. Guarded no-op (`Ok(false)`)
    /// when either id resolves to nothing or the prompt is already published,
    /// so calling it twice has no observable effect. A supplied-but-empty
    /// title or rationale is rejected, as is a duplicate of an existing
    /// entry's title or wording.
    pub fn publish_prompt(
        &mut self,
        assignment_id: &str,
        prompt_id: &str,
        details: PublishDetails,
    ) -> Result<bool, AppError> {
        for (field, value) in [("title", &details.title), ("rationale", &details.rationale)] {
            if let Some(v) = value {
                if v.trim().is_empty() {
                    return Err(AppError::Validation(format!(
                        "A community prompt needs a non-empty {}.",
                        field
                    )));
                }
            }
        }

        let Some(assignment) = self.find_assignment(assignment_id) else {
            return Ok(false);
        };
        let Some(prompt) = assignment.find_prompt(prompt_id) else {
            return Ok(false);
        };
        if prompt.pushed_to_community {
            return Ok(false);
        }

        let entry = bank::build_published_entry(assignment, prompt, &details, &self.tags);
        if bank::is_duplicate(&self.community, &entry.title, &entry.prompt_text) {
            return Err(AppError::Duplicate(
                "A prompt with the same title or wording already exists in the bank.".to_string(),
            ));
        }

        debug!(id = %entry.id, "publishing prompt to community bank");
        self.community.push(entry);
        self.find_assignment_mut(assignment_id)
            .and_then(|a| a.find_prompt_mut(prompt_id))
            .expect("prompt resolved above")
            .pushed_to_community = true;

        self.persist_assignments();
        self.persist_community();
        Ok(true)
    }

    /// Author a community entry directly. Title and prompt text are required;
    /// duplicates are rejected, never merged.
    pub fn add_community_prompt(&mut self, draft: CommunityDraft) -> Result<String, AppError> {
        let title = draft.title.trim().to_string();
        let prompt_text = draft.prompt_text.trim().to_string();
        if title.is_empty() || prompt_text.is_empty() {
            return Err(AppError::Validation(
                "A community prompt needs a title and the prompt text.".to_string(),
            ));
        }
        if bank::is_duplicate(&self.community, &title, &prompt_text) {
            return Err(AppError::Duplicate(
                "A prompt with the same title or wording already exists in the bank.".to_string(),
            ));
        }

        let id = next_user_entry_id(&self.community);
        let subject = draft
            .subject
            .unwrap_or_else(|| self.tags.default_for(TagCategory::Subjects));
        let func = draft
            .func
            .unwrap_or_else(|| self.tags.default_for(TagCategory::Functions));
        let scenario = draft
            .scenario
            .unwrap_or_else(|| self.tags.default_for(TagCategory::Scenarios));

        let mut tags: Vec<String> = Vec::new();
        for tag in draft.tags.iter().map(|t| t.to_lowercase()) {
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        self.community.push(CommunityPrompt {
            id: id.clone(),
            title,
            role: promptbank_core::Role::Student,
            subject,
            func,
            scenario,
            prompt_text,
            rationale: draft.rationale.trim().to_string(),
            tags,
            helpful_count: 0,
            source: "Shared directly".to_string(),
            comments: vec![],
            user_created: true,
            owner_assignment_id: None,
            owner_prompt_id: None,
        });
        self.persist_community();
        Ok(id)
    }

    /// Delete a community entry. When the entry carries an owner
    /// back-reference, the originating assignment prompt becomes publishable
    /// again.
    pub fn delete_community_prompt(&mut self, id: &str) -> bool {
        let Some(index) = self.community.iter().position(|p| p.id == id) else {
            return false;
        };
        let removed = self.community.remove(index);
        self.persist_community();

        if let Some((assignment_id, prompt_id)) = bank::ownership(&removed) {
            if let Some(prompt) = self
                .find_assignment_mut(&assignment_id)
                .and_then(|a| a.find_prompt_mut(&prompt_id))
            {
                prompt.pushed_to_community = false;
                self.persist_assignments();
            }
        }
        true
    }

    /// Set an entry's helpful count. Last write wins; this is a single-rater
    /// score, not a vote tally.
    pub fn rate_community_prompt(&mut self, id: &str, value: u32) -> bool {
        let Some(prompt) = self.community.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        prompt.helpful_count = value;
        self.persist_community();
        true
    }

    /// Append a classroom note to an entry. Empty notes are ignored.
    pub fn add_comment(&mut self, id: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(prompt) = self.community.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        prompt.comments.push(Comment {
            text: text.to_string(),
            user_created: true,
        });
        self.persist_community();
        true
    }

    /// Remove a comment by position. Only user-created comments may go.
    pub fn delete_comment(&mut self, id: &str, index: usize) -> bool {
        let Some(prompt) = self.community.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if !prompt
            .comments
            .get(index)
            .map(|c| c.user_created)
            .unwrap_or(false)
        {
            return false;
        }
        prompt.comments.remove(index);
        self.persist_community();
        true
    }

    pub fn can_delete_community_prompt(&self, id: &str) -> bool {
        self.find_community_prompt(id).is_some_and(bank::can_delete)
    }

    /// Community view: filtered by the four criteria (`"all"` matches
    /// everything), ranked by helpful count.
    pub fn filtered_community(
        &self,
        subject: &str,
        func: &str,
        scenario: &str,
        source: &str,
    ) -> Vec<&CommunityPrompt> {
        bank::filter_and_rank(&self.community, subject, func, scenario, source)
    }

    /// Type-ahead suggestions for the chat input.
    pub fn prompt_suggestions(&self, query: &str) -> Vec<&CommunityPrompt> {
        promptbank_suggest::suggest(&self.community, query, 5)
    }

    // --- tag vocabulary ---

    /// Add a tag to one of the three categories and persist the vocabulary.
    pub fn add_tag(&mut self, category: &str, value: &str) -> Result<AddedTag, AppError> {
        let Some(category) = TagCategory::parse(category) else {
            return Err(AppError::Validation(
                "Enter a tag name and choose a category.".to_string(),
            ));
        };
        let value = self.tags.add(category, value)?;
        self.persist_tags();
        Ok(AddedTag { category, value })
    }

    // --- dashboard reads ---

    pub fn feature_shares_for(&self, assignment_id: &str) -> Vec<FeatureShare> {
        self.find_assignment(assignment_id)
            .map(|a| report::feature_shares(&a.prompts_used))
            .unwrap_or_default()
    }

    pub fn study_time_for(&self, assignment_id: &str) -> Option<String> {
        self.find_assignment(assignment_id)
            .map(|a| report::format_study_minutes(a.study_minutes))
    }

    /// How many of an assignment's prompts are in the community bank, out of
    /// how many total.
    pub fn pushed_summary(&self, assignment_id: &str) -> Option<(usize, usize)> {
        let assignment = self.find_assignment(assignment_id)?;
        let pushed = assignment
            .prompts_used
            .iter()
            .filter(|p| p.pushed_to_community)
            .count();
        Some((pushed, assignment.prompts_used.len()))
    }
}

/// Ids for directly-authored entries: "u-{N}", scanning existing entries the
/// same way chat prompt ids are generated.
fn next_user_entry_id(bank: &[CommunityPrompt]) -> String {
    let max = bank
        .iter()
        .filter_map(|p| p.id.strip_prefix("u-").and_then(|s| s.parse::<u64>().ok()))
        .max()
        .unwrap_or(0);
    format!("u-{}", max + 1)
}
