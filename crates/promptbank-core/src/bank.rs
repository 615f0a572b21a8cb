//! Community bank helpers: duplicate detection, filtering and ranking,
//! publish derivations, and the ownership back-reference.

use crate::{Assignment, Comment, CommunityPrompt, PromptRecord, Role, TagOptions, SEED_SOURCE};
use crate::tags::TagCategory;

/// Rationale used when a prompt is published without one.
pub const DEFAULT_PUBLISH_RATIONALE: &str = "Pushed from a real assignment. Use this as an \
     example and adapt it rather than copying it directly.";

/// Sentinel filter value matching every entry.
pub const FILTER_ALL: &str = "all";

/// Case-insensitive, whitespace-trimmed duplicate check: true when either the
/// title or the prompt text matches the corresponding field of any existing
/// entry. An empty title and empty text never count as a duplicate.
pub fn is_duplicate(bank: &[CommunityPrompt], title: &str, text: &str) -> bool {
    let title_key = title.trim().to_lowercase();
    let text_key = text.trim().to_lowercase();
    if title_key.is_empty() && text_key.is_empty() {
        return false;
    }

    bank.iter().any(|p| {
        let existing_title = p.title.trim().to_lowercase();
        let existing_text = p.prompt_text.trim().to_lowercase();
        (!title_key.is_empty() && existing_title == title_key)
            || (!text_key.is_empty() && existing_text == text_key)
    })
}

/// Filter by exact match on each criterion unless the criterion is `"all"`,
/// then rank descending by helpful count. The sort is stable: ties keep the
/// bank's relative order.
///
/// The source criterion recognizes `"seed"` (entries labelled exactly
/// `"Seed prompt"`) and `"assignment"` (labels starting with `"From "`);
/// anything else matches every entry.
pub fn filter_and_rank<'a>(
    bank: &'a [CommunityPrompt],
    subject: &str,
    func: &str,
    scenario: &str,
    source: &str,
) -> Vec<&'a CommunityPrompt> {
    let mut matches: Vec<&CommunityPrompt> = bank
        .iter()
        .filter(|p| {
            let subject_match = subject == FILTER_ALL || p.subject == subject;
            let func_match = func == FILTER_ALL || p.func == func;
            let scenario_match = scenario == FILTER_ALL || p.scenario == scenario;
            let source_match = match source {
                "seed" => p.source == SEED_SOURCE,
                "assignment" => p.source.starts_with("From "),
                _ => true,
            };
            subject_match && func_match && scenario_match && source_match
        })
        .collect();

    matches.sort_by(|a, b| b.helpful_count.cmp(&a.helpful_count));
    matches
}

/// Resolve the assignment prompt a community entry was published from.
///
/// Explicit owner fields are the canonical relation. When both are absent,
/// fall back to parsing the legacy `a-{assignmentId}-{promptId}` id
/// convention; everything after the second segment belongs to the prompt id,
/// so prompt ids containing hyphens (e.g. `chat-2`) survive. This parse is a
/// compatibility shim for data written before owner fields existed.
pub fn ownership(prompt: &CommunityPrompt) -> Option<(String, String)> {
    if let (Some(a), Some(p)) = (&prompt.owner_assignment_id, &prompt.owner_prompt_id) {
        return Some((a.clone(), p.clone()));
    }

    let rest = prompt.id.strip_prefix("a-")?;
    let (assignment_id, prompt_id) = rest.split_once('-')?;
    if assignment_id.is_empty() || prompt_id.is_empty() {
        return None;
    }
    Some((assignment_id.to_string(), prompt_id.to_string()))
}

/// True for entries the user may delete: ones they created, or legacy
/// published entries recognizable by the `a-` id prefix.
pub fn can_delete(prompt: &CommunityPrompt) -> bool {
    prompt.user_created || prompt.id.starts_with("a-")
}

/// Fixed feature → function mapping used when publishing without an explicit
/// function. Features outside the vocabulary map to "Explain".
pub fn function_for_feature(feature: &str) -> &str {
    match feature {
        "Explain" | "Summarize" | "Compare" | "Brainstorm" | "Reflect" => feature,
        _ => "Explain",
    }
}

/// Caller-supplied fields for a publish. `None` fields are derived from the
/// source prompt and the current vocabulary.
#[derive(Debug, Clone, Default)]
pub struct PublishDetails {
    pub title: Option<String>,
    pub rationale: Option<String>,
    pub subject: Option<String>,
    pub func: Option<String>,
    pub scenario: Option<String>,
    pub extra_tags: Vec<String>,
}

/// Build the community entry for a publish-from-assignment. Pure derivation;
/// the caller guards against re-publish and duplicates and flips the source
/// prompt's published flag.
pub fn build_published_entry(
    assignment: &Assignment,
    prompt: &PromptRecord,
    details: &PublishDetails,
    tags: &TagOptions,
) -> CommunityPrompt {
    let feature = if prompt.feature.is_empty() {
        "Other"
    } else {
        prompt.feature.as_str()
    };

    let title = details
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} - student prompt", assignment.label()));
    let rationale = details
        .rationale
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_PUBLISH_RATIONALE)
        .to_string();
    let subject = details
        .subject
        .clone()
        .unwrap_or_else(|| tags.default_for(TagCategory::Subjects));
    let func = details
        .func
        .clone()
        .unwrap_or_else(|| function_for_feature(feature).to_string());
    let scenario = details
        .scenario
        .clone()
        .unwrap_or_else(|| tags.default_for(TagCategory::Scenarios));

    let mut tag_set: Vec<String> = Vec::new();
    let mut push_tag = |tag: String| {
        if !tag_set.contains(&tag) {
            tag_set.push(tag);
        }
    };
    push_tag("community".to_string());
    push_tag(feature.to_lowercase());
    push_tag(subject.to_lowercase());
    push_tag(func.to_lowercase());
    push_tag(scenario.to_lowercase());
    for extra in &details.extra_tags {
        push_tag(extra.to_lowercase());
    }

    let comments = if prompt.reflection.is_empty() {
        vec![]
    } else {
        vec![Comment {
            text: prompt.reflection.clone(),
            user_created: true,
        }]
    };

    CommunityPrompt {
        id: format!("a-{}-{}", assignment.id, prompt.id),
        title,
        role: Role::Student,
        subject,
        func,
        scenario,
        prompt_text: prompt.text.clone(),
        rationale,
        tags: tag_set,
        helpful_count: u32::from(prompt.rating.unwrap_or(0)),
        source: format!("From {}", assignment.label()),
        comments,
        user_created: true,
        owner_assignment_id: Some(assignment.id.clone()),
        owner_prompt_id: Some(prompt.id.clone()),
    }
}
