//! Tag vocabulary: three categorized, case-insensitively unique lists of
//! selectable labels.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{seed, AppError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    Subjects,
    Functions,
    Scenarios,
}

impl TagCategory {
    /// Parse the category name the frontend sends ("subjects" / "functions" /
    /// "scenarios").
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "subjects" => Some(Self::Subjects),
            "functions" => Some(Self::Functions),
            "scenarios" => Some(Self::Scenarios),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subjects => "subjects",
            Self::Functions => "functions",
            Self::Scenarios => "scenarios",
        }
    }

    fn fallback(&self) -> &'static [&'static str] {
        match self {
            Self::Subjects => seed::DEFAULT_SUBJECTS,
            Self::Functions => seed::DEFAULT_FUNCTIONS,
            Self::Scenarios => seed::DEFAULT_SCENARIOS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagOptions {
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub scenarios: Vec<String>,
}

impl Default for TagOptions {
    fn default() -> Self {
        seed::tag_options()
    }
}

impl TagOptions {
    pub fn list(&self, category: TagCategory) -> &[String] {
        match category {
            TagCategory::Subjects => &self.subjects,
            TagCategory::Functions => &self.functions,
            TagCategory::Scenarios => &self.scenarios,
        }
    }

    fn list_mut(&mut self, category: TagCategory) -> &mut Vec<String> {
        match category {
            TagCategory::Subjects => &mut self.subjects,
            TagCategory::Functions => &mut self.functions,
            TagCategory::Scenarios => &mut self.scenarios,
        }
    }

    /// First entry of the category's current list, or of the hardcoded
    /// fallback when the list is empty. Used to pre-fill selection controls.
    pub fn default_for(&self, category: TagCategory) -> String {
        self.list(category)
            .first()
            .cloned()
            .unwrap_or_else(|| category.fallback()[0].to_string())
    }

    /// Insert a new tag value. The value is normalized first; the insert is
    /// rejected when the normalized value is empty or a case-insensitive match
    /// already exists in the category. The list is re-sorted after insertion.
    /// Returns the value as stored.
    pub fn add(&mut self, category: TagCategory, raw: &str) -> Result<String, AppError> {
        let value = normalize(raw);
        if value.is_empty() {
            return Err(AppError::Validation(
                "Enter a tag name and choose a category.".to_string(),
            ));
        }

        let list = self.list_mut(category);
        let lowered = value.to_lowercase();
        if list.iter().any(|entry| entry.to_lowercase() == lowered) {
            return Err(AppError::Duplicate(
                "That tag already exists in this category.".to_string(),
            ));
        }

        list.push(value.clone());
        sort_tags(list);
        Ok(value)
    }
}

/// Trim and collapse internal whitespace. Returns an empty string for values
/// that are nothing but whitespace.
pub fn normalize(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a loosely-typed list loaded from storage: drop non-string entries,
/// normalize the rest, remove case-insensitive duplicates (first occurrence
/// wins). Falls back to `fallback` when nothing survives.
pub fn sanitize(list: &[Value], fallback: &[&str]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for entry in list {
        let Some(raw) = entry.as_str() else { continue };
        let normalized = normalize(raw);
        if normalized.is_empty() {
            continue;
        }
        let lowered = normalized.to_lowercase();
        if !cleaned.iter().any(|v| v.to_lowercase() == lowered) {
            cleaned.push(normalized);
        }
    }
    if cleaned.is_empty() {
        fallback.iter().map(|s| s.to_string()).collect()
    } else {
        cleaned
    }
}

/// Lexicographic sort, case-insensitive so "apple" and "Apple" land together
/// the way the selection controls display them.
fn sort_tags(list: &mut [String]) {
    list.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sanitize_drops_junk_and_dedups() {
        let list = vec![
            json!("Math"),
            json!(" math "),
            json!("Science"),
            json!(42),
            json!(null),
        ];
        assert_eq!(sanitize(&list, &["X"]), vec!["Math", "Science"]);
    }

    #[test]
    fn sanitize_falls_back_when_empty() {
        assert_eq!(sanitize(&[json!("   "), json!(7)], &["X"]), vec!["X"]);
        assert_eq!(sanitize(&[], &["X"]), vec!["X"]);
    }

    #[test]
    fn add_normalizes_and_sorts() {
        let mut tags = TagOptions::default();
        let stored = tags.add(TagCategory::Scenarios, "  Field   trip ").unwrap();
        assert_eq!(stored, "Field trip");
        // "Classwork", "Exam prep", "Field trip", "Homework", "Project"
        assert_eq!(tags.scenarios[2], "Field trip");
    }

    #[test]
    fn add_rejects_case_insensitive_duplicates() {
        let mut tags = TagOptions::default();
        tags.add(TagCategory::Subjects, "Geography").unwrap();
        let len = tags.subjects.len();
        let err = tags.add(TagCategory::Subjects, " GEOGRAPHY ").unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));
        assert_eq!(tags.subjects.len(), len);
    }

    #[test]
    fn add_rejects_empty_value() {
        let mut tags = TagOptions::default();
        let err = tags.add(TagCategory::Functions, "   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn default_for_prefers_current_list() {
        let mut tags = TagOptions::default();
        assert_eq!(tags.default_for(TagCategory::Subjects), "Language / Writing");
        tags.subjects.clear();
        assert_eq!(tags.default_for(TagCategory::Subjects), "Language / Writing");
        tags.subjects = vec!["Art".to_string()];
        assert_eq!(tags.default_for(TagCategory::Subjects), "Art");
    }
}
