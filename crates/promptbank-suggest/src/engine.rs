//! Type-ahead suggestions for the chat input: community entries whose title
//! or prompt text contains what the student has typed so far.

use promptbank_core::CommunityPrompt;

/// Queries shorter than this yield no suggestions; one or two characters
/// match nearly everything.
const MIN_QUERY_LEN: usize = 3;

/// Case-insensitive substring match over the bank, keeping bank order and
/// returning at most `limit` entries.
pub fn suggest<'a>(
    bank: &'a [CommunityPrompt],
    query: &str,
    limit: usize,
) -> Vec<&'a CommunityPrompt> {
    let query = query.trim().to_lowercase();
    if query.len() < MIN_QUERY_LEN {
        return vec![];
    }

    bank.iter()
        .filter(|p| {
            p.prompt_text.to_lowercase().contains(&query)
                || p.title.to_lowercase().contains(&query)
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptbank_core::seed;

    #[test]
    fn short_queries_yield_nothing() {
        let bank = seed::community_prompts();
        assert!(suggest(&bank, "ex", 5).is_empty());
        assert!(suggest(&bank, "  e  ", 5).is_empty());
    }

    #[test]
    fn matches_title_and_text_case_insensitively() {
        let bank = seed::community_prompts();
        let by_title = suggest(&bank, "REVISION COACH", 5);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "c3");

        let by_text = suggest(&bank, "younger student", 5);
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].id, "c1");
    }

    #[test]
    fn limit_caps_results() {
        let bank = seed::community_prompts();
        // "you" appears in several seed prompts
        let hits = suggest(&bank, "you", 2);
        assert_eq!(hits.len(), 2);
    }
}
