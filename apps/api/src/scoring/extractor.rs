//! Keyword / skill extraction by case-insensitive substring scan.
//!
//! Matching is deliberately naive: "java" is found inside "javascript", "ai"
//! inside "maintain". Downstream scores depend on this behavior.

use std::collections::BTreeSet;

use crate::scoring::vocabulary::Vocabulary;

/// Unordered set of lower-cased vocabulary terms found in a text.
pub type SkillSet = BTreeSet<String>;

/// Returns the lower-cased vocabulary terms occurring anywhere in `text`.
pub fn extract_keywords(text: &str, vocabulary: &Vocabulary) -> SkillSet {
    let haystack = text.to_lowercase();
    vocabulary
        .entries()
        .filter(|(_, needle)| haystack.contains(needle))
        .map(|(_, needle)| needle.to_string())
        .collect()
}

/// Returns the display-cased vocabulary terms occurring in `text`, in
/// vocabulary order.
pub fn extract_skills(text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let haystack = text.to_lowercase();
    vocabulary
        .entries()
        .filter(|(_, needle)| haystack.contains(needle))
        .map(|(term, _)| term.to_string())
        .collect()
}

/// Adds caller-supplied skill hints to `set`, keeping only vocabulary members.
pub fn merge_hints(set: &mut SkillSet, hints: &[String], vocabulary: &Vocabulary) {
    for hint in hints {
        if let Some(term) = vocabulary.normalized_member(hint) {
            set.insert(term.to_string());
        }
    }
}
