//! Skill vocabularies — the fixed term lists the extractor scans text against.
//!
//! Two lists are used: a lower-case *matching* vocabulary for CV ↔ JD overlap,
//! and a display-cased *CV* vocabulary whose order drives the analyzer output.
//! Both are plain values owned by the engine, so tests (and deployments via
//! `SKILL_VOCABULARY_PATH`) can substitute their own.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_MATCHING_TERMS: &[&str] = &[
    "javascript",
    "python",
    "react",
    "node.js",
    "typescript",
    "java",
    "c#",
    "sql",
    "html",
    "css",
    "git",
    "aws",
    "docker",
];

const DEFAULT_CV_TERMS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "TypeScript",
    "Java",
    "C#",
    "SQL",
    "AWS",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "AI",
    "Data Analysis",
];

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} vocabulary must contain at least one term")]
    Empty(&'static str),

    #[error("{0} vocabulary contains a blank term")]
    BlankTerm(&'static str),
}

/// An ordered list of skill terms.
///
/// `terms` keeps the display casing; `needles` holds the lower-cased form used
/// for the case-insensitive substring test. Order is significant: extraction
/// results follow vocabulary order, not input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    needles: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        let needles = terms.iter().map(|t| t.to_lowercase()).collect();
        Self { terms, needles }
    }

    pub fn default_matching() -> Self {
        Self::new(DEFAULT_MATCHING_TERMS.iter().copied())
    }

    pub fn default_cv() -> Self {
        Self::new(DEFAULT_CV_TERMS.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates `(display_term, lower_cased_term)` pairs in vocabulary order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms
            .iter()
            .map(String::as_str)
            .zip(self.needles.iter().map(String::as_str))
    }

    /// Case-insensitive exact membership, used for caller-supplied skill hints.
    pub fn normalized_member(&self, candidate: &str) -> Option<&str> {
        let candidate = candidate.trim().to_lowercase();
        self.needles
            .iter()
            .find(|n| **n == candidate)
            .map(String::as_str)
    }

    fn validate(&self, label: &'static str) -> Result<(), VocabularyError> {
        if self.terms.is_empty() {
            return Err(VocabularyError::Empty(label));
        }
        if self.terms.iter().any(|t| t.trim().is_empty()) {
            return Err(VocabularyError::BlankTerm(label));
        }
        Ok(())
    }
}

/// The pair of vocabularies the engine is configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularySet {
    pub matching: Vocabulary,
    pub cv: Vocabulary,
}

impl Default for VocabularySet {
    fn default() -> Self {
        Self {
            matching: Vocabulary::default_matching(),
            cv: Vocabulary::default_cv(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct VocabularyFile {
    matching: Vec<String>,
    cv: Vec<String>,
}

impl VocabularySet {
    /// Parses `{"matching": [...], "cv": [...]}`. Matching terms are lower-cased.
    pub fn from_json_str(raw: &str) -> Result<Self, VocabularyError> {
        let file: VocabularyFile = serde_json::from_str(raw)?;
        let set = Self {
            matching: Vocabulary::new(
                file.matching
                    .into_iter()
                    .map(|t| t.trim().to_lowercase()),
            ),
            cv: Vocabulary::new(file.cv.into_iter().map(|t| t.trim().to_string())),
        };
        set.matching.validate("matching")?;
        set.cv.validate("cv")?;
        Ok(set)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, VocabularyError> {
        let raw = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_vocabulary_sizes() {
        let set = VocabularySet::default();
        assert_eq!(set.matching.len(), 13);
        assert_eq!(set.cv.len(), 14);
    }

    #[test]
    fn test_matching_defaults_are_lowercase() {
        let vocab = Vocabulary::default_matching();
        for (term, needle) in vocab.entries() {
            assert_eq!(term, needle);
        }
    }

    #[test]
    fn test_cv_defaults_keep_display_casing_and_order() {
        let vocab = Vocabulary::default_cv();
        let terms: Vec<&str> = vocab.entries().map(|(t, _)| t).collect();
        assert_eq!(terms[0], "JavaScript");
        assert_eq!(terms[13], "Data Analysis");
        let needles: Vec<&str> = vocab.entries().map(|(_, n)| n).collect();
        assert_eq!(needles[11], "machine learning");
    }

    #[test]
    fn test_normalized_member_trims_and_lowercases() {
        let vocab = Vocabulary::default_matching();
        assert_eq!(vocab.normalized_member("  Python "), Some("python"));
        assert_eq!(vocab.normalized_member("Node.JS"), Some("node.js"));
        assert_eq!(vocab.normalized_member("rust"), None);
    }

    #[test]
    fn test_from_json_str_lowercases_matching_terms() {
        let set =
            VocabularySet::from_json_str(r#"{"matching": ["Rust", " Go "], "cv": ["Rust"]}"#)
                .unwrap();
        let needles: Vec<&str> = set.matching.entries().map(|(t, _)| t).collect();
        assert_eq!(needles, vec!["rust", "go"]);
    }

    #[test]
    fn test_from_json_str_rejects_empty_list() {
        let err = VocabularySet::from_json_str(r#"{"matching": [], "cv": ["Rust"]}"#).unwrap_err();
        assert!(matches!(err, VocabularyError::Empty("matching")));
    }

    #[test]
    fn test_from_json_str_rejects_blank_term() {
        let err =
            VocabularySet::from_json_str(r#"{"matching": ["rust"], "cv": ["Rust", "  "]}"#)
                .unwrap_err();
        assert!(matches!(err, VocabularyError::BlankTerm("cv")));
    }

    #[test]
    fn test_from_json_str_rejects_malformed_json() {
        let err = VocabularySet::from_json_str("not json").unwrap_err();
        assert!(matches!(err, VocabularyError::Parse(_)));
    }

    #[test]
    fn test_from_json_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"matching": ["kotlin"], "cv": ["Kotlin", "Swift"]}}"#).unwrap();

        let set = VocabularySet::from_json_file(file.path()).unwrap();
        assert_eq!(set.matching.len(), 1);
        assert_eq!(set.cv.len(), 2);
    }

    #[test]
    fn test_from_json_file_missing_path() {
        let err = VocabularySet::from_json_file(Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
    }
}
