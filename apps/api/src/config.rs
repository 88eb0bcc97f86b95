use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::vocabulary::VocabularySet;

/// Application configuration loaded from environment variables.
/// Every variable is optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file replacing the built-in skill vocabularies.
    pub vocabulary_path: Option<PathBuf>,
    /// Empty means permissive CORS.
    pub cors_allowed_origins: Vec<String>,
    /// Fold `user_skills` / `job_requirements` into match scoring. Off by default.
    pub match_use_skill_hints: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_port(std::env::var("PORT").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            vocabulary_path: std::env::var("SKILL_VOCABULARY_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            cors_allowed_origins: parse_origins(std::env::var("CORS_ALLOWED_ORIGINS").ok()),
            match_use_skill_hints: parse_flag(
                "MATCH_USE_SKILL_HINTS",
                std::env::var("MATCH_USE_SKILL_HINTS").ok(),
            )?,
        })
    }

    pub fn load_vocabulary(&self) -> Result<VocabularySet> {
        match &self.vocabulary_path {
            Some(path) => VocabularySet::from_json_file(path)
                .with_context(|| format!("Failed to load skill vocabulary from {}", path.display())),
            None => Ok(VocabularySet::default()),
        }
    }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    raw.unwrap_or_else(|| "8000".to_string())
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

fn parse_flag(key: &str, raw: Option<String>) -> Result<bool> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => Ok(true),
        Some(v) if v == "0" || v.eq_ignore_ascii_case("false") => Ok(false),
        Some(v) => anyhow::bail!("{key} must be true/false/1/0, got '{v}'"),
    }
}

fn parse_origins(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
