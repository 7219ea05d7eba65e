use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_repos: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    pub most_used_languages: Vec<LanguageUsage>,
    pub last_updated: DateTime<Utc>,
}

/// Number of repositories whose primary language is `language`.
///
/// `percentage` is relative to repositories that declare a language at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageUsage {
    pub language: String,
    pub count: u32,
    pub percentage: u32,
}
