use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of one repository from `/users/{login}/repos` or `/repos/{owner}/{repo}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    /// Size in kilobytes; zero for repositories with no content.
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub archived: bool,
    pub fork: bool,
    pub private: bool,
    pub owner: RepositoryOwner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// Body of `/repos/{owner}/{repo}/readme`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeContent {
    pub content: String,
    pub encoding: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageBreakdown {
    pub language: String,
    pub bytes: u64,
    pub percentage: f32,
}

impl ReadmeContent {
    /// README text. Base64 payloads are decoded (GitHub wraps them at 60
    /// columns, so whitespace is dropped first); anything else is returned as is.
    pub fn text(&self) -> Result<String, base64::DecodeError> {
        if !self.encoding.eq_ignore_ascii_case("base64") {
            return Ok(self.content.clone());
        }

        let compact: String = self
            .content
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let bytes = STANDARD.decode(compact)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
