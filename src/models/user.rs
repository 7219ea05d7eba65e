use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile of a GitHub account, as returned by `/users/{login}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub blog: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub company: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Name to greet the visitor with: the display name, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.login)
    }

    /// Personal site, if one is set. GitHub reports an unset blog as `""`.
    pub fn website(&self) -> Option<&str> {
        self.blog.as_deref().filter(|blog| !blog.trim().is_empty())
    }
}
