//! Fixtures shared by the unit tests.

use serde_json::{json, Value};

use crate::models::{RepositorySummary, UserProfile};

pub(crate) fn user_json(login: &str) -> Value {
    json!({
        "login": login,
        "name": "The Octocat",
        "bio": "Builds things.",
        "avatar_url": format!("https://avatars.githubusercontent.com/{}", login),
        "html_url": format!("https://github.com/{}", login),
        "blog": "",
        "location": "San Francisco",
        "email": null,
        "company": "@github",
        "public_repos": 8,
        "followers": 100,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z"
    })
}

/// A repository that passes every showcase filter: not a fork, not archived,
/// non-empty, no declared language, no stars.
pub(crate) fn repo_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("octocat/{}", name),
        "description": null,
        "html_url": format!("https://github.com/octocat/{}", name),
        "homepage": null,
        "topics": [],
        "language": null,
        "stargazers_count": 0,
        "forks_count": 0,
        "size": 42,
        "created_at": "2020-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
        "pushed_at": "2024-01-01T00:00:00Z",
        "archived": false,
        "fork": false,
        "private": false,
        "owner": {
            "login": "octocat",
            "avatar_url": "https://avatars.githubusercontent.com/octocat",
            "html_url": "https://github.com/octocat"
        }
    })
}

pub(crate) fn user(login: &str) -> UserProfile {
    serde_json::from_value(user_json(login)).unwrap()
}

pub(crate) fn repo(id: u64, name: &str) -> RepositorySummary {
    serde_json::from_value(repo_json(id, name)).unwrap()
}

pub(crate) fn repo_with_language(id: u64, name: &str, language: &str) -> RepositorySummary {
    let mut repo = repo(id, name);
    repo.language = Some(language.to_string());
    repo
}
