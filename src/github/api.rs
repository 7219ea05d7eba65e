use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::Result;
use crate::models::{ReadmeContent, RepoListOptions, RepositorySummary, UserProfile};

/// The GitHub REST endpoints the portfolio reads from.
///
/// Implementations must not retry and must not swallow errors.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn get_user(&self, login: &str) -> Result<UserProfile>;

    /// One page of `/users/{login}/repos`, unfiltered, in the order GitHub returns it.
    async fn get_user_repos(
        &self,
        login: &str,
        options: &RepoListOptions,
    ) -> Result<Vec<RepositorySummary>>;

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositorySummary>;

    /// Bytes of code per language.
    async fn get_repo_languages(&self, owner: &str, repo: &str) -> Result<HashMap<String, u64>>;

    async fn get_readme(&self, owner: &str, repo: &str) -> Result<ReadmeContent>;

    /// `/user`, the account the credential belongs to.
    async fn get_authenticated_user(&self) -> Result<UserProfile>;
}
