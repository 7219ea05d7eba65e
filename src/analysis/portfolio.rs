use chrono::Utc;

use crate::analysis::filter::{most_recent, most_starred, showcase_repositories};
use crate::analysis::stats;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::{GitHubApi, GitHubClient};
use crate::models::{
    AggregateStats, LanguageBreakdown, RepoListOptions, RepoSort, RepositorySummary,
    SortDirection, UserProfile,
};

/// Default size of the "popular" and "recent" project selections.
pub const DEFAULT_SELECTION_LIMIT: usize = 6;

/// Read-only view of one GitHub account, shaped for a portfolio page.
///
/// Every call fetches fresh data; nothing is cached between calls.
pub struct Portfolio {
    github: Box<dyn GitHubApi>,
    default_account: Option<String>,
}

impl Portfolio {
    pub fn new(github: impl GitHubApi + 'static, config: &Config) -> Self {
        Self {
            github: Box::new(github),
            default_account: config.github_username.clone(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(GitHubClient::new(config)?, config))
    }

    fn resolve_account<'a>(&'a self, account: Option<&'a str>) -> Result<&'a str> {
        account
            .filter(|a| !a.trim().is_empty())
            .or(self.default_account.as_deref())
            .ok_or_else(|| Error::Config("GitHub username not provided".to_string()))
    }

    pub async fn get_profile(&self, account: Option<&str>) -> Result<UserProfile> {
        let account = self.resolve_account(account)?;
        self.github.get_user(account).await
    }

    /// Repositories worth showing for `account`, in the order GitHub returned them.
    ///
    /// Only a single page is fetched, so at most 100 repositories are
    /// considered; anything beyond that page is not seen at all.
    pub async fn list_repositories(
        &self,
        account: Option<&str>,
        options: &RepoListOptions,
    ) -> Result<Vec<RepositorySummary>> {
        let account = self.resolve_account(account)?;
        let repos = self.github.get_user_repos(account, options).await?;
        let fetched = repos.len();

        let repos = showcase_repositories(repos, account);
        tracing::debug!("Kept {} of {} repositories for {}", repos.len(), fetched, account);
        Ok(repos)
    }

    /// Totals and language ranking over the showcased repositories.
    ///
    /// The profile is fetched alongside the listing only to confirm the
    /// account exists; either request failing fails the whole call.
    pub async fn compute_stats(&self, account: Option<&str>) -> Result<AggregateStats> {
        let account = self.resolve_account(account)?;
        let options = RepoListOptions::default();

        let (_profile, repos) = futures::try_join!(
            self.get_profile(Some(account)),
            self.list_repositories(Some(account), &options)
        )?;

        let stats = stats::aggregate(&repos, Utc::now());
        tracing::info!(
            "Computed stats for {}: {} repositories, {} stars",
            account,
            stats.total_repos,
            stats.total_stars
        );
        Ok(stats)
    }

    /// README text of `owner/repo`, or `None` if it cannot be fetched or decoded.
    ///
    /// Never fails: the README is decoration, so every error is logged and
    /// turned into `None`.
    pub async fn get_readme(&self, owner: &str, repo: &str) -> Option<String> {
        let readme = match self.github.get_readme(owner, repo).await {
            Ok(readme) => readme,
            Err(err) if err.is_not_found() => {
                tracing::debug!("No README for {}/{}", owner, repo);
                return None;
            }
            Err(err) => {
                match err.status() {
                    Some(status) => tracing::warn!(
                        "README request for {}/{} answered {}: {}",
                        owner,
                        repo,
                        status,
                        err
                    ),
                    None => tracing::warn!("Failed to fetch README for {}/{}: {}", owner, repo, err),
                }
                return None;
            }
        };

        match readme.text() {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!("Failed to decode README for {}/{}: {}", owner, repo, err);
                None
            }
        }
    }

    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositorySummary> {
        self.github.get_repository(owner, repo).await
    }

    pub async fn get_repository_languages(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<LanguageBreakdown>> {
        let languages = self.github.get_repo_languages(owner, repo).await?;
        Ok(stats::language_breakdown(languages))
    }

    /// Whether the configured token is accepted by GitHub.
    pub async fn validate_token(&self) -> bool {
        match self.github.get_authenticated_user().await {
            Ok(user) => {
                tracing::debug!("Token belongs to {}", user.login);
                true
            }
            Err(err) => {
                tracing::warn!("Token validation failed: {}", err);
                false
            }
        }
    }

    pub async fn popular_repositories(
        &self,
        account: Option<&str>,
        limit: usize,
    ) -> Result<Vec<RepositorySummary>> {
        let repos = self
            .list_repositories(account, &RepoListOptions::default())
            .await?;
        Ok(most_starred(repos, limit))
    }

    pub async fn recent_repositories(
        &self,
        account: Option<&str>,
        limit: usize,
    ) -> Result<Vec<RepositorySummary>> {
        let options = RepoListOptions::sorted(RepoSort::Updated, SortDirection::Desc);
        let repos = self.list_repositories(account, &options).await?;
        Ok(most_recent(repos, limit))
    }
}
