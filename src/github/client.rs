use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::api::GitHubApi;
use crate::models::{ReadmeContent, RepoListOptions, RepositorySummary, UserProfile};

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github.v3+json";
const API_VERSION: &str = "2022-11-28";

pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(ACCEPT_GITHUB_JSON),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static(API_VERSION),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)?,
        );
        headers.insert(
            header::CACHE_CONTROL,
            header::HeaderValue::from_str(&format!("max-age={}", config.cache_max_age))?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let base_url = Url::parse(&config.api_base_url).map_err(|err| {
            Error::Config(format!("invalid API URL {}: {}", config.api_base_url, err))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "invalid API URL {}",
                config.api_base_url
            )));
        }

        Ok(Self {
            client,
            token: config.github_token.clone(),
            base_url,
        })
    }

    /// Base URL joined with `segments`, each percent-encoded on its own so a
    /// `/` or `?` inside a name stays part of that segment.
    fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET the endpoint at `segments` (such as `["users", "octocat"]`) and
    /// decode the JSON body.
    ///
    /// Fails with [`Error::Config`] before touching the network when no token
    /// is configured.
    pub async fn fetch_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.fetch_json_with_query(segments, &[]).await
    }

    pub async fn fetch_json_with_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| Error::Config("GITHUB_TOKEN is not configured".to_string()))?;

        let url = self.endpoint_url(segments);
        let endpoint = url.path().to_string();
        tracing::debug!("Fetching: {}", url);

        let mut request = self.client.get(url).bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        log_quota(&response);

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered {}", endpoint, status);
            return Err(status_error(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn status_error(status: StatusCode) -> Error {
    match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized,
        StatusCode::FORBIDDEN => Error::RateLimited,
        other => Error::Http {
            status: other.as_u16(),
        },
    }
}

fn log_quota(response: &Response) {
    if let Some(remaining) = response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
    {
        tracing::debug!("GitHub rate limit remaining: {}", remaining);
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_user(&self, login: &str) -> Result<UserProfile> {
        tracing::info!("Fetching user: {}", login);
        self.fetch_json(&["users", login]).await
    }

    async fn get_user_repos(
        &self,
        login: &str,
        options: &RepoListOptions,
    ) -> Result<Vec<RepositorySummary>> {
        tracing::info!("Fetching repositories for: {}", login);
        self.fetch_json_with_query(&["users", login, "repos"], &options.to_query())
            .await
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositorySummary> {
        self.fetch_json(&["repos", owner, repo]).await
    }

    async fn get_repo_languages(&self, owner: &str, repo: &str) -> Result<HashMap<String, u64>> {
        self.fetch_json(&["repos", owner, repo, "languages"])
            .await
    }

    async fn get_readme(&self, owner: &str, repo: &str) -> Result<ReadmeContent> {
        self.fetch_json(&["repos", owner, repo, "readme"])
            .await
    }

    async fn get_authenticated_user(&self) -> Result<UserProfile> {
        self.fetch_json(&["user"]).await
    }
}
