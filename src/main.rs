use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use folio::analysis::DEFAULT_SELECTION_LIMIT;
use folio::display::{format_number, language_color, truncate};
use folio::models::{
    AggregateStats, LanguageBreakdown, OwnershipScope, RepoListOptions, RepoSort,
    RepositorySummary, SortDirection, UserProfile,
};
use folio::{Config, Portfolio};

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Show the GitHub data behind a developer portfolio")]
struct Args {
    /// GitHub username (defaults to GITHUB_USERNAME)
    #[arg(short, long, global = true)]
    username: Option<String>,

    /// Output format (json, text)
    #[arg(short, long, default_value = "text", global = true)]
    format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Profile shown in the hero section
    Profile,
    /// Repositories shown in the project grid
    Repos {
        #[arg(long, default_value = "updated")]
        sort: RepoSort,
        #[arg(long, default_value = "desc")]
        direction: SortDirection,
        /// Page size, at most 100; only one page is fetched
        #[arg(long, default_value_t = 100)]
        per_page: u32,
        #[arg(long, default_value = "owner")]
        scope: OwnershipScope,
    },
    /// Star, fork and language totals
    Stats,
    /// Most starred repositories
    Popular {
        #[arg(short, long, default_value_t = DEFAULT_SELECTION_LIMIT)]
        limit: usize,
    },
    /// Most recently updated repositories
    Recent {
        #[arg(short, long, default_value_t = DEFAULT_SELECTION_LIMIT)]
        limit: usize,
    },
    /// A single repository
    Repo { owner: String, name: String },
    /// Language byte breakdown of a repository
    Languages { owner: String, name: String },
    /// README of a repository
    Readme { owner: String, name: String },
    /// Check that GITHUB_TOKEN is accepted
    Validate,
    /// Hero, stats and projects, each rendered on its own
    Overview,
}

#[derive(Serialize)]
struct Overview {
    profile: Option<UserProfile>,
    stats: Option<AggregateStats>,
    projects: Option<Vec<RepositorySummary>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("folio=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env();
    tracing::debug!("Loaded configuration: {:?}", config);

    let portfolio = Portfolio::from_config(&config)?;
    let account = args.username.as_deref();
    let json = args.format == "json";

    match &args.command {
        Command::Profile => {
            let profile = with_spinner("Fetching profile", portfolio.get_profile(account)).await?;
            emit(&profile, json, format_profile)?;
        }
        Command::Repos {
            sort,
            direction,
            per_page,
            scope,
        } => {
            let options = RepoListOptions {
                sort: *sort,
                direction: *direction,
                per_page: *per_page,
                scope: *scope,
            };
            let repos = with_spinner(
                "Fetching repositories",
                portfolio.list_repositories(account, &options),
            )
            .await?;
            emit(&repos, json, |repos| format_repos(repos))?;
        }
        Command::Stats => {
            let stats = with_spinner("Computing stats", portfolio.compute_stats(account)).await?;
            emit(&stats, json, format_stats)?;
        }
        Command::Popular { limit } => {
            let repos = with_spinner(
                "Fetching repositories",
                portfolio.popular_repositories(account, *limit),
            )
            .await?;
            emit(&repos, json, |repos| format_repos(repos))?;
        }
        Command::Recent { limit } => {
            let repos = with_spinner(
                "Fetching repositories",
                portfolio.recent_repositories(account, *limit),
            )
            .await?;
            emit(&repos, json, |repos| format_repos(repos))?;
        }
        Command::Repo { owner, name } => {
            let repo = portfolio.get_repository(owner, name).await?;
            emit(&repo, json, |repo| format_repos(std::slice::from_ref(repo)))?;
        }
        Command::Languages { owner, name } => {
            let languages = portfolio.get_repository_languages(owner, name).await?;
            emit(&languages, json, |languages| format_languages(languages))?;
        }
        Command::Readme { owner, name } => {
            let readme = portfolio.get_readme(owner, name).await;
            emit(&readme, json, |readme| {
                readme
                    .clone()
                    .unwrap_or_else(|| "No README available".to_string())
            })?;
        }
        Command::Validate => {
            if !portfolio.validate_token().await {
                anyhow::bail!("GitHub token is not valid");
            }
            println!("GitHub token is valid");
        }
        Command::Overview => {
            let overview = with_spinner("Fetching portfolio", overview(&portfolio, account)).await;
            emit(&overview, json, format_overview)?;
        }
    }

    Ok(())
}

async fn with_spinner<F: std::future::Future>(message: &'static str, future: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = future.await;
    spinner.finish_and_clear();
    output
}

/// Each section fails on its own, so a broken stats call still shows the projects.
async fn overview(portfolio: &Portfolio, account: Option<&str>) -> Overview {
    let options = RepoListOptions::default();
    let (profile, stats, projects) = tokio::join!(
        portfolio.get_profile(account),
        portfolio.compute_stats(account),
        portfolio.list_repositories(account, &options),
    );

    Overview {
        profile: profile
            .map_err(|err| tracing::warn!("Profile section unavailable: {}", err))
            .ok(),
        stats: stats
            .map_err(|err| tracing::warn!("Stats section unavailable: {}", err))
            .ok(),
        projects: projects
            .map_err(|err| tracing::warn!("Projects section unavailable: {}", err))
            .ok(),
    }
}

fn emit<T: Serialize>(value: &T, json: bool, text: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
    let output = if json {
        serde_json::to_string_pretty(value)?
    } else {
        text(value)
    };
    println!("{}", output);
    Ok(())
}

fn format_profile(user: &UserProfile) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n=== {} ===\n\n", user.display_name()));
    if let Some(ref bio) = user.bio {
        output.push_str(&format!("{}\n\n", bio));
    }
    output.push_str(&format!("GitHub: {}\n", user.html_url));
    if let Some(ref location) = user.location {
        output.push_str(&format!("Location: {}\n", location));
    }
    if let Some(ref company) = user.company {
        output.push_str(&format!("Company: {}\n", company));
    }
    if let Some(website) = user.website() {
        output.push_str(&format!("Website: {}\n", website));
    }
    output.push_str(&format!(
        "Repositories: {}  Followers: {}  Following: {}\n",
        user.public_repos,
        format_number(user.followers as u64),
        format_number(user.following as u64)
    ));

    output
}

fn format_repos(repos: &[RepositorySummary]) -> String {
    if repos.is_empty() {
        return "No projects to show.".to_string();
    }

    let mut output = String::new();
    for repo in repos {
        output.push_str(&format!(
            "{}  ★ {}  ⑂ {}\n",
            repo.name,
            format_number(repo.stargazers_count as u64),
            format_number(repo.forks_count as u64)
        ));
        output.push_str(&format!(
            "  {}\n",
            truncate(
                repo.description.as_deref().unwrap_or("No description available"),
                100
            )
        ));
        if let Some(ref language) = repo.language {
            output.push_str(&format!("  {} ({})\n", language, language_color(language)));
        }
        if !repo.topics.is_empty() {
            let topics: Vec<_> = repo.topics.iter().take(4).map(String::as_str).collect();
            output.push_str(&format!("  Topics: {}\n", topics.join(", ")));
        }
        output.push_str(&format!("  {}\n", repo.html_url));
        if let Some(homepage) = repo.homepage.as_deref().filter(|h| !h.is_empty()) {
            output.push_str(&format!("  Demo: {}\n", homepage));
        }
    }
    output
}

fn format_stats(stats: &AggregateStats) -> String {
    let mut output = String::new();

    output.push_str(&format!("Public repositories: {}\n", stats.total_repos));
    output.push_str(&format!("Stars earned: {}\n", format_number(stats.total_stars)));
    output.push_str(&format!("Forks: {}\n", format_number(stats.total_forks)));

    if !stats.most_used_languages.is_empty() {
        output.push_str("\nMost used languages:\n");
        for usage in &stats.most_used_languages {
            output.push_str(&format!(
                "  {:<14} {:>3} repos  {:>3}%  {}\n",
                usage.language,
                usage.count,
                usage.percentage,
                language_color(&usage.language)
            ));
        }
    }

    output.push_str(&format!(
        "\nUpdated: {}\n",
        stats.last_updated.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output
}

fn format_languages(languages: &[LanguageBreakdown]) -> String {
    if languages.is_empty() {
        return "No languages detected.".to_string();
    }

    languages
        .iter()
        .map(|l| format!("{:<14} {:>10} bytes  {:>5.1}%", l.language, l.bytes, l.percentage))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_overview(overview: &Overview) -> String {
    let mut output = String::new();

    match overview.profile {
        Some(ref profile) => output.push_str(&format_profile(profile)),
        None => output.push_str("\n=== Portfolio ===\n\nProfile unavailable.\n"),
    }

    output.push_str("\n--- Stats ---\n");
    match overview.stats {
        Some(ref stats) => output.push_str(&format_stats(stats)),
        None => output.push_str("Statistics unavailable.\n"),
    }

    output.push_str("\n--- Projects ---\n");
    match overview.projects {
        Some(ref projects) => output.push_str(&format_repos(projects)),
        None => output.push_str(
            "Projects could not be loaded. Check the GitHub token configuration.\n",
        ),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo_body(id: u64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "full_name": format!("octocat/{}", name),
            "description": "A repository",
            "html_url": format!("https://github.com/octocat/{}", name),
            "homepage": null,
            "topics": [],
            "language": "Rust",
            "stargazers_count": 4,
            "forks_count": 1,
            "size": 64,
            "created_at": "2021-03-01T10:00:00Z",
            "updated_at": "2024-02-01T10:00:00Z",
            "pushed_at": "2024-02-01T10:00:00Z",
            "archived": false,
            "fork": false,
            "private": false,
            "owner": {
                "login": "octocat",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231",
                "html_url": "https://github.com/octocat"
            }
        })
    }

    #[tokio::test]
    async fn test_overview_sections_fail_independently() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([repo_body(1, "hello-world")])))
            .mount(&server)
            .await;

        let config = Config::new(Some("test-token".to_string()), Some("octocat".to_string()))
            .with_api_base_url(server.uri());
        let portfolio = Portfolio::from_config(&config).unwrap();

        let overview = overview(&portfolio, None).await;
        assert!(overview.profile.is_none());
        assert!(overview.stats.is_none());
        let projects = overview.projects.as_ref().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "hello-world");

        let text = format_overview(&overview);
        assert!(text.contains("Profile unavailable."));
        assert!(text.contains("Statistics unavailable."));
        assert!(text.contains("hello-world"));
        assert!(!text.contains("Projects could not be loaded"));
    }

    #[test]
    fn test_format_overview_without_projects() {
        let overview = Overview {
            profile: None,
            stats: None,
            projects: None,
        };

        let text = format_overview(&overview);
        assert!(text.contains("Profile unavailable."));
        assert!(text.contains("Statistics unavailable."));
        assert!(text.contains("Projects could not be loaded"));
    }
}
