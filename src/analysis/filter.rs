use crate::models::RepositorySummary;

/// Whether a repository belongs in the project grid of `account`.
///
/// Forks, archived and empty repositories are dropped, as are GitHub Pages
/// sites (`*.github.io`) and the profile README repository, which shares the
/// account's name.
pub fn is_showcase_repository(repo: &RepositorySummary, account: &str) -> bool {
    !repo.fork
        && !repo.archived
        && repo.size > 0
        && !repo.name.contains(".github.io")
        && repo.name != account
}

pub fn showcase_repositories(
    repos: Vec<RepositorySummary>,
    account: &str,
) -> Vec<RepositorySummary> {
    repos
        .into_iter()
        .filter(|repo| is_showcase_repository(repo, account))
        .collect()
}

/// The `limit` repositories with the most stars. Equal counts keep their input order.
pub fn most_starred(mut repos: Vec<RepositorySummary>, limit: usize) -> Vec<RepositorySummary> {
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos.truncate(limit);
    repos
}

/// The `limit` most recently updated repositories.
pub fn most_recent(mut repos: Vec<RepositorySummary>, limit: usize) -> Vec<RepositorySummary> {
    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repos.truncate(limit);
    repos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::repo;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_excludes_non_showcase_repositories() {
        let mut fork = repo(1, "forked");
        fork.fork = true;
        let mut archived = repo(2, "old");
        archived.archived = true;
        let mut empty = repo(3, "placeholder");
        empty.size = 0;
        let pages = repo(4, "octocat.github.io");
        let profile_readme = repo(5, "octocat");
        let kept = repo(6, "hello-world");

        let repos = vec![fork, archived, empty, pages, profile_readme, kept];
        let names: Vec<_> = showcase_repositories(repos, "octocat")
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["hello-world"]);
    }

    #[test]
    fn test_account_match_is_exact() {
        assert!(is_showcase_repository(&repo(1, "octocat-tools"), "octocat"));
        assert!(is_showcase_repository(&repo(2, "Octocat"), "octocat"));
        assert!(!is_showcase_repository(&repo(3, "docs.github.io-mirror"), "octocat"));
    }

    #[test]
    fn test_most_starred_is_stable() {
        let mut a = repo(1, "a");
        a.stargazers_count = 5;
        let mut b = repo(2, "b");
        b.stargazers_count = 10;
        let mut c = repo(3, "c");
        c.stargazers_count = 5;
        let d = repo(4, "d");

        let names: Vec<_> = most_starred(vec![a, b, c, d], 3)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_most_recent() {
        let mut older = repo(1, "older");
        older.updated_at = Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap();
        let mut newest = repo(2, "newest");
        newest.updated_at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut middle = repo(3, "middle");
        middle.updated_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let names: Vec<_> = most_recent(vec![older, newest, middle], 2)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["newest", "middle"]);
    }
}
