use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::models::{AggregateStats, LanguageBreakdown, LanguageUsage, RepositorySummary};

/// Number of entries kept in `AggregateStats::most_used_languages`.
pub const TOP_LANGUAGES: usize = 10;

pub fn aggregate(repos: &[RepositorySummary], computed_at: DateTime<Utc>) -> AggregateStats {
    let total_stars = repos.iter().map(|r| r.stargazers_count as u64).sum();
    let total_forks = repos.iter().map(|r| r.forks_count as u64).sum();

    AggregateStats {
        total_repos: repos.len(),
        total_stars,
        total_forks,
        most_used_languages: most_used_languages(repos, TOP_LANGUAGES),
        last_updated: computed_at,
    }
}

/// Ranks primary languages by how many repositories use them.
///
/// Repositories without a language are ignored entirely, including in the
/// percentage denominator. Percentages are rounded half away from zero, each
/// on its own, so they need not add up to 100. Languages with equal counts
/// stay in the order they were first seen.
pub fn most_used_languages(repos: &[RepositorySummary], limit: usize) -> Vec<LanguageUsage> {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for language in repos
        .iter()
        .filter_map(|r| r.language.as_deref())
        .filter(|l| !l.is_empty())
    {
        match positions.get(language).copied() {
            Some(index) => counts[index].1 += 1,
            None => {
                positions.insert(language, counts.len());
                counts.push((language, 1));
            }
        }
    }

    let total: u32 = counts.iter().map(|(_, count)| count).sum();

    let mut usage: Vec<LanguageUsage> = counts
        .into_iter()
        .map(|(language, count)| LanguageUsage {
            language: language.to_string(),
            count,
            percentage: rounded_percentage(count as f64, total as f64) as u32,
        })
        .collect();

    usage.sort_by(|a, b| b.count.cmp(&a.count));
    usage.truncate(limit);
    usage
}

/// Byte share of each language in a single repository, largest first.
pub fn language_breakdown(languages: HashMap<String, u64>) -> Vec<LanguageBreakdown> {
    let total: u64 = languages.values().sum();

    let mut breakdown: Vec<LanguageBreakdown> = languages
        .into_iter()
        .map(|(language, bytes)| LanguageBreakdown {
            percentage: percentage(bytes as f64, total as f64) as f32,
            language,
            bytes,
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.bytes
            .cmp(&a.bytes)
            .then_with(|| a.language.cmp(&b.language))
    });
    breakdown
}

fn percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    part / total * 100.0
}

fn rounded_percentage(part: f64, total: f64) -> f64 {
    percentage(part, total).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{repo, repo_with_language};

    #[test]
    fn test_single_language_scenario() {
        let mut typescript = repo_with_language(1, "site", "TypeScript");
        typescript.stargazers_count = 10;
        typescript.forks_count = 3;

        let now = Utc::now();
        let stats = aggregate(&[typescript], now);
        assert_eq!(stats.total_repos, 1);
        assert_eq!(stats.total_stars, 10);
        assert_eq!(stats.total_forks, 3);
        assert_eq!(
            stats.most_used_languages,
            vec![LanguageUsage {
                language: "TypeScript".to_string(),
                count: 1,
                percentage: 100,
            }]
        );
        assert_eq!(stats.last_updated, now);
    }

    #[test]
    fn test_repos_without_language_are_ignored() {
        let repos = vec![
            repo_with_language(1, "a", "Rust"),
            repo(2, "b"),
            repo(3, "c"),
            repo_with_language(4, "d", "Go"),
        ];
        let usage = most_used_languages(&repos, TOP_LANGUAGES);
        assert_eq!(usage.len(), 2);
        assert!(usage.iter().all(|u| u.percentage == 50));
        assert_eq!(usage.iter().map(|u| u.count).sum::<u32>(), 2);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let repos = vec![
            repo_with_language(1, "a", "Go"),
            repo_with_language(2, "b", "Rust"),
            repo_with_language(3, "c", "Python"),
            repo_with_language(4, "d", "Rust"),
            repo_with_language(5, "e", "Python"),
        ];
        let order: Vec<_> = most_used_languages(&repos, TOP_LANGUAGES)
            .into_iter()
            .map(|u| u.language)
            .collect();
        assert_eq!(order, vec!["Rust", "Python", "Go"]);
    }

    #[test]
    fn test_rounding_is_independent() {
        let repos = vec![
            repo_with_language(1, "a", "Rust"),
            repo_with_language(2, "b", "Go"),
            repo_with_language(3, "c", "C"),
        ];
        let usage = most_used_languages(&repos, TOP_LANGUAGES);
        assert!(usage.iter().all(|u| u.percentage == 33));
        assert_eq!(usage.iter().map(|u| u.percentage).sum::<u32>(), 99);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        let mut repos = vec![repo_with_language(1, "a", "Rust")];
        for id in 2..=8 {
            repos.push(repo_with_language(id, "b", "Go"));
        }
        let usage = most_used_languages(&repos, TOP_LANGUAGES);
        let rust = usage.iter().find(|u| u.language == "Rust").unwrap();
        assert_eq!(rust.percentage, 13);
        let go = usage.iter().find(|u| u.language == "Go").unwrap();
        assert_eq!(go.percentage, 88);
    }

    #[test]
    fn test_keeps_top_ten() {
        let mut repos = Vec::new();
        for (i, language) in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"]
            .iter()
            .enumerate()
        {
            repos.push(repo_with_language(i as u64, "x", language));
        }
        repos.push(repo_with_language(100, "y", "L"));

        let usage = most_used_languages(&repos, TOP_LANGUAGES);
        assert_eq!(usage.len(), 10);
        assert_eq!(usage[0].language, "L");
        assert_eq!(usage[0].count, 2);
        assert!(usage.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_empty_list() {
        let stats = aggregate(&[], Utc::now());
        assert_eq!(stats.total_repos, 0);
        assert_eq!(stats.total_stars, 0);
        assert!(stats.most_used_languages.is_empty());
    }

    #[test]
    fn test_language_breakdown() {
        let languages: HashMap<String, u64> = [
            ("Shell".to_string(), 250),
            ("Rust".to_string(), 750),
            ("Nix".to_string(), 0),
        ]
        .into_iter()
        .collect();

        let breakdown = language_breakdown(languages);
        assert_eq!(breakdown[0].language, "Rust");
        assert_eq!(breakdown[0].percentage, 75.0);
        assert_eq!(breakdown[1].language, "Shell");
        assert_eq!(breakdown[1].percentage, 25.0);
        assert_eq!(breakdown[2].bytes, 0);
        assert!(language_breakdown(HashMap::new()).is_empty());
    }
}
