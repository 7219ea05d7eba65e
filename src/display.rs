//! Small formatting helpers for rendering portfolio data as text.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Colour shown for languages missing from the table.
pub const DEFAULT_LANGUAGE_COLOR: &str = "#6b7280";

/// Compact count: `1234` becomes `1k`, `2_500_000` becomes `2m`. Truncates, never rounds up.
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{}m", num / 1_000_000)
    } else if num >= 1_000 {
        format!("{}k", num / 1_000)
    } else {
        num.to_string()
    }
}

/// Hex colour used for a language badge.
pub fn language_color(language: &str) -> &'static str {
    static COLORS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    let colors = COLORS.get_or_init(|| {
        [
            ("JavaScript", "#f1e05a"),
            ("TypeScript", "#2b7489"),
            ("Python", "#3572A5"),
            ("Java", "#b07219"),
            ("C++", "#f34b7d"),
            ("C#", "#239120"),
            ("PHP", "#4F5D95"),
            ("Ruby", "#701516"),
            ("Go", "#00ADD8"),
            ("Rust", "#dea584"),
            ("Swift", "#ffac45"),
            ("Kotlin", "#F18E33"),
            ("Dart", "#00B4AB"),
            ("HTML", "#e34c26"),
            ("CSS", "#1572B6"),
            ("SCSS", "#c6538c"),
            ("Vue", "#4FC08D"),
            ("Svelte", "#ff3e00"),
            ("React", "#61DAFB"),
            ("Angular", "#DD0031"),
        ]
        .into_iter()
        .collect()
    });

    colors.get(language).copied().unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

/// Cuts `text` to at most `max_chars` characters, appending `...` when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}
