//! Commit categorization, pattern mining, and recommendations for the
//! git-insight pipeline.
//!
//! The categorizer is a fixed, ordered predicate list evaluated per changed
//! file; extension checks come before the `test`/`spec` substring check, so
//! `utils.test.js` lands in JavaScript/TypeScript and only extension-less
//! matches reach the Tests bucket. Mining and recommendations run over the
//! whole selected commit set.

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::results::CommitRecord;

static CONVENTIONAL_COMMIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(feat|fix|docs|style|refactor|test|chore)(\(.+\))?: .+").unwrap());

/// One entry in the ordered category predicate list.
pub struct CategoryRule {
    /// Category label emitted for matching files
    pub category: &'static str,
    /// Predicate over the changed-file path
    pub matches: fn(&str) -> bool,
}

/// The category table, first match wins, catch-all last.
pub static CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "JavaScript/TypeScript",
        matches: |f| {
            f.ends_with(".js") || f.ends_with(".ts") || f.ends_with(".jsx") || f.ends_with(".tsx")
        },
    },
    CategoryRule {
        category: "Python",
        matches: |f| f.ends_with(".py"),
    },
    CategoryRule {
        category: "Styles",
        matches: |f| f.ends_with(".css") || f.ends_with(".scss") || f.ends_with(".sass"),
    },
    CategoryRule {
        category: "HTML",
        matches: |f| f.ends_with(".html"),
    },
    CategoryRule {
        category: "Documentation",
        matches: |f| f.ends_with(".md") || f.ends_with(".txt"),
    },
    CategoryRule {
        category: "Dependencies",
        matches: |f| {
            f.contains("package.json") || f.contains("yarn.lock") || f.contains("requirements.txt")
        },
    },
    CategoryRule {
        category: "Tests",
        matches: |f| f.contains("test") || f.contains("spec"),
    },
    CategoryRule {
        category: "Config/Other",
        matches: |_| true,
    },
];

/// Bucket a commit's changed files into semantic categories, deduplicated in
/// first-seen order.
pub fn categorize_files(files: &[String]) -> Vec<String> {
    let mut categories: IndexSet<&'static str> = IndexSet::new();

    for file in files {
        for rule in CATEGORY_RULES {
            if (rule.matches)(file) {
                categories.insert(rule.category);
                break;
            }
        }
    }

    categories.into_iter().map(String::from).collect()
}

/// Build a commit summary: first message line, plus the touched categories
/// when any files are known.
pub fn summarize_commit(message: &str, files: &[String]) -> String {
    let categories = categorize_files(files);
    let mut summary = message.split('\n').next().unwrap_or_default().to_string();

    if !categories.is_empty() {
        summary.push_str(&format!(" (Modified: {})", categories.join(", ")));
    }

    summary
}

/// Detect recurring structural patterns across a commit set.
pub fn mine_patterns(commits: &[CommitRecord]) -> Vec<String> {
    let mut patterns = Vec::new();

    if commits.len() > 5 {
        patterns.push("High commit frequency - active development".to_string());
    }

    if commits
        .iter()
        .any(|commit| CONVENTIONAL_COMMIT.is_match(&commit.message))
    {
        patterns.push("Uses conventional commit messages".to_string());
    }

    // Per-file modification counts across all commits, first-encountered
    // order preserved for the reported subset.
    let mut file_freq: IndexMap<&str, usize> = IndexMap::new();
    for commit in commits {
        for file in &commit.files_changed {
            *file_freq.entry(file.as_str()).or_insert(0) += 1;
        }
    }

    let frequent: Vec<&str> = file_freq
        .iter()
        .filter(|(_, count)| **count > 2)
        .map(|(file, _)| *file)
        .collect();

    if !frequent.is_empty() {
        let shown = frequent.iter().take(3).copied().collect::<Vec<_>>();
        patterns.push(format!("Frequently modified files: {}", shown.join(", ")));
    }

    patterns
}

/// Derive actionable advice from a commit set.
pub fn generate_recommendations(commits: &[CommitRecord]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if commits
        .iter()
        .any(|commit| commit.files_changed.len() > 10)
    {
        recommendations
            .push("Consider breaking large commits into smaller, focused changes".to_string());
    }

    if commits
        .iter()
        .any(|commit| commit.message.chars().count() < 10)
    {
        recommendations
            .push("Write more descriptive commit messages for better project history".to_string());
    }

    let touches_tests = commits.iter().any(|commit| {
        commit
            .files_changed
            .iter()
            .any(|file| file.contains("test") || file.contains("spec"))
    });
    if !touches_tests {
        recommendations.push("Consider adding tests alongside feature development".to_string());
    }

    recommendations
}
