//! Quality metrics: lines of code, approximate cyclomatic complexity, and a
//! maintainability index.
//!
//! All three metrics are deterministic pure functions of `(text, language)`.
//! The lines-of-code count uses a line-prefix comment heuristic, not a real
//! comment parser: a multi-line string literal whose lines begin with `//` or
//! `*` is miscounted. Known limitation, kept by contract.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::results::Metrics;
use crate::lang::registry::{keyword_family, KeywordFamily};

// The `\b` anchors wrap the whole alternation, so `&&`/`||` only count when
// directly adjacent to a word character (`a&&b` matches, `a && b` does not).
// Copied from the original engine rather than redesigned.
static C_FAMILY_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(if|else|while|for|switch|case|catch|&&|\|\|)\b").unwrap());

static PYTHON_FAMILY_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(if|elif|else|while|for|except|and|or)\b").unwrap());

/// Compute all metrics for one source file.
pub fn calculate_metrics(text: &str, language: &str) -> Metrics {
    Metrics {
        lines_of_code: count_code_lines(text),
        complexity: calculate_complexity(text, language),
        maintainability_index: calculate_maintainability(text, language),
    }
}

/// Count non-blank lines whose trimmed form does not start with a comment
/// marker (`//`, `/*`, `*`).
pub fn count_code_lines(text: &str) -> usize {
    text.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty()
                && !trimmed.starts_with("//")
                && !trimmed.starts_with("/*")
                && !trimmed.starts_with('*')
        })
        .count()
}

/// Approximate cyclomatic complexity: 1 plus the count of branching/boolean
/// keyword matches for the language's keyword family. Not derived from a
/// control-flow graph.
pub fn calculate_complexity(text: &str, language: &str) -> usize {
    let pattern: &Regex = match keyword_family(language) {
        KeywordFamily::CLike => &C_FAMILY_KEYWORDS,
        KeywordFamily::PythonLike => &PYTHON_FAMILY_KEYWORDS,
    };
    pattern.find_iter(text).count() + 1
}

/// Maintainability index on a 0-100 scale, from a fixed logarithmic formula
/// over total physical line count and approximate complexity.
pub fn calculate_maintainability(text: &str, language: &str) -> u32 {
    // split('\n').count() style total: an empty file still has one line.
    let total_lines = text.split('\n').count().max(1) as f64;
    let complexity = calculate_complexity(text, language) as f64;

    let score = 171.0
        - 5.2 * total_lines.ln()
        - 0.23 * complexity
        - 16.2 * (total_lines / 10.0).ln();

    score.clamp(0.0, 100.0).round() as u32
}
