//! Whole-file advisory checks for the code-analysis pipeline.
//!
//! Each check is an independent content-membership test appending one fixed
//! advisory string. There is no per-line attribution and no deduplication
//! beyond the fixed set of checks.

use once_cell::sync::Lazy;
use regex::Regex;

static FUNCTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function|const.*=.*=>|def ").unwrap());

static COMMENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"//|/\*|#").unwrap());

/// Generate whole-file suggestions for one source file.
pub fn generate_suggestions(text: &str, language: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let is_js = language == "javascript" || language == "typescript";

    // Performance
    if is_js {
        if text.contains("document.getElementById") {
            suggestions.push("Consider caching DOM queries for better performance".to_string());
        }
        if text.contains("for (let i = 0; i < arr.length; i++)") {
            suggestions
                .push("Consider using forEach, map, or for...of for better readability".to_string());
        }
    }

    // Security
    if text.contains("eval(") {
        suggestions.push("Avoid using eval() as it poses security risks".to_string());
    }

    // Organization
    if text.split('\n').count() > 100 {
        suggestions
            .push("Consider breaking this file into smaller, more focused modules".to_string());
    }

    // Documentation: function-ish constructs vs comment markers
    let function_count = FUNCTION_PATTERN.find_iter(text).count();
    let comment_count = COMMENT_PATTERN.find_iter(text).count();
    if function_count as f64 > comment_count as f64 / 2.0 {
        suggestions.push("Consider adding more comments and documentation".to_string());
    }

    suggestions
}
