//! Per-line security heuristics for the code-analysis pipeline.
//!
//! Only invoked when the caller asks for a security check. Like the lint
//! rules these are substring/regex heuristics with known imprecision; the
//! credential rule in particular fires on *any* lowercased occurrence of
//! "password" or "secret" because the alternation in the inherited pattern
//! binds loosely. Reproduced as-is.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::results::{SecurityIssue, Severity};

// Inherited pattern, alternation precedence included: `password`, `secret`,
// or `key` followed eventually by `=` and a quote.
static CREDENTIAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"password|secret|key.*=.*['"]"#).unwrap());

/// One entry in the ordered security rule table.
pub struct SecurityRule {
    /// Severity of findings from this rule
    pub severity: Severity,
    /// Finding description
    pub message: &'static str,
    /// Suggested remediation
    pub recommendation: &'static str,
    /// Predicate over the trimmed line
    pub check: fn(&str) -> bool,
}

/// The security rule table, evaluated top to bottom per trimmed line.
pub static SECURITY_RULES: &[SecurityRule] = &[
    SecurityRule {
        severity: Severity::High,
        message: "Potential SQL injection vulnerability",
        recommendation: "Use parameterized queries or prepared statements",
        check: |trimmed| trimmed.contains("SELECT") && trimmed.contains('+'),
    },
    SecurityRule {
        severity: Severity::Medium,
        message: "Potential XSS vulnerability with innerHTML",
        recommendation: "Use textContent or properly sanitize HTML",
        check: |trimmed| trimmed.contains("innerHTML") && trimmed.contains('+'),
    },
    SecurityRule {
        severity: Severity::High,
        message: "Potential hardcoded credential",
        recommendation: "Use environment variables or secure configuration",
        check: |trimmed| CREDENTIAL_PATTERN.is_match(&trimmed.to_lowercase()),
    },
];

/// Scan a file's text for security findings, in line order.
pub fn find_security_issues(text: &str, _language: &str) -> Vec<SecurityIssue> {
    let mut issues = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let trimmed = line.trim();
        for rule in SECURITY_RULES {
            if (rule.check)(trimmed) {
                issues.push(SecurityIssue {
                    severity: rule.severity,
                    line: index + 1,
                    message: rule.message.to_string(),
                    recommendation: rule.recommendation.to_string(),
                });
            }
        }
    }

    issues
}
