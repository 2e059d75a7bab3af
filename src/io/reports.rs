//! Report rendering for the CLI surface.
//!
//! The engine itself is wire-format agnostic; this module turns its report
//! values into pretty-printed JSON or a compact console summary.

use serde::Serialize;

use crate::api::results::{
    AnalysisReport, BugReport, CodeExplanationReport, GitInsightReport,
};
use crate::core::errors::Result;

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact human-readable summary
    Console,
}

/// Serialize any report to pretty JSON.
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Console rendering of an analysis report.
pub fn render_analysis(report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} [{}]\n", report.path, report.language));
    out.push_str(&format!(
        "  lines of code: {}  complexity: {}  maintainability: {}\n",
        report.metrics.lines_of_code,
        report.metrics.complexity,
        report.metrics.maintainability_index
    ));

    for issue in &report.issues {
        out.push_str(&format!(
            "  {:?} line {}: {} ({})\n",
            issue.kind, issue.line, issue.message, issue.rule
        ));
    }

    if let Some(security) = &report.security_issues {
        for issue in security {
            out.push_str(&format!(
                "  {:?} line {}: {} -> {}\n",
                issue.severity, issue.line, issue.message, issue.recommendation
            ));
        }
    }

    for suggestion in &report.suggestions {
        out.push_str(&format!("  suggestion: {suggestion}\n"));
    }

    out
}

/// Console rendering of a bug report.
pub fn render_bug(report: &BugReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("error type: {}\n", report.error_type));
    out.push_str(&format!("probable cause: {}\n", report.probable_cause));
    out.push_str(&format!("suggested fix: {}\n", report.suggested_fix));
    if !report.relevant_files.is_empty() {
        out.push_str(&format!(
            "relevant files: {}\n",
            report.relevant_files.join(", ")
        ));
    }
    for snippet in &report.code_snippets {
        out.push_str(&format!("--- {} ({})\n{}\n", snippet.file, snippet.explanation, snippet.lines));
    }
    out
}

/// Console rendering of a code-explanation report.
pub fn render_explanation(report: &CodeExplanationReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n", report.path, report.overview));
    for section in &report.sections {
        out.push_str(&format!(
            "  lines {}-{}: {} [{}]\n",
            section.start_line,
            section.end_line,
            section.explanation,
            section.concepts.join(", ")
        ));
    }
    if !report.dependencies.is_empty() {
        out.push_str(&format!("dependencies: {}\n", report.dependencies.join(", ")));
    }
    if !report.related_files.is_empty() {
        out.push_str(&format!("related files: {}\n", report.related_files.join(", ")));
    }
    out
}

/// Console rendering of a git-insight report.
pub fn render_git_insight(report: &GitInsightReport) -> String {
    let mut out = String::new();
    for commit in &report.commits {
        let short = commit.hash.chars().take(8).collect::<String>();
        out.push_str(&format!("{short} {} - {}\n", commit.date, commit.summary));
    }
    for pattern in &report.patterns {
        out.push_str(&format!("pattern: {pattern}\n"));
    }
    for recommendation in &report.recommendations {
        out.push_str(&format!("recommendation: {recommendation}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::results::Metrics;

    #[test]
    fn security_issues_are_omitted_from_json_when_absent() {
        let report = AnalysisReport {
            path: "a.js".to_string(),
            language: "javascript".to_string(),
            metrics: Metrics {
                lines_of_code: 1,
                complexity: 1,
                maintainability_index: 100,
            },
            issues: vec![],
            suggestions: vec![],
            security_issues: None,
        };
        let json = to_json(&report).unwrap();
        assert!(!json.contains("securityIssues"));

        let report = AnalysisReport {
            security_issues: Some(vec![]),
            ..report
        };
        let json = to_json(&report).unwrap();
        assert!(json.contains("securityIssues"));
    }
}
