//! Report structures produced by the four insight pipelines.
//!
//! These are the wire-format-agnostic values handed to whatever transport or
//! presentation layer sits above the engine. Every report is produced fresh
//! per request; nothing here is interned or shared.

use serde::{Deserialize, Serialize};

/// Issue classification for lint findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Should be fixed but does not block
    Warning,
    /// Definite problem
    Error,
    /// Informational note
    Info,
}

/// Severity ladder for security findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Likely exploitable
    High,
    /// Needs review
    Medium,
    /// Hygiene concern
    Low,
}

/// Quality metrics for one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Non-blank, non-comment-prefixed line count
    pub lines_of_code: usize,
    /// Approximate cyclomatic complexity, always >= 1
    pub complexity: usize,
    /// Maintainability index in [0, 100]
    pub maintainability_index: u32,
}

/// One per-line lint finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Finding classification
    pub kind: IssueKind,
    /// 1-based line number, never past the end of the file
    pub line: usize,
    /// Human-readable description
    pub message: String,
    /// Rule identifier (e.g. "line-length")
    pub rule: String,
}

/// One per-line security finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityIssue {
    /// Finding severity
    pub severity: Severity,
    /// 1-based line number
    pub line: usize,
    /// Human-readable description
    pub message: String,
    /// Suggested remediation
    pub recommendation: String,
}

/// Report produced by the code-analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Path of the analyzed file
    pub path: String,
    /// Detected language tag ("unknown" when unmapped)
    pub language: String,
    /// Quality metrics
    pub metrics: Metrics,
    /// Per-line lint findings
    pub issues: Vec<Issue>,
    /// Whole-file advisory strings
    pub suggestions: Vec<String>,
    /// Security findings; present iff security scanning was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_issues: Option<Vec<SecurityIssue>>,
}

/// A `(file, line)` pair extracted from a traceback by pattern match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Base name of the referenced file
    pub file: String,
    /// 1-based line number from the traceback
    pub line: usize,
}

/// Structured view of a raw traceback. Parsing never fails; a traceback with
/// no recognizable error line degrades to the defaults documented on each
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracebackInfo {
    /// Error type name; "UnknownError" when no `Error:`/`Exception:` line
    /// was found
    pub error_type: String,
    /// Error message; the whole traceback text when no error line was found
    pub message: String,
    /// File/line frames recognized in the traceback
    pub frames: Vec<Frame>,
}

/// Code excerpt attached to a bug report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    /// File the snippet was read from
    pub file: String,
    /// The extracted lines, newline-joined
    pub lines: String,
    /// Why this snippet is included
    pub explanation: String,
}

/// Report produced by the bug-analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugReport {
    /// Error type extracted from the traceback
    pub error_type: String,
    /// Heuristic probable cause
    pub probable_cause: String,
    /// Heuristic suggested fix
    pub suggested_fix: String,
    /// Relevant files: caller-supplied context first, then traceback frames,
    /// deduplicated, at most five
    pub relevant_files: Vec<String>,
    /// Extracted context windows for readable relevant files
    pub code_snippets: Vec<CodeSnippet>,
}

/// A contiguous, labeled slice of the explained line range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSection {
    /// 1-based first line of the section
    pub start_line: usize,
    /// 1-based last line of the section
    pub end_line: usize,
    /// Fixed descriptive sentence chosen by concept priority
    pub explanation: String,
    /// Structural features detected by keyword presence
    pub concepts: Vec<String>,
}

/// Report produced by the code-explanation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeExplanationReport {
    /// Path of the explained file
    pub path: String,
    /// One-paragraph summary of the file
    pub overview: String,
    /// Ordered, non-overlapping sections covering the requested range
    pub sections: Vec<CodeSection>,
    /// Module specifiers imported by the file, deduplicated
    pub dependencies: Vec<String>,
    /// Local files referenced by relative imports (existence unverified)
    pub related_files: Vec<String>,
}

/// One commit in a git-insight report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    /// Full commit hash
    pub hash: String,
    /// Author name
    pub author: String,
    /// Commit date as reported by the VCS
    pub date: String,
    /// Full commit message
    pub message: String,
    /// Paths changed by this commit (empty when file fetching is disabled)
    pub files_changed: Vec<String>,
    /// First message line plus the touched file categories
    pub summary: String,
}

/// Report produced by the git-insight pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitInsightReport {
    /// Matched commits in history order, capped at the caller's limit
    pub commits: Vec<CommitRecord>,
    /// Recurring structural patterns mined from the commit set
    pub patterns: Vec<String>,
    /// Actionable advice derived from the commit set
    pub recommendations: Vec<String>,
}
