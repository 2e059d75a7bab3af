//! Main insight engine: the four pipeline entry points.
//!
//! The engine is stateless between calls; it holds only its validated
//! configuration. Each method runs one pipeline to completion and returns a
//! fresh report value. Only failures on the primary requested artifact are
//! surfaced; per-item failures inside a batch degrade to partial results.

use std::path::Path;

use rayon::prelude::*;
use tracing::info;

use crate::api::results::{
    AnalysisReport, BugReport, CodeExplanationReport, CodeSnippet, CommitRecord,
    GitInsightReport, Metrics, TracebackInfo,
};
use crate::core::config::CodesightConfig;
use crate::core::errors::Result;
use crate::detectors::{git_patterns, issues, metrics, sections, security, suggestions, traceback};
use crate::io::{file_source, vcs};
use crate::lang::registry;

/// Heuristic insight engine over files, tracebacks, and commit histories.
pub struct CodesightEngine {
    config: CodesightConfig,
}

impl CodesightEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: CodesightConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Access the engine configuration.
    pub fn config(&self) -> &CodesightConfig {
        &self.config
    }

    /// Code-analysis pipeline: language classification, metrics, lint
    /// issues, suggestions, and (when requested) security findings for one
    /// file.
    pub async fn analyze_code<P: AsRef<Path>>(
        &self,
        path: P,
        include_security: bool,
    ) -> Result<AnalysisReport> {
        let path = path.as_ref();
        info!(path = %path.display(), "Analyzing code");

        let text = file_source::read_primary(path)?;
        let language = registry::language_for_path(path);

        let file_metrics = if self.config.analysis.include_metrics {
            metrics::calculate_metrics(&text, language)
        } else {
            // Placeholder shape when metrics are disabled: raw line count,
            // zeroed scores.
            Metrics {
                lines_of_code: text.split('\n').count(),
                complexity: 0,
                maintainability_index: 0,
            }
        };

        let report = AnalysisReport {
            path: path.display().to_string(),
            language: language.to_string(),
            metrics: file_metrics,
            issues: issues::find_issues(&text, language),
            suggestions: suggestions::generate_suggestions(&text, language),
            security_issues: include_security
                .then(|| security::find_security_issues(&text, language)),
        };

        info!(path = %path.display(), "Code analysis completed");
        Ok(report)
    }

    /// Bug-analysis pipeline: parse the traceback, select relevant files,
    /// extract snippet windows, classify the probable cause. Never fails;
    /// unreadable context files are dropped from the result.
    pub async fn analyze_bug(
        &self,
        traceback_text: &str,
        context_files: &[String],
    ) -> Result<BugReport> {
        info!("Analyzing bug from traceback");

        let error_info = traceback::parse_traceback(traceback_text);
        let relevant_files = self.select_relevant_files(&error_info, context_files);
        let code_snippets = self.extract_snippets(&relevant_files, &error_info);
        let (probable_cause, suggested_fix) = traceback::classify_cause(&error_info.error_type);

        info!("Bug analysis completed");
        Ok(BugReport {
            error_type: error_info.error_type,
            probable_cause: probable_cause.to_string(),
            suggested_fix: suggested_fix.to_string(),
            relevant_files,
            code_snippets,
        })
    }

    /// Code-explanation pipeline: overview, labeled sections over the
    /// requested line range, dependencies, related files.
    pub async fn explain_code<P: AsRef<Path>>(
        &self,
        path: P,
        start_line: Option<usize>,
        end_line: Option<usize>,
    ) -> Result<CodeExplanationReport> {
        let path = path.as_ref();
        info!(path = %path.display(), "Explaining code");

        let text = file_source::read_primary(path)?;
        let language = registry::language_for_path(path);
        let lines: Vec<&str> = text.split('\n').collect();

        // The range applies only when both endpoints are given; a lone
        // start still rebases section numbering. Inherited behavior.
        let base = start_line.unwrap_or(1).max(1);
        let target: &[&str] = match (start_line, end_line) {
            (Some(start), Some(end)) => {
                let from = start.max(1).saturating_sub(1).min(lines.len());
                let to = end.min(lines.len()).max(from);
                &lines[from..to]
            }
            _ => &lines,
        };

        let report = CodeExplanationReport {
            path: path.display().to_string(),
            overview: sections::generate_overview(&text, language),
            sections: sections::break_into_sections(target, base),
            dependencies: sections::find_dependencies(&text),
            related_files: sections::find_related_files(&path.display().to_string(), &text),
        };

        info!(path = %path.display(), "Code explanation completed");
        Ok(report)
    }

    /// Git-insight pipeline: query history, categorize and summarize each
    /// commit, mine patterns, derive recommendations.
    pub async fn analyze_history<P: AsRef<Path>>(
        &self,
        repo_path: P,
        query: &str,
    ) -> Result<GitInsightReport> {
        let repo_path = repo_path.as_ref();
        info!(query, "Analyzing git history");

        let history = vcs::query_history(
            repo_path,
            &vcs::HistoryQuery {
                grep: query.to_string(),
                max_results: self.config.git.max_results,
                include_files: self.config.git.include_files,
            },
        )?;

        let commits = self.build_commit_records(history);
        let patterns = git_patterns::mine_patterns(&commits);
        let recommendations = git_patterns::generate_recommendations(&commits);

        info!(query, "Git history analysis completed");
        Ok(GitInsightReport {
            commits,
            patterns,
            recommendations,
        })
    }

    /// Summarization is independent per commit; the parallel map preserves
    /// the history order of its input.
    fn build_commit_records(&self, history: Vec<vcs::RawCommit>) -> Vec<CommitRecord> {
        history
            .into_par_iter()
            .map(|commit| {
                let summary = git_patterns::summarize_commit(&commit.message, &commit.files_changed);
                CommitRecord {
                    hash: commit.hash,
                    author: commit.author,
                    date: commit.date,
                    message: commit.message,
                    files_changed: commit.files_changed,
                    summary,
                }
            })
            .collect()
    }

    /// Caller-supplied context files first (order preserved), then distinct
    /// frame files, truncated to the configured cap.
    fn select_relevant_files(
        &self,
        error_info: &TracebackInfo,
        context_files: &[String],
    ) -> Vec<String> {
        let mut relevant: Vec<String> = context_files.to_vec();

        for frame in &error_info.frames {
            if !relevant.contains(&frame.file) {
                relevant.push(frame.file.clone());
            }
        }

        relevant.truncate(self.config.bug.max_relevant_files);
        relevant
    }

    fn extract_snippets(
        &self,
        files: &[String],
        error_info: &TracebackInfo,
    ) -> Vec<CodeSnippet> {
        let mut snippets = Vec::new();

        for file in files {
            let Some(content) = file_source::read_secondary(file) else {
                continue;
            };

            let line = error_info
                .frames
                .iter()
                .find(|frame| &frame.file == file)
                .map(|frame| frame.line)
                .unwrap_or(1);

            snippets.push(CodeSnippet {
                file: file.clone(),
                lines: traceback::extract_window(
                    &content,
                    line,
                    self.config.bug.snippet_lines_before,
                    self.config.bug.snippet_lines_after,
                ),
                explanation: format!("Code around line {line} where error occurred"),
            });
        }

        snippets
    }
}
