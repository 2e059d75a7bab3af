//! # Codesight: Heuristic Code-Insight Engine
//!
//! A rule-based analysis engine that turns raw file text, an error traceback,
//! or a commit history into structured, machine-readable insight reports:
//!
//! - **Code Analysis**: quality metrics, per-line lint issues, security hints
//! - **Bug Analysis**: traceback triage with probable cause and code snippets
//! - **Code Explanation**: section-by-section walkthrough with concept tags
//! - **Git Insight**: commit categorization, pattern mining, recommendations
//!
//! Codesight is deliberately *not* a compiler front end. Every pass is a
//! line/regex/keyword heuristic with documented imprecision; no AST is built,
//! no symbols are resolved, no types are checked. The engine holds no state
//! between calls and every report is a fresh value.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use codesight::{CodesightConfig, CodesightEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = CodesightEngine::new(CodesightConfig::default())?;
//!     let report = engine.analyze_code("src/app.js", true).await?;
//!     println!("maintainability: {}", report.metrics.maintainability_index);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

// Core engine plumbing
pub mod core {
    //! Configuration and error types shared across the engine.

    pub mod config;
    pub mod errors;
}

// Language identification
pub mod lang {
    //! Extension-based language classification.

    pub mod registry;
}

// Heuristic rule passes
pub mod detectors {
    //! The heuristic rule passes that produce report content.

    pub mod git_patterns;
    pub mod issues;
    pub mod metrics;
    pub mod sections;
    pub mod security;
    pub mod suggestions;
    pub mod traceback;
}

// I/O collaborators (file reads, git history)
pub mod io {
    //! File-system and VCS collaborators plus report serialization.

    pub mod file_source;
    pub mod reports;
    pub mod vcs;
}

// Public API and engine interface
pub mod api {
    //! High-level engine interface and report structures.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use crate::api::engine::CodesightEngine;
pub use crate::api::results::{AnalysisReport, BugReport, CodeExplanationReport, GitInsightReport};
pub use crate::core::config::CodesightConfig;
pub use crate::core::errors::{CodesightError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
