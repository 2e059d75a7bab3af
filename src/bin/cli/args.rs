//! CLI argument structures for the codesight binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use codesight::io::reports::ReportFormat;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Heuristic code insight without a compiler
#[derive(Parser)]
#[command(name = "codesight")]
#[command(version = VERSION)]
#[command(about = "Heuristic code insight: metrics, lint, crash triage, and git history mining")]
#[command(long_about = "
Turn a source file, an error traceback, or a commit history into a structured
insight report. Every pass is a line/regex/keyword heuristic: no compiler, no
language server, no AST.

Common Usage:

  # Quality metrics, lint issues, and suggestions for one file
  codesight analyze src/app.js

  # Include the security scanner
  codesight analyze --security src/app.js

  # Triage a crash from a traceback file
  codesight bug --traceback-file crash.txt --context src/server.js

  # Walk through a file section by section
  codesight explain src/app.js --start-line 10 --end-line 80

  # Mine patterns from recent history
  codesight history \"fix\" --repo .
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a YAML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report output format
    #[arg(long, global = true, value_enum, default_value = "console")]
    pub format: ReportFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze one source file for metrics, issues, and suggestions
    Analyze(AnalyzeArgs),

    /// Triage a crash from an error traceback
    Bug(BugArgs),

    /// Explain a file or line range section by section
    Explain(ExplainArgs),

    /// Mine insight from git commit history
    History(HistoryArgs),

    /// List recognized languages and their extensions
    #[command(name = "list-languages")]
    ListLanguages,

    /// Print the default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// File to analyze
    pub path: PathBuf,

    /// Run the security scanner and attach its findings
    #[arg(long)]
    pub security: bool,

    /// Skip metric computation (report carries placeholder metrics)
    #[arg(long)]
    pub no_metrics: bool,
}

#[derive(Args)]
pub struct BugArgs {
    /// Read the traceback from this file
    #[arg(long, conflicts_with = "traceback")]
    pub traceback_file: Option<PathBuf>,

    /// Pass the traceback text directly
    #[arg(long)]
    pub traceback: Option<String>,

    /// Context files to consider relevant (before traceback frames)
    #[arg(long = "context")]
    pub context_files: Vec<String>,
}

#[derive(Args)]
pub struct ExplainArgs {
    /// File to explain
    pub path: PathBuf,

    /// First line of the range (1-based)
    #[arg(long)]
    pub start_line: Option<usize>,

    /// Last line of the range (inclusive)
    #[arg(long)]
    pub end_line: Option<usize>,
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Substring the commit message must contain (empty matches all)
    #[arg(default_value = "")]
    pub query: String,

    /// Repository path (any path inside the working tree)
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Maximum number of commits to inspect
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Skip per-commit changed-file lists
    #[arg(long)]
    pub no_files: bool,
}
