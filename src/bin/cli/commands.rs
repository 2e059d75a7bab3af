//! Command implementations for the codesight CLI.

use anyhow::Context;

use codesight::io::reports::{self, ReportFormat};
use codesight::lang::registry;
use codesight::{CodesightConfig, CodesightEngine};

use crate::cli::args::{AnalyzeArgs, BugArgs, ExplainArgs, HistoryArgs};

/// Load configuration: an explicit file when given, defaults otherwise.
pub fn load_configuration(path: Option<&std::path::Path>) -> anyhow::Result<CodesightConfig> {
    match path {
        Some(path) => CodesightConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(CodesightConfig::default()),
    }
}

pub async fn analyze_command(
    args: AnalyzeArgs,
    mut config: CodesightConfig,
    format: ReportFormat,
) -> anyhow::Result<()> {
    if args.no_metrics {
        config.analysis.include_metrics = false;
    }
    let include_security = args.security || config.analysis.include_security;

    let engine = CodesightEngine::new(config)?;
    let report = engine.analyze_code(&args.path, include_security).await?;

    match format {
        ReportFormat::Json => println!("{}", reports::to_json(&report)?),
        ReportFormat::Console => print!("{}", reports::render_analysis(&report)),
    }
    Ok(())
}

pub async fn bug_command(
    args: BugArgs,
    config: CodesightConfig,
    format: ReportFormat,
) -> anyhow::Result<()> {
    let traceback = match (args.traceback, args.traceback_file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read traceback from {}", path.display()))?,
        (None, None) => anyhow::bail!("Provide a traceback via --traceback or --traceback-file"),
    };

    let engine = CodesightEngine::new(config)?;
    let report = engine.analyze_bug(&traceback, &args.context_files).await?;

    match format {
        ReportFormat::Json => println!("{}", reports::to_json(&report)?),
        ReportFormat::Console => print!("{}", reports::render_bug(&report)),
    }
    Ok(())
}

pub async fn explain_command(
    args: ExplainArgs,
    config: CodesightConfig,
    format: ReportFormat,
) -> anyhow::Result<()> {
    let engine = CodesightEngine::new(config)?;
    let report = engine
        .explain_code(&args.path, args.start_line, args.end_line)
        .await?;

    match format {
        ReportFormat::Json => println!("{}", reports::to_json(&report)?),
        ReportFormat::Console => print!("{}", reports::render_explanation(&report)),
    }
    Ok(())
}

pub async fn history_command(
    args: HistoryArgs,
    mut config: CodesightConfig,
    format: ReportFormat,
) -> anyhow::Result<()> {
    if let Some(max) = args.max_results {
        config.git.max_results = max;
    }
    if args.no_files {
        config.git.include_files = false;
    }

    let engine = CodesightEngine::new(config)?;
    let report = engine.analyze_history(&args.repo, &args.query).await?;

    match format {
        ReportFormat::Json => println!("{}", reports::to_json(&report)?),
        ReportFormat::Console => print!("{}", reports::render_git_insight(&report)),
    }
    Ok(())
}

pub fn list_languages() {
    for info in registry::registered_languages() {
        println!("{:<12} {}", info.tag, info.extensions.join(", "));
    }
    println!("{:<12} everything else", "unknown");
}

pub fn print_default_config() -> anyhow::Result<()> {
    print!("{}", CodesightConfig::default().to_yaml()?);
    Ok(())
}
