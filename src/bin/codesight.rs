//! Codesight CLI - heuristic code insight without a compiler.

use clap::Parser;

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli::load_configuration(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Analyze(args) => {
            cli::analyze_command(args, config, format).await?;
        }
        Commands::Bug(args) => {
            cli::bug_command(args, config, format).await?;
        }
        Commands::Explain(args) => {
            cli::explain_command(args, config, format).await?;
        }
        Commands::History(args) => {
            cli::history_command(args, config, format).await?;
        }
        Commands::ListLanguages => {
            cli::list_languages();
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
        }
    }

    Ok(())
}
