use clap::Parser;
use quill_seo::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            file,
            json,
            keyword,
            min_score,
        }) => {
            quill_seo::cli::analyze::run(&cli.config, &file, json, keyword, min_score)?;
        }
        Some(Commands::Slug { command }) => {
            quill_seo::cli::slug::run(command)?;
        }
        Some(Commands::Init { path }) => {
            quill_seo::cli::init::run(path)?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
