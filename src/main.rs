use anyhow::Context;
use clap::Parser;
use release_scout::config::DEFAULT_GITHUB_BASE_URL;
use release_scout::deps::reader::read_dependency_list;
use release_scout::report::{check_dependencies, format_report_line};
use release_scout::version::registries::GitHubRegistry;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "release-scout")]
#[command(version, about = "Report the latest patch release of every minor version line")]
struct Cli {
    /// Path to the dependency list file (CSV: repository,min_version)
    file: PathBuf,

    /// Base URL of the GitHub API
    #[arg(long, default_value = DEFAULT_GITHUB_BASE_URL)]
    api_base_url: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let dependencies = read_dependency_list(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let registry = GitHubRegistry::new(&cli.api_base_url);
            for report in check_dependencies(&registry, dependencies).await {
                match report.outcome {
                    Ok(versions) => println!("{}", format_report_line(&report.repo, &versions)),
                    Err(e) => error!("Latest versions of {} not found: {}", report.repo, e),
                }
            }
        });

    Ok(())
}
