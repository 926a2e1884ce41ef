mod render;

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use shelfscope_core::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;

use crate::render::{HealthDisplay, JsonRenderer, TextRenderer};

#[derive(Debug, Parser)]
#[command(name = "shelfscope")]
#[command(about = "Marketplace listing insight: item details, reference data and top-seller velocity")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Aggregate and print the report for the product on a page URL
    Inspect {
        /// Marketplace product page URL
        page_url: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// How health scores are drawn in text output
        #[arg(long, value_enum, default_value_t = HealthDisplay::Plain)]
        health: HealthDisplay,
    },
    /// Print the canonical product identifier found in a page URL
    Extract {
        page_url: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    run(cli, shelfscope_core::load_app_config).await
}

/// Dispatches a parsed command. Configuration is only loaded for commands
/// that talk to the catalog.
async fn run<F>(cli: Cli, load_config: F) -> anyhow::Result<ExitCode>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    match cli.command {
        Commands::Extract { page_url } => {
            let Some(id) = shelfscope_core::extract_product_id(&page_url) else {
                eprintln!("error: could not identify the product in {page_url}");
                return Ok(ExitCode::FAILURE);
            };
            println!("{id}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Inspect {
            page_url,
            format,
            health,
        } => {
            let config = load_config()?;
            init_tracing(&config.log_level)?;
            inspect(&config, &page_url, format, health).await
        }
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn inspect(
    config: &AppConfig,
    page_url: &str,
    format: OutputFormat,
    health: HealthDisplay,
) -> anyhow::Result<ExitCode> {
    tracing::debug!(env = %config.env, base_url = %config.catalog_base_url, "starting inspection");
    let client = shelfscope_catalog::CatalogClient::with_base_url(
        &config.catalog_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build catalog client: {e}"))?;

    let stdout = std::io::stdout();
    let result = match format {
        OutputFormat::Text => {
            let mut renderer = TextRenderer::new(stdout.lock(), health);
            shelfscope_aggregate::inspect(&client, page_url, &mut renderer).await
        }
        OutputFormat::Json => {
            let mut renderer = JsonRenderer::new(stdout.lock());
            shelfscope_aggregate::inspect(&client, page_url, &mut renderer).await
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
