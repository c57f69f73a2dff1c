//! TiffinTales CLI - render and exercise the landing page.
//!
//! Commands:
//! - `tiffin render` - Render the landing page HTML
//! - `tiffin demo` - Replay a scripted visitor session

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tiffin_page::config::SiteConfig;

/// TiffinTales CLI - home food delivery storefront tooling
#[derive(Parser)]
#[command(name = "tiffin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the landing page to a file or stdout
    Render(commands::render::RenderArgs),

    /// Replay a scripted visitor session against the page state
    Demo(commands::demo::DemoArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    let output = output::Output::new(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &config, &output),
        Commands::Demo(args) => commands::demo::run(args, &config, &output).await,
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
