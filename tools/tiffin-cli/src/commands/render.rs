//! `tiffin render` - write the landing page HTML.

use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use tiffin_page::config::SiteConfig;
use tiffin_page::forms::SimulatedBackend;
use tiffin_page::page::LandingPage;
use tiffin_render::{render_landing, PageContent};

use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Output file; writes to stdout when omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: RenderArgs, config: &SiteConfig, output: &Output) -> Result<()> {
    let content = PageContent::with_default_menu();
    let backend = Arc::new(SimulatedBackend::new(Duration::from_millis(
        config.submission.delay_ms,
    )));
    let page = LandingPage::new(config.clone(), backend);

    let marks = match &args.out {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let marks = render_landing(&content, &page, BufWriter::new(file))?;
            output.success(&format!("Wrote landing page to {}", path.display()));
            marks
        }
        None => {
            let stdout = std::io::stdout();
            render_landing(&content, &page, stdout.lock())?
        }
    };

    for mark in &marks {
        output.debug(&format!("{} at {:?}", mark.name, mark.elapsed));
    }

    Ok(())
}
