mod config;
mod document;
mod parser;
mod pipeline;
mod report;
mod setup;
mod targets;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{info, warn};

use config::Config;
use document::PdfSource;
use setup::Setup;

#[derive(Parser)]
#[command(
    name = "transcript_extract",
    about = "Extract course results from PDF transcripts into CSV reports"
)]
struct Cli {
    /// Directory holding docs/, out/ and target_course_names.txt
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Write each document's sanitized text to out/debug_extracted_text/
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let config = Config::from_root(&cli.root).with_debug(cli.debug);
    info!("Working in {}", config.root.display());

    if setup::prepare(&config)? == Setup::Created {
        warn!(
            "Please place the PDF files in {} and re-run.",
            config.ingest_dir.display()
        );
        return Ok(());
    }

    let result = pipeline::run(&config, &PdfSource);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
