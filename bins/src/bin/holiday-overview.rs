// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The holiday overview CLI
//!

use clap::Parser;
use holiday_overview_client::{HolidayOverviewController, PageContext, TextRenderer};
use holiday_overview_core::PersonId;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point (fetch a person's holiday overview & print a summary of it)
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("holiday_overview")
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;

    // Load the page context & apply any overrides
    let mut context = match &args.config {
        Some(path) => PageContext::load(path)?,
        None => PageContext::load_default()?,
    };
    if let Some(person_id) = args.person_id {
        context.person_id = PersonId::from(person_id)?;
    }
    if let Some(api_prefix) = args.api_prefix {
        context.api_prefix = api_prefix;
    }

    // HTTP client (requests inherit its timeout)
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()?;

    // Run the overview
    let renderer = Arc::new(TextRenderer::new(std::io::stdout()));
    let controller = HolidayOverviewController::with_http(context, client, renderer);
    let run = controller.initialize(args.year.as_deref()).await?;

    if run.report.is_complete() {
        info!("Overview complete ({} requests)", run.report.total());
    } else {
        warn!(
            "Overview is missing data ({} of {} requests failed)",
            run.report.failed().len(),
            run.report.total()
        );
    }

    Ok(())
}

/// Holiday overview CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Print a person's public holidays & absences around a date",
    after_help = "Without --config the config is read from the user's config directory"
)]
pub struct Cli {
    /// Path to the JSON config (person, API prefix, translations)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// The year to centre the overview on.  Anything that isn't a year means
    /// the current date is used
    #[arg(long)]
    pub year: Option<String>,

    /// Show this person instead of the one in the config
    #[arg(long)]
    pub person_id: Option<u64>,

    /// Use this API prefix instead of the one in the config
    #[arg(long)]
    pub api_prefix: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log at debug level
    #[arg(long)]
    pub verbose: bool,
}
