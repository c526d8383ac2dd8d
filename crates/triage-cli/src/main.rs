// Rust guideline compliant 2026-02-06

//! Bug Triage CLI Application
//!
//! Lists open bugs of one product component per assignee, separating bugs
//! that need work from those waiting on someone outside the team.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use triage_bugzilla::BugzillaClient;
use triage_cli::{create_formatter, generate_report, logging, write_report};
use triage_core::Config;

#[derive(Parser, Debug)]
#[command(
    name = "bug-triage",
    version,
    about = "Per-assignee triage report of open Bugzilla bugs",
    long_about = "Fetches open bugs of the configured product and component from Bugzilla, ignores low severity bugs and bugs waiting on needinfo from outside the team, and prints one section per assignee with links back to Bugzilla.",
    after_help = "Environment:\n  BUGZILLA_API_KEY  Bugzilla API key (required)\n  TRIAGE_*          Configuration overrides, e.g. TRIAGE_TEAM=alice,bob\n\nExamples:\n  bug-triage\n  bug-triage -v --config triage.toml\n  bug-triage --format json\n"
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let api_key = config.api_key()?;

    let client = BugzillaClient::new(
        config.tracker_url.clone(),
        api_key,
        Duration::from_secs(config.timeout_secs),
    )
    .context("Failed to create Bugzilla client")?;

    let report = generate_report(&client, &config).context("Failed to list bugs")?;

    let format = match cli.format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    };
    let formatter = create_formatter(format, config.links());
    write_report(std::io::stdout().lock(), &formatter.format_report(&report))
        .context("Failed to write report")?;

    Ok(())
}
