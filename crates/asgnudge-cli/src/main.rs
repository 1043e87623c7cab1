//! asgnudge — one-shot capacity bump for tagged auto-scaling groups.
//!
//! Reads the tag filter from `ASG_TAG_NAME` / `ASG_TAG_VALUE` (flags
//! override), runs a single evaluation pass, and exits. Intended to be
//! invoked on an external cadence; it holds no state between runs. Any
//! remote error that survives the SDK's retries terminates the process
//! with a non-zero status.

use clap::Parser;
use tracing::info;

use asgnudge_core::{AwsFleetClient, CapacityAdjuster, Config};

#[derive(Parser)]
#[command(
    name = "asgnudge",
    about = "Raise desired capacity of tagged auto-scaling groups by one",
    version
)]
struct Cli {
    /// Tag key selecting the groups to process (overrides ASG_TAG_NAME).
    #[arg(long)]
    tag_key: Option<String>,

    /// Tag value selecting the groups to process (overrides ASG_TAG_VALUE).
    #[arg(long)]
    tag_value: Option<String>,

    /// Evaluate and log decisions without mutating any group.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if cli.tag_key.is_some() {
        config.tag_key = cli.tag_key;
    }
    if cli.tag_value.is_some() {
        config.tag_value = cli.tag_value;
    }
    config.dry_run = cli.dry_run;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .init();

    info!(dry_run = config.dry_run, "starting capacity adjustment pass");

    let api = AwsFleetClient::from_env().await;
    let adjuster = CapacityAdjuster::new(api, config);
    let summary = adjuster.run().await?;

    info!(
        matched = summary.matched,
        scaled = summary.scaled,
        at_max = summary.at_max,
        no_policy = summary.no_policy,
        missing = summary.missing,
        "pass complete"
    );
    Ok(())
}
