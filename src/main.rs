//! Runs one summarization request against fixture-backed collaborators.
//!
//! ```text
//! summarize --actor-id 1 --mode mode2 --max-days 30 --fixture fixtures/demo.json
//! ```
//!
//! The delivered result is printed to stdout as JSON. A failed request is
//! logged by the workflow and the process exits with a non-zero status.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use financial_summarization::domain::RequestedMode;
use financial_summarization::domain::value_objects::ActorId;
use financial_summarization::infrastructure::{AppConfig, AppDependencies, Fixture};

#[derive(Debug, Parser)]
#[command(name = "summarize")]
#[command(about = "Summarize an actor's recent financial statements")]
struct Cli {
    /// Identifier of the requesting actor
    #[arg(long)]
    actor_id: u64,

    /// Requested operating mode (mode1, mode2 or mode3)
    #[arg(long)]
    mode: RequestedMode,

    /// Window length in days [default: `SUMMARIZATION_MAX_DAYS` or 30]
    #[arg(long)]
    max_days: Option<u32>,

    /// Fixture seeding the collaborators [default: `SUMMARIZATION_FIXTURE`]
    #[arg(long)]
    fixture: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = AppConfig::from_env();

    let default_filter = AppConfig::default().log_filter;
    let log_filter = loaded
        .as_ref()
        .map_or(default_filter, |config| config.log_filter.clone());
    init_tracing(&log_filter);

    let config = loaded.unwrap_or_else(|error| {
        tracing::warn!("Failed to load config: {}, using defaults", error);
        AppConfig::default()
    });

    let fixture_path = cli.fixture.unwrap_or(config.fixture_path);
    let max_days = cli.max_days.unwrap_or(config.max_days_to_process);
    let actor_id = ActorId::new(cli.actor_id);

    tracing::info!(
        %actor_id,
        mode = %cli.mode,
        max_days,
        fixture = %fixture_path.display(),
        "Starting summarization"
    );

    let fixture = Fixture::load(&fixture_path)?;
    let dependencies = AppDependencies::from_fixture(fixture);

    let orchestrator = dependencies.orchestrator();
    let result = orchestrator.run(actor_id, cli.mode, max_days)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
