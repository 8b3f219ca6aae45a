//! Voting CLI entry point.
//!
//! - `deploy`: construct a ledger against the wall clock and print its state
//! - `run`: construct a ledger on a simulated clock and replay a step script

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use voting_cli::{init_logging, run_session, LogConfig, Script};
use voting_ledger::config::parse_candidates;
use voting_ledger::{
    Identity, ManualTimeSource, SystemTimeSource, TimeSource, VotingApi, VotingConfig,
    VotingService,
};

/// Default deploying account.
const DEFAULT_DEPLOYER: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

/// Voting Ledger CLI
#[derive(Parser, Debug)]
#[command(name = "voting-cli", version)]
#[command(about = "Deploy and exercise a single-owner voting ledger")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Construct a ledger and print its initial state as JSON
    Deploy(DeployArgs),

    /// Replay a JSON step script against a simulated clock
    Run {
        #[command(flatten)]
        deploy: DeployArgs,

        /// Path to the step script
        #[arg(short, long)]
        script: PathBuf,

        /// Clock reading at construction (default: current time)
        #[arg(long)]
        start: Option<u64>,

        /// Abort on the first rejected step
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Args, Debug)]
struct DeployArgs {
    /// Comma-separated candidate names (overrides VOTING_CANDIDATES)
    #[arg(long)]
    candidates: Option<String>,

    /// Voting duration in minutes (overrides VOTING_DURATION_MINUTES)
    #[arg(long)]
    duration_minutes: Option<u64>,

    /// Deploying identity; becomes the owner
    #[arg(long, default_value = DEFAULT_DEPLOYER)]
    deployer: Identity,
}

/// Load configuration from environment, then apply command-line overrides.
fn load_config(args: &DeployArgs) -> Result<VotingConfig> {
    let mut config = VotingConfig::from_env().context("Invalid voting configuration")?;

    if let Some(raw) = &args.candidates {
        config.candidates = parse_candidates(raw);
    }
    if let Some(minutes) = args.duration_minutes {
        config.voting_duration_minutes = minutes;
    }

    config.validate().context("Invalid voting configuration")?;
    Ok(config)
}

fn log_deployment<T: TimeSource>(service: &VotingService<T>) {
    info!("----------------------------------------------------");
    info!(
        owner = %service.get_owner(),
        candidates = service.candidate_count(),
        voting_start = service.voting_start(),
        voting_end = service.voting_end(),
        "Voting ledger deployed"
    );
}

fn deploy(args: DeployArgs) -> Result<()> {
    let config = load_config(&args)?;
    info!("Deploying voting ledger...");

    let service = VotingService::from_config(&config, args.deployer, SystemTimeSource)
        .context("Failed to construct voting ledger")?;
    log_deployment(&service);

    let json = serde_json::to_string_pretty(&service.snapshot())?;
    println!("{json}");
    Ok(())
}

fn run(args: DeployArgs, script: PathBuf, start: Option<u64>, strict: bool) -> Result<()> {
    let config = load_config(&args)?;
    let script = Script::load(&script)?;

    let start = start.unwrap_or_else(|| SystemTimeSource.now());
    let mut service =
        VotingService::from_config(&config, args.deployer, ManualTimeSource::new(start))
            .context("Failed to construct voting ledger")?;
    log_deployment(&service);

    let report = run_session(&mut service, &script, strict)?;

    let json = serde_json::to_string_pretty(&report)?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig::from_env())?;

    match cli.command {
        Command::Deploy(args) => deploy(args),
        Command::Run {
            deploy: args,
            script,
            start,
            strict,
        } => run(args, script, start, strict),
    }
}
