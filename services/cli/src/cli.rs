use crate::commands::{run_check_identity, run_evaluate, run_show_config};
use clap::{Args, Parser, Subcommand};
use job_screening::config::AppConfig;
use job_screening::error::AppError;
use job_screening::telemetry;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "job-screening",
    about = "Route job applications to auto-accept, auto-reject, HR or CTO review",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a JSON job application
    Evaluate(EvaluateArgs),
    /// Validate a national identity number on its own
    CheckIdentity(CheckIdentityArgs),
    /// Print the effective evaluation configuration
    Config,
}

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Application JSON file (reads stdin when omitted)
    #[arg(long, short)]
    pub(crate) input: Option<PathBuf>,
    /// Override the configured office country
    #[arg(long)]
    pub(crate) office_country: Option<String>,
    /// Print the full assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CheckIdentityArgs {
    /// Identity number to validate
    pub(crate) identity_number: String,
    /// Verify check digits in addition to the number's shape
    #[arg(long)]
    pub(crate) detailed: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(office_country = %config.office_country, "configuration loaded");

    match cli.command {
        Command::Evaluate(args) => run_evaluate(&config, args),
        Command::CheckIdentity(args) => run_check_identity(&config, args),
        Command::Config => run_show_config(&config),
    }
}
