use crate::demo::{run_demo, run_hire, DemoArgs, HireArgs};
use clap::{Parser, Subcommand};
use talent::config::AppConfig;
use talent::error::AppError;
use talent::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "talent-desk",
    about = "Match candidates to open positions and hire them, printing every notification",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the canonical web-designer hiring scenario (default command)
    Demo(DemoArgs),
    /// Run a single hiring round for a custom position and requirement list
    Hire(HireArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        environment = ?config.environment,
        company = %config.hiring.company_name,
        policy = %config.hiring.match_policy,
        "talent-desk starting"
    );

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(&config, args),
        Command::Hire(args) => run_hire(&config, args),
    }
}
