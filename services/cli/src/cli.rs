use crate::demo::{run_charge, run_demo, run_estimate, ChargeArgs, DemoArgs, EstimateArgs};
use clap::{Parser, Subcommand};
use vantage::config::AppConfig;
use vantage::error::AppError;
use vantage::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Vantage",
    about = "Walk through the Vantage dating demo from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the scripted end-to-end demo (default command)
    Demo(DemoArgs),
    /// Run a single compatibility estimate for two display names
    Estimate(EstimateArgs),
    /// Run a single simulated mobile-money charge
    Charge(ChargeArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Demo(args) => run_demo(&config, args).await,
        Command::Estimate(args) => run_estimate(&config, args).await,
        Command::Charge(args) => run_charge(&config, args).await,
    }
}
