mod cli;
mod config;
mod error;
mod output;

use chrono::Local;
use clap::{CommandFactory, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use doorlog_core::{CoreError, DoorLog};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries the report; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(Command::Completions(args)) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(args.shell, &mut cmd, "doorlog", &mut std::io::stdout());
        return Ok(());
    }

    let file = config::load_file_config(cli.global.config.as_deref())?;
    let report = config::resolve(&cli.report, &cli.global, file, Local::now().date_naive())?;
    info!(
        address = %report.address,
        scheme = %report.scheme,
        from = %report.from_date,
        "querying door controller"
    );

    let doorlog = DoorLog::new(&report)?;
    let reference = doorlog.load_reference_data().await?;

    let events = match doorlog.fetch_events().await {
        Ok(events) => events,
        Err(err @ CoreError::EventsRejected { .. }) => {
            // Reported, but the run still succeeds.
            eprintln!("{:?}", miette::Report::new(CliError::from(err)));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    debug!(count = events.len(), "events received");

    let printed = output::print_report(&events, &reference)?;
    debug!(printed, "report complete");
    Ok(())
}
