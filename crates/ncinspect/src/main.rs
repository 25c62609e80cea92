use std::process::ExitCode;

use clap::Parser;
use ncinspect::{inspect, Cli};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = cli.config();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match inspect(&config, &mut out) {
        Ok(report) => {
            info!(
                variable = %report.variable,
                attribute = %report.attribute.name,
                values = report.values.len(),
                "inspection complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            warn!(error = %e, kind = ?e.kind(), "inspection failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
