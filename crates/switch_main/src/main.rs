use std::process::ExitCode;

use clap::Parser;
use console::style;
use switch_select::SwitchSelect;
use tracing_subscriber::EnvFilter;

mod cli;
mod ui;

use cli::Cli;
use ui::UI;

const LOG_ENV: &str = "CLAUDE_SWITCH_LOG";

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config()?;
    UI::new(config, SwitchSelect::new()).run(cli.command)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("{} {err:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
