use std::process::ExitCode;

use clap::Parser;
use inventory_cli::{Cli, TerminalPrompt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = inventory_cli::config(&cli)?;
    let mut page = inventory_cli::page(&config, TerminalPrompt::stdio(cli.yes));

    let ok = inventory_cli::run(&cli.command, &mut page, &mut std::io::stdout()).await?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
