use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod menu;
mod output;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("agro error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    let mut ctx =
        context::AppContext::init(&flags).context("failed to initialize agro application context")?;

    let command = cli.command.unwrap_or(cli::Commands::Menu);
    commands::dispatch::dispatch(command, &mut ctx, &flags)
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AGRO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
