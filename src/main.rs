use clap::Parser;
use integrity_checker::{cli, commands};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let outcome = runtime.block_on(commands::handle_run(&cli));
    if let Err(e) = &outcome {
        tracing::error!(error = %format!("{e:#}"), "fatal runtime error");
    }
    // An interrupted check is abandoned rather than drained.
    runtime.shutdown_background();
    outcome
}
