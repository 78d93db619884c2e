use crate::cli::Cli;
use crate::domain::error::NotificationError;
use crate::domain::models::{CheckResult, Config};
use crate::services::checker::Checker;
use crate::services::notify::{Notifier, NullNotifier, SlackNotifier};
use crate::services::output::print_result;
use anyhow::Context;

pub fn build_notifier(cfg: &Config) -> Result<Box<dyn Notifier>, NotificationError> {
    if cfg.slack_enabled {
        Ok(Box::new(SlackNotifier::from_config(cfg.slack.clone())?))
    } else {
        Ok(Box::new(NullNotifier))
    }
}

/// Waits for ctrl-c, or SIGTERM on unix. Never resolves if no handler
/// could be installed.
async fn shutdown_signal() -> &'static str {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "unable to listen for interrupt");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "unable to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => "interrupt",
        _ = terminate => "terminate",
    }
}

async fn notify_failure(cfg: Config, result: CheckResult) -> anyhow::Result<()> {
    tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
        let notifier = build_notifier(&cfg).context("unable to create notifier")?;
        notifier
            .send_checker_result(&result)
            .context("unable to send notification of result")
    })
    .await
    .context("notification task failed")?
}

/// Runs the check on a blocking task and returns when it completes, fails,
/// or the process is asked to stop. An interrupted run produces no result.
pub async fn handle_run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = cli.config();
    tracing::info!(
        config = %serde_json::to_string(&cfg)?,
        version = env!("CARGO_PKG_VERSION"),
        "config on startup"
    );

    let checker = Checker::new(cfg.zebedee_root.clone(), cfg.check_published_previous_days);
    let task = tokio::task::spawn_blocking(move || checker.run());

    tokio::select! {
        joined = task => {
            let result = match joined.context("checker task failed")? {
                Ok(r) => r,
                Err(e) => {
                    tracing::error!(error = %e, "checker error received");
                    return Err(e).context("integrity check could not be completed");
                }
            };
            tracing::info!(
                success = result.success,
                inconsistencies = ?result.inconsistencies,
                "integrity check result"
            );
            print_result(cli.json, &result)?;
            if !result.success {
                notify_failure(cfg, result).await?;
            }
            tracing::info!("integrity check complete");
        }
        signal = shutdown_signal() => {
            tracing::info!(signal, "os signal received");
        }
    }
    Ok(())
}
