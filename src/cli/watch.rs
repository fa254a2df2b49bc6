use anyhow::Result;
use ipm_cadence::{Refresher, config::Config};
use tokio::sync::{mpsc, watch as signal};

pub async fn watch(config: Config) -> Result<()> {
    let refresher = Refresher::new(
        config.resolver()?,
        config.clock()?,
        config.display.placeholder.to_owned(),
    );

    let (updates_tx, mut updates_rx) = mpsc::unbounded_channel();
    let (shutdown_tx, shutdown_rx) = signal::channel(false);

    tracing::info!("Starting midnight refresher...");
    let refresher = tokio::spawn(refresher.run(updates_tx, shutdown_rx));

    let printer = tokio::spawn(async move {
        while let Some(update) = updates_rx.recv().await {
            println!("[{}]", update.resolved_at.date());
            println!("{}", update.panel.to_plain_text());
        }
    });

    shutdown_signal().await;

    if shutdown_tx.send(true).is_err() {
        tracing::debug!("refresher already stopped");
    }
    refresher.await?;
    printer.await?;

    tracing::info!("Refresher stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(err = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(err = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
