use courier_bot::poller::StatusPoller;
use courier_client::StatusClient;
use courier_common::config::AppConfig;
use courier_notifier::TelegramNotifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "courier_bot=info,courier_client=info,courier_notifier=info".into()
            }),
        )
        .json()
        .init();

    tracing::info!("ReviewCourier starting...");

    // Missing or empty credentials are the only terminal state.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Configuration incomplete, refusing to start");
            std::process::exit(1);
        }
    };

    let client = StatusClient::new(&config)?;
    let notifier = TelegramNotifier::new(&config)?;
    let poller = StatusPoller::new(client, notifier, &config);

    // Run with graceful shutdown on Ctrl+C
    tokio::select! {
        result = poller.run() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Status poller exited with error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("ReviewCourier stopped.");
    Ok(())
}
