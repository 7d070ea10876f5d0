use tokio::signal;
use tracing::{error, info};

use event_board_api::services::seed_data::bootstrap_data_files;
use event_board_api::{serve, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "event_board_api=debug,tower_http=debug".into())
        )
        .init();

    info!("Starting event board server...");

    let config = Config::from_env()?;
    info!(
        events_file = %config.events_file.display(),
        password_file = %config.password_file.display(),
        "Configuration loaded"
    );
    if config.expose_password {
        info!("GET /readPass returns the admin password to any caller; set EXPOSE_PASSWORD=false to disable it");
    }

    let state = AppState::new(config.clone());
    bootstrap_data_files(&state.events, &state.passwords, config.admin_password.as_deref()).await?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    // Graceful shutdown
    tokio::select! {
        result = serve(listener, state) => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutting down gracefully...");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
