use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::web::{build_router, AppState};
use activities::{ActivityRegistry, Config, BUILD_ID};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let state = AppState::new(ActivityRegistry::seeded());
    let app = build_router(state, &config.static_dir);

    let listener = bind(&config).await?;
    let bound_addr = listener.local_addr()?;
    info!(addr = %bound_addr, build_id = BUILD_ID, "server listening");
    info!("open http://{}/ to sign up for activities", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Binds the configured port, or the next one up if it is taken.
async fn bind(config: &Config) -> std::io::Result<TcpListener> {
    match TcpListener::bind((config.host.as_str(), config.port)).await {
        Ok(listener) => Ok(listener),
        Err(e) => {
            let Some(fallback) = config.fallback_port() else {
                return Err(e);
            };
            warn!(
                host = %config.host,
                port = config.port,
                error = %e,
                "bind failed, trying port {}",
                fallback
            );
            TcpListener::bind((config.host.as_str(), fallback)).await
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
