#![recursion_limit = "512"]

use app::api_impl::TourContext;
use app::config::Config;
use app::stops::StopRegistry;
use app::translator::TranslationClient;
use server_lib::router::{AppState, build_router, default_leptos_options};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let stops = match &config.stops_file {
        Some(path) => {
            info!("Loading stops from {}", path.display());
            StopRegistry::from_json_file(path)?
        }
        None => StopRegistry::builtin(),
    };
    info!("Tour has {} stops", stops.len());

    let translator = match TranslationClient::new(&config.translation) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!("Translation disabled: {}", e);
            None
        }
    };

    let state = AppState {
        leptos_options: default_leptos_options(),
        tour: TourContext {
            stops,
            map: config.map.clone(),
            source_language: config.translation.source_language.clone(),
        },
        translator,
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Listening on http://{}", config.bind_address);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutting down gracefully...");
}
