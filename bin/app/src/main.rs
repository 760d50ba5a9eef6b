#[cfg(feature = "serve")]
#[tokio::main]
async fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(report) = serve().await {
        tracing::error!(error = %report, "server failed");
        std::process::exit(1);
    }
}

/// Serves the built site until Ctrl-C.
#[cfg(feature = "serve")]
async fn serve() -> hashnav_core::Result<(), hashnav_app::error::ServeError> {
    use hashnav_app::{config::ServeConfig, error::ServeError};
    use tower_http::services::ServeDir;

    let config = ServeConfig::from_env().map_err(|e| ServeError::Config {
        details: e.to_string(),
    })?;
    tracing::info!(site_root = %config.site_root.display(), "Loaded configuration");

    let app = axum::Router::new()
        .fallback_service(ServeDir::new(&config.site_root).append_index_html_on_directories(true));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|e| ServeError::Bind {
            addr: config.addr.to_string(),
            details: e.to_string(),
        })?;
    tracing::info!("listening on http://{}", config.addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServeError::Serve {
            details: e.to_string(),
        })?;

    tracing::info!("server stopped");
    Ok(())
}

#[cfg(feature = "serve")]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(not(feature = "serve"))]
fn main() {
    // The browser build starts through `hashnav_app::start`.
}
