use std::{
    process::exit,
    sync::Arc,
};

use bloglist_server::{
    AppState,
    app,
    config::Config,
    store::{
        MemoryStore,
        PgStore,
        Store,
    },
};
use listenfd::ListenFd;
use tokio::net::TcpListener;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| concat!(env!("CARGO_CRATE_NAME"), "=debug,info").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = exit_on_error(Config::from_env(), "Failed to read configuration");

    let store: Arc<dyn Store> = match &config.database_url {
        Some(database_url) => {
            tracing::debug!(database_url);
            let store = exit_on_error(
                PgStore::connect(database_url).await,
                "Failed to setup the database pool",
            );
            tracing::info!("database pool is up");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, data is kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let state = AppState::new(
        store,
        &config.jwt_secret,
        chrono::Duration::seconds(config.token_ttl_seconds),
    );
    let router = app(state);

    // Support for `systemfd --no-pid -s http::3003 -- cargo watch -x run`
    let listener = if let Some(listener) = exit_on_error(
        ListenFd::from_env().take_tcp_listener(0),
        "Failed to read from listenfd",
    ) {
        exit_on_error(
            listener.set_nonblocking(true),
            "Failed to set listener to non-blocking",
        );
        exit_on_error(
            TcpListener::from_std(listener),
            "Failed to convert std listener to tokio listener",
        )
    } else {
        exit_on_error(
            TcpListener::bind(&config.bind_address).await,
            &format!("Failed to bind to address '{}'", config.bind_address),
        )
    };

    match listener.local_addr() {
        Ok(addr) => tracing::info!("listening on: {addr}"),
        Err(err) => tracing::warn!("Failed to get local address from listener: {err}"),
    }

    exit_on_error(
        axum::serve(listener, router).await,
        "Server exited with error",
    );
}

/// Helper to exit on error with logging
fn exit_on_error<T, E: std::fmt::Display>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(val) => val,
        Err(err) => {
            tracing::error!("{context}: {err}");
            exit(1);
        }
    }
}
