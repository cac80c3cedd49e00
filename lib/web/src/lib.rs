//! The HTTP surface of GraphJSON.
//!
//! - `GET /queryData?q=<query>` executes a `DESCRIBE` query and answers with the projected JSON
//!   document. Without `q`, all resources of the root type are described.
//! - `GET /stop` stops the gateway.

use axum::{routing::get, Router};
use graphjson_client::HttpDescribeClient;
use std::sync::Arc;
use tracing::{info, warn};

mod config;
mod error;
mod query_data;
mod state;
mod stop;

pub use config::{GatewayConfig, DEFAULT_BIND, DEFAULT_ENDPOINT};
pub use error::GatewayError;
pub use state::AppState;
pub use stop::STOP_MESSAGE;

use crate::query_data::handle_query_data;
use crate::stop::handle_stop;

/// Starts the gateway and returns once it has been stopped.
pub async fn serve(config: GatewayConfig) -> anyhow::Result<()> {
    let client = HttpDescribeClient::new(&config.endpoint, config.request_timeout)?;
    let state = AppState::new(Arc::new(client), config.projection);
    let shutdown = Arc::clone(&state.shutdown);

    let app = create_router(state);
    let app = if config.cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(config.bind.as_str()).await?;
    info!(
        address = %listener.local_addr()?,
        endpoint = %config.endpoint,
        "Listening for queries on /queryData. Send GET /stop to stop the gateway."
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;
    info!("Gateway stopped.");
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/queryData", get(handle_query_data))
        .route("/stop", get(handle_stop))
        .with_state(state)
}

async fn shutdown_signal(stop_requested: Arc<tokio::sync::Notify>) {
    tokio::select! {
        () = stop_requested.notified() => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!(error = %e, "Could not listen for Ctrl-C.");
                stop_requested.notified().await;
            }
        }
    }
}
