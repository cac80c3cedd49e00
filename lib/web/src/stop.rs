use crate::AppState;
use axum::extract::State;
use tracing::info;

pub const STOP_MESSAGE: &str = "Server stopped.";

/// Answers the request and then asks the gateway to shut down gracefully.
pub async fn handle_stop(State(state): State<AppState>) -> &'static str {
    info!("Received stop request. Shutting down.");
    state.shutdown.notify_one();
    STOP_MESSAGE
}
