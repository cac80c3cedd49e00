use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use graphjson_client::QueryExecutionError;
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("SPARQL query failed: {0}")]
    QueryExecution(#[from] QueryExecutionError),
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::QueryExecution(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(%status, error = %self, "Request failed.");
        }

        (status, self.to_string()).into_response()
    }
}
