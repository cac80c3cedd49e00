use crate::error::GatewayError;
use anyhow::anyhow;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use graphjson_projection::JsonObject;
use tracing::debug;

/// Wraps a projected document that can be converted into a pretty-printed JSON [Response].
pub struct JsonDocumentResponse(pub JsonObject);

impl IntoResponse for JsonDocumentResponse {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => {
                debug!(response = %body, "Sending JSON response.");
                (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "application/json")],
                    body,
                )
                    .into_response()
            }
            Err(e) => GatewayError::Internal(anyhow!(e)).into_response(),
        }
    }
}
