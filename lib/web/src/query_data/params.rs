use crate::error::GatewayError;
use crate::AppState;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::RequestPartsExt;
use serde::Deserialize;

#[derive(Deserialize)]
struct QueryDataParamsRaw {
    #[serde(default)]
    q: Option<String>,
}

/// The parameters of a `/queryData` request.
pub struct QueryDataParams {
    /// The SPARQL query to execute. `None` if the request did not provide a (non-blank) query.
    pub query: Option<String>,
}

impl QueryDataParams {
    /// Returns the query to execute, falling back to the query that describes all root resources.
    pub fn query_or_default(self, state: &AppState) -> String {
        self.query
            .unwrap_or_else(|| state.projection.default_describe_query())
    }
}

impl FromRequestParts<AppState> for QueryDataParams {
    type Rejection = GatewayError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw_params = parts
            .extract::<Query<QueryDataParamsRaw>>()
            .await
            .map_err(|e| GatewayError::BadRequest(e.to_string()))?
            .0;

        Ok(QueryDataParams {
            query: raw_params.q.filter(|query| !query.trim().is_empty()),
        })
    }
}
