mod params;
mod response;

use crate::error::GatewayError;
use crate::AppState;
use axum::extract::State;
use graphjson_client::{serialize_graph, RdfFormat};
use graphjson_projection::{project_document, Graph};
use tracing::{debug, info, Level};

pub use params::QueryDataParams;
pub use response::JsonDocumentResponse;

/// Describes the requested resources and answers with their JSON projection.
pub async fn handle_query_data(
    State(state): State<AppState>,
    params: QueryDataParams,
) -> Result<JsonDocumentResponse, GatewayError> {
    let query = params.query_or_default(&state);
    info!(%query, "Executing SPARQL query.");

    let graph = state.client.execute_describe(&query).await?;
    log_graph(&graph);

    Ok(JsonDocumentResponse(project_document(
        &graph,
        &state.projection,
    )))
}

fn log_graph(graph: &Graph) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }
    match serialize_graph(graph, RdfFormat::Turtle) {
        Ok(turtle) => debug!(
            triples = graph.len(),
            graph = %String::from_utf8_lossy(&turtle),
            "Received RDF graph."
        ),
        Err(e) => debug!(error = %e, "Could not serialize the received graph."),
    }
}
