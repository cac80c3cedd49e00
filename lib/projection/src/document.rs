use crate::{resolve_root, Graph, JsonObject, JsonValue, ProjectionConfig, ResourceProjector};
use tracing::debug;

/// Projects `graph` into the response document `{ "<root_field>": <root> }`.
///
/// If the graph has no root resource, the root is projected as an empty object.
pub fn project_document(graph: &Graph, config: &ProjectionConfig) -> JsonObject {
    let root_type = config.root_type_iri();
    let root = match resolve_root(graph, &root_type, config.root_fallback) {
        Some(selection) => {
            debug!(
                root = %selection.resource(),
                fallback = selection.is_fallback(),
                "Projecting root resource."
            );
            ResourceProjector::new(graph).project_root(selection.resource())
        }
        None => {
            debug!(%root_type, triples = graph.len(), "No root resource found.");
            JsonObject::new()
        }
    };

    let mut document = JsonObject::new();
    document.insert(config.root_field.as_str(), JsonValue::Object(root));
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ResourceId, RootFallback, Triple, Value};
    use oxrdf::vocab::rdf;

    #[test]
    fn empty_graph_yields_empty_root() {
        let document = project_document(&Graph::new(), &ProjectionConfig::default());

        assert_eq!(
            serde_json::to_string(&document).unwrap(),
            r#"{"getGraphOutput":{}}"#
        );
    }

    #[test]
    fn uses_configured_names() {
        let config = ProjectionConfig {
            namespace: "http://ex.org/".to_owned(),
            root_type: "Answer".to_owned(),
            root_field: "answer".to_owned(),
            root_fallback: RootFallback::Reject,
        };
        let root = ResourceId::iri("http://ex.org/answer_Instance");
        let graph: Graph = [
            Triple::new(root.clone(), rdf::TYPE.as_str(), ResourceId::iri("http://ex.org/Answer")),
            Triple::new(root, "http://ex.org/status", Value::literal("ok")),
        ]
        .into_iter()
        .collect();

        let document = project_document(&graph, &config);

        assert_eq!(
            serde_json::to_string(&document).unwrap(),
            r#"{"answer":{"status":"ok"}}"#
        );
    }
}
