use crate::RootFallback;

/// The namespace of the ontology that describes responses.
pub const DEFAULT_NAMESPACE: &str = "http://example.org/ontology#";
/// The local name of the type of root resources.
pub const DEFAULT_ROOT_TYPE: &str = "getGraphOutput";
/// The field that wraps the projected root in the response document.
pub const DEFAULT_ROOT_FIELD: &str = "getGraphOutput";

/// Holds the naming conventions of a projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// The namespace that prefixes [`Self::root_type`].
    pub namespace: String,
    /// The local name of the type of root resources.
    pub root_type: String,
    /// The single top-level field of the response document.
    pub root_field: String,
    /// How to select a root if no candidate carries the instance marker.
    pub root_fallback: RootFallback,
}

impl ProjectionConfig {
    /// Returns the full IRI of the root type.
    pub fn root_type_iri(&self) -> String {
        format!("{}{}", self.namespace, self.root_type)
    }

    /// Returns the query that describes all resources of the root type.
    pub fn default_describe_query(&self) -> String {
        format!(
            "PREFIX : <{}> DESCRIBE ?s WHERE {{ ?s a :{} . }}",
            self.namespace, self.root_type
        )
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            root_type: DEFAULT_ROOT_TYPE.to_owned(),
            root_field: DEFAULT_ROOT_FIELD.to_owned(),
            root_fallback: RootFallback::default(),
        }
    }
}
