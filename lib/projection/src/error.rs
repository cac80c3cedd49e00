use thiserror::Error;

/// An RDF term that has no counterpart in the projected data model.
///
/// Only IRIs, blank nodes and literals can be projected. Quoted triples (RDF-star) are rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unsupported RDF term '{0}'. Only IRIs, blank nodes and literals can be projected.")]
pub struct UnsupportedTermError(pub String);
