//! Projects the RDF graph returned by a SPARQL `DESCRIBE` query into a nested JSON document.
//!
//! The projection follows a naming convention instead of an explicit schema:
//! - the root resource is the resource of the configured type whose IRI contains `_Instance`,
//! - properties are keyed by the local name of their predicate,
//! - single values become plain fields while repeated values become arrays,
//! - `results` (and `versions` below the root) are always arrays.
//!
//! Everything in this crate is synchronous and free of I/O. Fetching the graph is the job of the
//! `graphjson-client` crate.

mod config;
mod document;
mod error;
mod graph;
mod grouping;
mod json;
mod projector;
mod repair;
mod root;
mod term;

pub use config::{ProjectionConfig, DEFAULT_NAMESPACE, DEFAULT_ROOT_FIELD, DEFAULT_ROOT_TYPE};
pub use document::project_document;
pub use error::UnsupportedTermError;
pub use graph::Graph;
pub use grouping::{group_properties, local_name, PropertyGroup, TYPE_PROPERTY};
pub use json::{JsonObject, JsonValue};
pub use projector::{ProjectionLevel, ResourceProjector, RESULTS_PROPERTY, VERSIONS_PROPERTY};
pub use repair::{detail_candidate, PLACEHOLDER_MARKER};
pub use root::{resolve_root, RootFallback, RootSelection, INSTANCE_MARKER};
pub use term::{ResourceId, Triple, Value};
