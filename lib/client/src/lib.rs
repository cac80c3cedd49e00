//! Executes SPARQL `DESCRIBE` queries against a remote endpoint and parses the answer into a
//! [`Graph`](graphjson_projection::Graph).

mod client;
mod error;
mod format;

pub use client::{DescribeClient, HttpDescribeClient, ACCEPT_RDF, DEFAULT_TIMEOUT};
pub use error::QueryExecutionError;
pub use format::{format_from_content_type, parse_graph, serialize_graph};
pub use oxrdfio::RdfFormat;
