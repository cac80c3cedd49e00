use graphjson_projection::UnsupportedTermError;
use oxrdfio::RdfParseError;
use reqwest::StatusCode;

/// A failure to obtain a graph from the SPARQL endpoint.
///
/// Every variant is fatal for the request that triggered the query.
#[derive(Debug, thiserror::Error)]
pub enum QueryExecutionError {
    #[error("Invalid SPARQL endpoint '{0}'")]
    InvalidEndpoint(String),
    #[error("Could not reach SPARQL endpoint: {0}")]
    Request(#[from] reqwest::Error),
    #[error("SPARQL endpoint responded with {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("SPARQL endpoint responded with unsupported content type '{0}'")]
    UnsupportedContentType(String),
    #[error("SPARQL endpoint returned malformed RDF: {0}")]
    Parse(#[from] RdfParseError),
    #[error(transparent)]
    UnsupportedTerm(#[from] UnsupportedTermError),
}
