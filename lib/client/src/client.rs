use crate::{format_from_content_type, parse_graph, QueryExecutionError};
use async_trait::async_trait;
use graphjson_projection::Graph;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use std::time::{Duration, Instant};
use tracing::debug;

/// The RDF formats requested from the endpoint, in order of preference.
pub const ACCEPT_RDF: &str = "application/n-triples, text/turtle;q=0.9, application/rdf+xml;q=0.8";
/// The default time limit for a single request to the endpoint.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Executes `DESCRIBE` queries.
#[async_trait]
pub trait DescribeClient: Send + Sync {
    /// Executes `query` and returns the described graph.
    ///
    /// Fails if the endpoint cannot be reached, rejects the query, or answers with malformed RDF.
    async fn execute_describe(&self, query: &str) -> Result<Graph, QueryExecutionError>;
}

/// A [`DescribeClient`] for a SPARQL 1.1 Protocol endpoint.
#[derive(Clone, Debug)]
pub struct HttpDescribeClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpDescribeClient {
    /// Creates a client for `endpoint` whose requests fail after `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, QueryExecutionError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| QueryExecutionError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl DescribeClient for HttpDescribeClient {
    async fn execute_describe(&self, query: &str) -> Result<Graph, QueryExecutionError> {
        let start = Instant::now();
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("query", query)])
            .header(ACCEPT, ACCEPT_RDF)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QueryExecutionError::Status { status, message });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let format = format_from_content_type(content_type.as_deref())?;
        let body = response.bytes().await?;
        let graph = parse_graph(&body, format)?;

        debug!(
            endpoint = %self.endpoint,
            format = format.name(),
            triples = graph.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Executed DESCRIBE query."
        );
        Ok(graph)
    }
}
