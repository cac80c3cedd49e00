use graphjson_client::DEFAULT_TIMEOUT;
use graphjson_projection::ProjectionConfig;
use std::time::Duration;

/// The address the gateway listens on by default.
pub const DEFAULT_BIND: &str = "localhost:8066";
/// The SPARQL endpoint queried by default.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3030/defaultOpenapi/query";

/// Holds the configuration for a GraphJSON gateway.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// The IP address or DNS name that the socket binds to.
    pub bind: String,
    /// The SPARQL query endpoint that answers `DESCRIBE` queries.
    pub endpoint: String,
    /// Time limit for a single request to the endpoint.
    pub request_timeout: Duration,
    /// Whether CORS is enabled.
    pub cors: bool,
    /// The naming conventions used to project responses.
    pub projection: ProjectionConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            request_timeout: DEFAULT_TIMEOUT,
            cors: false,
            projection: ProjectionConfig::default(),
        }
    }
}
