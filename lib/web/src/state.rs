use graphjson_client::DescribeClient;
use graphjson_projection::ProjectionConfig;
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn DescribeClient>,
    pub projection: Arc<ProjectionConfig>,
    /// Notified once a client asks the gateway to stop.
    pub shutdown: Arc<Notify>,
}

impl AppState {
    pub fn new(client: Arc<dyn DescribeClient>, projection: ProjectionConfig) -> Self {
        Self {
            client,
            projection: Arc::new(projection),
            shutdown: Arc::new(Notify::new()),
        }
    }
}
