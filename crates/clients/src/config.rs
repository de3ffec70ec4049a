use std::time::Duration;

const PIPELINES_ENDPOINT: &str = "https://datapipelines.googleapis.com/v1";
const AUTOML_ENDPOINT: &str = "https://automl.googleapis.com/v1";
const PUBSUB_ENDPOINT: &str = "https://pubsub.googleapis.com/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote service a client config targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Pipelines,
    AutoMl,
    PubSub,
}

impl Service {
    pub fn default_endpoint(self) -> &'static str {
        match self {
            Service::Pipelines => PIPELINES_ENDPOINT,
            Service::AutoMl => AUTOML_ENDPOINT,
            Service::PubSub => PUBSUB_ENDPOINT,
        }
    }

    /// Environment variable that overrides the public endpoint
    pub fn endpoint_var(self) -> &'static str {
        match self {
            Service::Pipelines => "CIRRUS_PIPELINES_ENDPOINT",
            Service::AutoMl => "CIRRUS_AUTOML_ENDPOINT",
            Service::PubSub => "CIRRUS_PUBSUB_ENDPOINT",
        }
    }

    pub fn resolve_endpoint(self) -> String {
        std::env::var(self.endpoint_var())
            .unwrap_or_else(|_| self.default_endpoint().to_string())
    }
}

/// HTTP transport configuration for one service client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Config bound to a service's resolved endpoint
    pub fn for_service(service: Service, token: impl Into<String>) -> Self {
        Self::new(service.resolve_endpoint(), token)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
