use crate::{
    config::{ClientConfig, Service},
    error::ClientError,
    http::HttpClient,
};
use model::{project::ProjectContext, pubsub::SubscriptionSpec};
use serde::Deserialize;
use tracing::info;

/// Resource record the broker returns on create
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionResource {
    pub name: String,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Client for the publish/subscribe broker, bound to one project/region
#[derive(Clone)]
pub struct PubSubClient {
    http: HttpClient,
    project: ProjectContext,
}

impl PubSubClient {
    pub fn new(project: ProjectContext, config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: HttpClient::new(config)?,
            project,
        })
    }

    /// Client against the service's resolved endpoint
    pub fn for_project(project: ProjectContext, token: &str) -> Result<Self, ClientError> {
        let config = ClientConfig::for_service(Service::PubSub, token);
        Self::new(project, config)
    }

    pub async fn create_subscription(
        &self,
        spec: &SubscriptionSpec,
    ) -> Result<SubscriptionResource, ClientError> {
        info!(
            "Creating subscription {} on topic {}",
            spec.name,
            self.project.topic_path(&spec.topic)
        );
        let path = format!("/projects/{}/subscriptions", self.project.project_id);
        self.http.post(&path, spec).await
    }
}
