use crate::{
    config::{ClientConfig, Service},
    error::ClientError,
    http::HttpClient,
};
use model::{automl::ModelSpec, project::ProjectContext};
use serde::Deserialize;
use tracing::info;

/// Resource record the trainer returns on create
#[derive(Debug, Clone, Deserialize)]
pub struct ModelResource {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Client for the AutoML trainer, bound to one project/region
#[derive(Clone)]
pub struct AutoMlClient {
    http: HttpClient,
    project: ProjectContext,
}

impl AutoMlClient {
    pub fn new(project: ProjectContext, config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: HttpClient::new(config)?,
            project,
        })
    }

    /// Client against the service's resolved endpoint
    pub fn for_project(project: ProjectContext, token: &str) -> Result<Self, ClientError> {
        let config = ClientConfig::for_service(Service::AutoMl, token);
        Self::new(project, config)
    }

    pub async fn create_model(&self, spec: &ModelSpec) -> Result<ModelResource, ClientError> {
        info!("Creating model {} ({})", spec.name, spec.display_name);
        let path = format!("/{}/models", self.project.location_path());
        self.http.post(&path, spec).await
    }
}
