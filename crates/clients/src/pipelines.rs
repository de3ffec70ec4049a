use crate::{
    config::{ClientConfig, Service},
    error::ClientError,
    http::HttpClient,
};
use model::{pipeline::PipelineSpec, project::ProjectContext};
use serde::Deserialize;
use tracing::info;

/// Resource record the orchestrator returns on create
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineResource {
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// Client for the data-pipeline orchestrator, bound to one project/region
#[derive(Clone)]
pub struct DataPipelineClient {
    http: HttpClient,
    project: ProjectContext,
}

impl DataPipelineClient {
    pub fn new(project: ProjectContext, config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: HttpClient::new(config)?,
            project,
        })
    }

    /// Client against the service's resolved endpoint
    pub fn for_project(project: ProjectContext, token: &str) -> Result<Self, ClientError> {
        let config = ClientConfig::for_service(Service::Pipelines, token);
        Self::new(project, config)
    }

    pub async fn create_pipeline(
        &self,
        spec: &PipelineSpec,
    ) -> Result<PipelineResource, ClientError> {
        info!("Creating pipeline {}", spec.name);
        let path = format!("/{}/pipelines", self.project.location_path());
        self.http.post(&path, spec).await
    }

    pub async fn start_pipeline(&self, name: &str) -> Result<(), ClientError> {
        info!("Starting pipeline {}", name);
        let path = format!("/{}/pipelines/{}:start", self.project.location_path(), name);
        self.http.post_and_discard(&path).await
    }
}
