use crate::{
    error::{ProvisionError, Step},
    report::ProvisionReport,
};
use clients::{automl::AutoMlClient, pipelines::DataPipelineClient, pubsub::PubSubClient};
use model::spec::AnalyzerSpec;
use tracing::info;

/// Provision the analyzer described by `spec` against the resolved
/// service endpoints.
pub async fn run(spec: &AnalyzerSpec, token: &str) -> Result<ProvisionReport, ProvisionError> {
    Provisioner::for_project(spec, token)?.provision(spec).await
}

/// Issues the four provisioning calls, strictly in sequence
pub struct Provisioner {
    pipelines: DataPipelineClient,
    automl: AutoMlClient,
    pubsub: PubSubClient,
}

impl Provisioner {
    pub fn new(pipelines: DataPipelineClient, automl: AutoMlClient, pubsub: PubSubClient) -> Self {
        Self {
            pipelines,
            automl,
            pubsub,
        }
    }

    fn for_project(spec: &AnalyzerSpec, token: &str) -> Result<Self, ProvisionError> {
        let project = spec.project.clone();
        Ok(Self::new(
            DataPipelineClient::for_project(project.clone(), token)?,
            AutoMlClient::for_project(project.clone(), token)?,
            PubSubClient::for_project(project, token)?,
        ))
    }

    /// Create pipeline, create model, create subscription, then start the
    /// pipeline. The first failure aborts the sequence; earlier resources
    /// are left as created.
    pub async fn provision(&self, spec: &AnalyzerSpec) -> Result<ProvisionReport, ProvisionError> {
        let start_time = std::time::Instant::now();
        info!(
            "Provisioning analyzer for {} ({} tasks)",
            spec.project.location_path(),
            spec.pipeline.tasks.len()
        );

        let pipeline = self
            .pipelines
            .create_pipeline(&spec.pipeline)
            .await
            .map_err(|e| ProvisionError::step(Step::CreatePipeline, e))?;
        info!("Created pipeline {}", pipeline.name);

        let model = self
            .automl
            .create_model(&spec.model)
            .await
            .map_err(|e| ProvisionError::step(Step::CreateModel, e))?;
        info!("Created model {}", model.name);

        let subscription = self
            .pubsub
            .create_subscription(&spec.subscription)
            .await
            .map_err(|e| ProvisionError::step(Step::CreateSubscription, e))?;
        info!("Created subscription {}", subscription.name);

        self.pipelines
            .start_pipeline(&spec.pipeline.name)
            .await
            .map_err(|e| ProvisionError::step(Step::StartPipeline, e))?;

        let duration = start_time.elapsed();
        info!(
            "Analyzer initialized, pipeline {} running ({:.2}s)",
            spec.pipeline.name,
            duration.as_secs_f64()
        );

        Ok(ProvisionReport {
            pipeline: pipeline.name,
            model: model.name,
            subscription: subscription.name,
            pipeline_started: true,
            elapsed_secs: duration.as_secs_f64(),
        })
    }
}
