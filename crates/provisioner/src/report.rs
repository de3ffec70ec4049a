use serde::Serialize;

/// Summary of one provisioning run
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    /// Resource name the orchestrator assigned to the pipeline
    pub pipeline: String,
    /// Resource name the trainer assigned to the model
    pub model: String,
    /// Resource name the broker assigned to the subscription
    pub subscription: String,
    pub pipeline_started: bool,
    pub elapsed_secs: f64,
}
