use clients::error::ClientError;
use std::fmt;
use thiserror::Error;

/// The remote call a provisioning failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreatePipeline,
    CreateModel,
    CreateSubscription,
    StartPipeline,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::CreatePipeline => "create pipeline",
            Step::CreateModel => "create model",
            Step::CreateSubscription => "create subscription",
            Step::StartPipeline => "start pipeline",
        };
        f.write_str(name)
    }
}

/// Top-level errors for the provisioning sequence
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Client initialization failed: {0}")]
    Init(#[from] ClientError),

    #[error("Failed to {step}: {source}")]
    Step {
        step: Step,
        #[source]
        source: ClientError,
    },
}

impl ProvisionError {
    pub fn step(step: Step, source: ClientError) -> Self {
        Self::Step { step, source }
    }

    /// Step the failure happened in, if it got past initialization
    pub fn failed_step(&self) -> Option<Step> {
        match self {
            ProvisionError::Step { step, .. } => Some(*step),
            ProvisionError::Init(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_error_message() {
        let err = ProvisionError::step(Step::CreateModel, ClientError::Timeout);
        assert_eq!(err.to_string(), "Failed to create model: Request timed out");
        assert_eq!(err.failed_step(), Some(Step::CreateModel));
    }
}
