use provisioner::error::ProvisionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the spec file: {0}")]
    SpecFileRead(#[from] std::io::Error),

    #[error("Failed to parse the spec file as JSON: {0}")]
    SpecParse(#[from] serde_json::Error),

    #[error("Invalid env file: {0}")]
    EnvFile(String),

    #[error("No access token found; set CIRRUS_ACCESS_TOKEN or GCP_ACCESS_TOKEN")]
    MissingAccessToken,

    #[error("Provisioning failed: {0}")]
    Provision(#[from] ProvisionError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),
}
