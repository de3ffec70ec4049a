use serde::{Deserialize, Serialize};

/// Pipeline definition submitted to the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSpec {
    pub name: String,
    pub pipeline_id: String,
    pub tasks: Vec<TaskSpec>,
}

impl PipelineSpec {
    /// Task ids in declaration order
    pub fn task_ids(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.id.as_str()).collect()
    }
}

/// Single task descriptor within a pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub id: String,
    #[serde(flatten)]
    pub kind: TaskKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// Task type tag plus its type-specific config object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskKind {
    Ingest { source: String, format: DataFormat },
    Transform { script: String },
    Analyze { model: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataFormat {
    Csv,
    Json,
    Avro,
    Parquet,
}
