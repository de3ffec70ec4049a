use crate::{
    automl::{ColumnSpec, ColumnType, ModelSpec, TableSchema},
    pipeline::{DataFormat, PipelineSpec, TaskKind, TaskSpec},
    project::ProjectContext,
    pubsub::SubscriptionSpec,
};
use serde::{Deserialize, Serialize};

/// Everything one provisioning run submits, as loaded from a spec file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerSpec {
    pub project: ProjectContext,
    pub pipeline: PipelineSpec,
    pub model: ModelSpec,
    pub subscription: SubscriptionSpec,
}

impl AnalyzerSpec {
    /// Built-in spec used when no file is given on the command line
    pub fn starter() -> Self {
        let model_name = "my-model".to_string();

        Self {
            project: ProjectContext::new("my-project-id", "us-central1"),
            pipeline: PipelineSpec {
                name: "my-pipeline".to_string(),
                pipeline_id: "my-pipeline-id".to_string(),
                tasks: vec![
                    TaskSpec {
                        id: "ingest-data".to_string(),
                        kind: TaskKind::Ingest {
                            source: "gs://my-bucket/data.csv".to_string(),
                            format: DataFormat::Csv,
                        },
                        depends_on: vec![],
                    },
                    TaskSpec {
                        id: "transform-data".to_string(),
                        kind: TaskKind::Transform {
                            script: "gs://my-bucket/transform.js".to_string(),
                        },
                        depends_on: vec!["ingest-data".to_string()],
                    },
                    TaskSpec {
                        id: "analyze-data".to_string(),
                        kind: TaskKind::Analyze {
                            model: model_name.clone(),
                        },
                        depends_on: vec!["transform-data".to_string()],
                    },
                ],
            },
            model: ModelSpec {
                name: model_name,
                dataset_id: "my-dataset-id".to_string(),
                display_name: "My Model".to_string(),
                tables: vec![TableSchema {
                    name: "my-table".to_string(),
                    schema: vec![
                        ColumnSpec {
                            name: "column1".to_string(),
                            column_type: ColumnType::String,
                        },
                        ColumnSpec {
                            name: "column2".to_string(),
                            column_type: ColumnType::Integer,
                        },
                    ],
                }],
            },
            subscription: SubscriptionSpec {
                name: "my-subscription".to_string(),
                topic: "my-topic".to_string(),
                subscription_id: "my-subscription-id".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_task_order() {
        let spec = AnalyzerSpec::starter();

        assert_eq!(
            spec.pipeline.task_ids(),
            vec!["ingest-data", "transform-data", "analyze-data"]
        );

        let upstream: Vec<&[String]> = spec
            .pipeline
            .tasks
            .iter()
            .map(|t| t.depends_on.as_slice())
            .collect();
        assert!(upstream[0].is_empty());
        assert_eq!(upstream[1], ["ingest-data".to_string()]);
        assert_eq!(upstream[2], ["transform-data".to_string()]);
    }

    #[test]
    fn test_starter_model_shape() {
        let spec = AnalyzerSpec::starter();

        assert_eq!(spec.model.tables.len(), 1);
        let table = &spec.model.tables[0];
        assert_eq!(table.name, "my-table");
        assert_eq!(table.schema.len(), 2);
        assert_eq!(table.schema[0].column_type, ColumnType::String);
        assert_eq!(table.schema[1].column_type, ColumnType::Integer);
    }

    #[test]
    fn test_analyze_task_references_model() {
        let spec = AnalyzerSpec::starter();

        let analyze = spec
            .pipeline
            .tasks
            .iter()
            .find(|t| t.id == "analyze-data")
            .unwrap();
        match &analyze.kind {
            TaskKind::Analyze { model } => assert_eq!(model, &spec.model.name),
            other => panic!("unexpected task kind: {other:?}"),
        }
    }

    #[test]
    fn test_starter_round_trip() {
        let spec = AnalyzerSpec::starter();
        let json = serde_json::to_string_pretty(&spec).unwrap();
        let parsed: AnalyzerSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, spec);
    }
}
