use serde::{Deserialize, Serialize};

/// Dataset/model definition submitted to the trainer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub name: String,
    pub dataset_id: String,
    pub display_name: String,
    pub tables: Vec<TableSchema>,
}

/// Tabular schema within a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub schema: Vec<ColumnSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnType {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_column_wire_shape() {
        let column = ColumnSpec {
            name: "column2".to_string(),
            column_type: ColumnType::Integer,
        };

        let value = serde_json::to_value(&column).unwrap();
        assert_eq!(value, json!({ "name": "column2", "type": "INTEGER" }));
    }

    #[test]
    fn test_model_round_trip() {
        let model = ModelSpec {
            name: "my-model".to_string(),
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
        };

        let json = serde_json::to_string(&model).unwrap();
        let parsed: ModelSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, model);
    }
}
