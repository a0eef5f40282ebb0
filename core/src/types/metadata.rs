use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigMetadataType {
    String,
    Int,
    Bool,
    Json,
    #[serde(other)]
    Unknown,
}

/// One platform setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMetadata {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: Option<ConfigMetadataType>,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetConfigMetadataRequest {
    pub key: String,
    pub value: Value,
}

/// Saved search filter shown in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub name: String,
    #[serde(default)]
    pub kv_pairs: std::collections::BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameter {
    pub key: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListQueryParametersResponse {
    pub query_parameters: Vec<QueryParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetQueryParametersRequest {
    pub query_parameters: Vec<QueryParameter>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_type_field_is_named_type() {
        let meta: ConfigMetadata = serde_json::from_value(json!({
            "key": "workspace_date_time_format",
            "type": "string",
            "value": "RFC3339"
        }))
        .unwrap();
        assert_eq!(meta.kind, Some(ConfigMetadataType::String));
    }
}
