use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Usage datapoints are passed through untouched; their shape depends on
/// the collector version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ec2InstanceWastageRequest {
    pub request_id: Option<String>,
    pub cli_version: Option<String>,
    pub identification: std::collections::BTreeMap<String, String>,
    pub instance: Option<Value>,
    pub volumes: Vec<Value>,
    pub metrics: Option<Value>,
    pub region: Option<String>,
    pub preferences: std::collections::BTreeMap<String, String>,
    pub loading: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RightSizingRecommendation {
    pub current: Option<Value>,
    pub recommended: Option<Value>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ec2InstanceWastageResponse {
    pub right_sizing: Option<RightSizingRecommendation>,
    pub ebs_right_sizing: std::collections::BTreeMap<String, RightSizingRecommendation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RdsInstanceWastageRequest {
    pub request_id: Option<String>,
    pub cli_version: Option<String>,
    pub identification: std::collections::BTreeMap<String, String>,
    pub instance: Option<Value>,
    pub metrics: Option<Value>,
    pub region: Option<String>,
    pub preferences: std::collections::BTreeMap<String, String>,
    pub loading: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RdsInstanceWastageResponse {
    pub right_sizing: Option<RightSizingRecommendation>,
}
