use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{ConnectorType, Page, SortDirection};
use crate::outcome::IsEmpty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryEngine {
    Sql,
    #[serde(rename = "cloudql")]
    CloudQl,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySort {
    pub field: String,
    pub direction: SortDirection,
}

/// Ad-hoc query against the inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunQueryRequest {
    pub query: Option<String>,
    pub engine: Option<QueryEngine>,
    pub page: Option<Page>,
    pub sorts: Vec<QuerySort>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunQueryResponse {
    pub title: Option<String>,
    pub query: Option<String>,
    pub headers: Vec<String>,
    /// Row-major cells; each row has one value per header.
    pub result: Vec<Vec<Value>>,
}

impl IsEmpty for RunQueryResponse {
    fn is_empty_payload(&self) -> bool {
        self.result.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedQuery {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub connectors: Vec<ConnectorType>,
    pub query: Option<String>,
    #[serde(default)]
    pub tags: std::collections::BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListQueriesRequest {
    pub title_filter: Option<String>,
    pub connectors: Vec<ConnectorType>,
    pub per_page: Option<u32>,
    pub cursor: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListQueriesResponse {
    pub items: Vec<NamedQuery>,
    pub total_count: u64,
}

impl IsEmpty for ListQueriesResponse {
    fn is_empty_payload(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryHistoryEntry {
    pub query: Option<String>,
    pub executed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceType {
    pub resource_type: Option<String>,
    pub resource_label: Option<String>,
    pub service_name: Option<String>,
    pub connector: Option<ConnectorType>,
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListResourceTypesQuery {
    pub connector: Vec<ConnectorType>,
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListResourceTypesResponse {
    pub resource_types: Vec<ResourceType>,
    pub total_count: u64,
}

impl IsEmpty for ListResourceTypesResponse {
    fn is_empty_payload(&self) -> bool {
        self.resource_types.is_empty()
    }
}
