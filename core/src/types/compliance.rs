use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{ConformanceStatus, ConnectorType, SeverityLevel, SortDirection};
use crate::outcome::IsEmpty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    pub id: String,
    pub title: Option<String>,
    pub reference_code: Option<String>,
    pub description: Option<String>,
    pub logo_uri: Option<String>,
    pub category: Option<String>,
    pub document_uri: Option<String>,
    pub enabled: Option<bool>,
    pub auto_assign: Option<bool>,
    #[serde(default)]
    pub connectors: Vec<ConnectorType>,
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub controls: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Result counts per conformance status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConformanceStatusSummary {
    pub passed: u64,
    pub failed: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BenchmarkSummaryQuery {
    #[serde(rename = "connectionId")]
    pub connection_ids: Vec<String>,
    pub connector: Vec<ConnectorType>,
    pub time_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkEvaluationSummary {
    pub id: Option<String>,
    pub title: Option<String>,
    pub conformance_status_summary: Option<ConformanceStatusSummary>,
    #[serde(default)]
    pub severity_result: BTreeMap<SeverityLevel, u64>,
    pub last_job_status: Option<String>,
    pub evaluated_at: Option<i64>,
    pub connections_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub connector: Vec<ConnectorType>,
    pub severity: Option<SeverityLevel>,
    #[serde(default)]
    pub tags: BTreeMap<String, Vec<String>>,
    pub documentation: Option<String>,
    pub manual_verification: Option<bool>,
    pub query: Option<Value>,
}

/// Filters for the finding search. Unset or empty filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FindingFilters {
    #[serde(rename = "integrationID")]
    pub integration_ids: Vec<String>,
    #[serde(rename = "benchmarkID")]
    pub benchmark_ids: Vec<String>,
    #[serde(rename = "controlID")]
    pub control_ids: Vec<String>,
    pub severity: Vec<SeverityLevel>,
    pub conformance_status: Vec<ConformanceStatus>,
    pub resource_type_id: Vec<String>,
    #[serde(rename = "resourceID")]
    pub resource_ids: Vec<String>,
    pub state_active: Vec<bool>,
    pub connector: Vec<ConnectorType>,
    pub last_event: Option<TimeRange>,
    pub evaluated_at: Option<TimeRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeRange {
    pub from: Option<i64>,
    pub to: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingSort {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetFindingsRequest {
    pub filters: FindingFilters,
    pub sort: Vec<FindingSort>,
    pub limit: Option<u32>,
    /// Opaque cursor from the last finding of the previous page.
    pub after_sort_key: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: Option<String>,
    #[serde(rename = "benchmarkID")]
    pub benchmark_id: Option<String>,
    #[serde(rename = "controlID")]
    pub control_id: Option<String>,
    #[serde(rename = "integrationID")]
    pub integration_id: Option<String>,
    pub integration_name: Option<String>,
    #[serde(rename = "resourceID")]
    pub resource_id: Option<String>,
    pub resource_name: Option<String>,
    pub resource_type: Option<String>,
    pub connector: Option<ConnectorType>,
    pub severity: Option<SeverityLevel>,
    pub conformance_status: Option<ConformanceStatus>,
    pub state_active: Option<bool>,
    pub reason: Option<String>,
    pub evaluated_at: Option<i64>,
    pub last_event: Option<String>,
    #[serde(default)]
    pub sort_key: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetFindingsResponse {
    pub findings: Vec<Finding>,
    pub total_count: u64,
}

impl IsEmpty for GetFindingsResponse {
    fn is_empty_payload(&self) -> bool {
        self.findings.is_empty()
    }
}

/// A change in a finding's conformance status between two evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingEvent {
    pub id: Option<String>,
    #[serde(rename = "findingID")]
    pub finding_id: Option<String>,
    #[serde(rename = "benchmarkID")]
    pub benchmark_id: Option<String>,
    #[serde(rename = "controlID")]
    pub control_id: Option<String>,
    #[serde(rename = "integrationID")]
    pub integration_id: Option<String>,
    #[serde(rename = "resourceID")]
    pub resource_id: Option<String>,
    pub resource_type: Option<String>,
    pub previous_conformance_status: Option<ConformanceStatus>,
    pub conformance_status: Option<ConformanceStatus>,
    pub previous_state_active: Option<bool>,
    pub state_active: Option<bool>,
    pub severity: Option<SeverityLevel>,
    pub reason: Option<String>,
    pub evaluated_at: Option<i64>,
    #[serde(default)]
    pub sort_key: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FindingEventFilters {
    #[serde(rename = "benchmarkID")]
    pub benchmark_ids: Vec<String>,
    #[serde(rename = "controlID")]
    pub control_ids: Vec<String>,
    #[serde(rename = "integrationID")]
    pub integration_ids: Vec<String>,
    pub severity: Vec<SeverityLevel>,
    pub conformance_status: Vec<ConformanceStatus>,
    pub evaluated_at: Option<TimeRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetFindingEventsRequest {
    pub filters: FindingEventFilters,
    pub sort: Vec<FindingSort>,
    pub limit: Option<u32>,
    pub after_sort_key: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetFindingEventsResponse {
    pub finding_events: Vec<FindingEvent>,
    pub total_count: u64,
}

impl IsEmpty for GetFindingEventsResponse {
    fn is_empty_payload(&self) -> bool {
        self.finding_events.is_empty()
    }
}

/// All findings of one resource, rolled up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFinding {
    pub id: Option<String>,
    #[serde(rename = "integrationID")]
    pub integration_id: Option<String>,
    pub resource_name: Option<String>,
    pub resource_type: Option<String>,
    pub connector: Option<ConnectorType>,
    pub failed_count: Option<u64>,
    pub total_count: Option<u64>,
    pub evaluated_at: Option<i64>,
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub sort_key: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListResourceFindingsRequest {
    pub filters: FindingFilters,
    pub sort: Vec<FindingSort>,
    pub limit: Option<u32>,
    pub after_sort_key: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListResourceFindingsResponse {
    pub resource_findings: Vec<ResourceFinding>,
    pub total_count: u64,
}

impl IsEmpty for ListResourceFindingsResponse {
    fn is_empty_payload(&self) -> bool {
        self.resource_findings.is_empty()
    }
}
