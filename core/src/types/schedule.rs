use serde::{Deserialize, Serialize};

use super::common::{ConnectorType, SortDirection};
use crate::outcome::IsEmpty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Created,
    Queued,
    InProgress,
    Succeeded,
    Completed,
    Failed,
    Timeout,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    /// Whether the job will not change state again.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobStatus::Succeeded
                | JobStatus::Completed
                | JobStatus::Failed
                | JobStatus::Timeout
                | JobStatus::Canceled
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Discovery,
    Compliance,
    Analytics,
    Query,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub job_type: Option<JobType>,
    pub title: Option<String>,
    #[serde(rename = "connectionID")]
    pub connection_id: Option<String>,
    pub connection_provider_name: Option<String>,
    pub status: Option<JobStatus>,
    pub failure_message: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListJobsRequest {
    pub hours: Option<u32>,
    pub page_start: Option<u32>,
    pub page_end: Option<u32>,
    pub status_filter: Vec<JobStatus>,
    pub type_filters: Vec<JobType>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortDirection>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobSummary {
    pub status: Option<JobStatus>,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListJobsResponse {
    pub jobs: Vec<Job>,
    pub summaries: Vec<JobSummary>,
}

impl IsEmpty for ListJobsResponse {
    fn is_empty_payload(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriggerDiscoveryIntegration {
    #[serde(rename = "integrationID")]
    pub integration_id: Option<String>,
    pub provider_id: Option<String>,
    pub integration_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriggerDiscoveryRequest {
    pub integration_info: Vec<TriggerDiscoveryIntegration>,
    pub resource_types: Vec<String>,
    pub force_full: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerDiscoveryResponse {
    #[serde(rename = "integrationID")]
    pub integration_id: Option<String>,
    pub job_id: Option<u64>,
    pub resource_type: Option<String>,
    pub status: Option<JobStatus>,
    pub failure_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriggerComplianceQuery {
    #[serde(rename = "connection_id")]
    pub connection_ids: Vec<String>,
    pub connector: Vec<ConnectorType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerComplianceResponse {
    pub job_id: Option<u64>,
    #[serde(rename = "benchmarkID")]
    pub benchmark_id: Option<String>,
    pub status: Option<JobStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn job_status_wire_names() {
        assert_eq!(
            serde_json::to_value(JobStatus::InProgress).unwrap(),
            json!("IN_PROGRESS")
        );
        let parsed: JobStatus = serde_json::from_value(json!("SUMMARIZER_IN_PROGRESS")).unwrap();
        assert_eq!(parsed, JobStatus::Unknown);
    }

    #[test]
    fn terminal_states() {
        assert!(JobStatus::Failed.is_terminal());
        assert!(JobStatus::Succeeded.is_terminal());
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Unknown.is_terminal());
    }
}
