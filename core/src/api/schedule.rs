use super::segment;
use crate::client::{HttpClient, RequestDescriptor};
use crate::error::ApiError;
use crate::security::AuthToken;
use crate::types::schedule::{
    ListJobsRequest, ListJobsResponse, TriggerComplianceQuery, TriggerComplianceResponse,
    TriggerDiscoveryRequest, TriggerDiscoveryResponse,
};

/// Discovery and compliance jobs.
pub struct ScheduleApi<'a, S = AuthToken> {
    client: &'a HttpClient<S>,
}

impl<'a, S> ScheduleApi<'a, S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(client: &'a HttpClient<S>) -> Self {
        Self { client }
    }

    pub async fn list_jobs(&self, body: &ListJobsRequest) -> Result<ListJobsResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/schedule/api/v1/jobs")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn trigger_discovery(
        &self,
        body: &TriggerDiscoveryRequest,
    ) -> Result<Vec<TriggerDiscoveryResponse>, ApiError> {
        let descriptor = RequestDescriptor::post("/schedule/api/v3/discovery/run")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }

    /// Queues an evaluation of `benchmark_id` for the selected connections.
    pub async fn trigger_compliance(
        &self,
        benchmark_id: &str,
        query: &TriggerComplianceQuery,
    ) -> Result<Vec<TriggerComplianceResponse>, ApiError> {
        let path = format!(
            "/schedule/api/v1/compliance/trigger/{}",
            segment(benchmark_id)
        );
        let descriptor = RequestDescriptor::put(path).query(query)?.secure(true);
        self.client.request(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::json_body;
    use crate::client::tests::{client_with, RecordingTransport};
    use crate::http::HttpMethod;
    use crate::types::schedule::*;
    use serde_json::json;

    #[tokio::test]
    async fn trigger_compliance_is_put_without_body() {
        let transport = RecordingTransport::ok_json(json!([{"jobId": 7, "status": "QUEUED"}]));
        let client = client_with(transport.clone());
        let query = TriggerComplianceQuery {
            connection_ids: vec!["c-1".into()],
            ..Default::default()
        };
        let jobs = client
            .schedule()
            .trigger_compliance("aws_cis_v200", &query)
            .await
            .unwrap();
        assert_eq!(jobs[0].status, Some(JobStatus::Queued));

        let req = &transport.calls()[0];
        assert_eq!(req.method, HttpMethod::Put);
        assert!(req.body.is_none());
        assert_eq!(req.query, vec![("connection_id".to_string(), "c-1".to_string())]);
    }

    #[tokio::test]
    async fn list_jobs_drops_empty_filters() {
        let transport = RecordingTransport::ok_json(json!({"jobs": []}));
        let client = client_with(transport.clone());
        let body = ListJobsRequest {
            hours: Some(24),
            status_filter: vec![JobStatus::Failed],
            ..Default::default()
        };
        let page = client.schedule().list_jobs(&body).await.unwrap();
        assert!(page.jobs.is_empty());
        assert_eq!(
            json_body(&transport.calls()[0]).unwrap(),
            json!({"hours": 24, "statusFilter": ["FAILED"]})
        );
    }
}
