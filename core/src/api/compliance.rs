use super::segment;
use crate::client::{HttpClient, RequestDescriptor};
use crate::error::ApiError;
use crate::security::AuthToken;
use crate::types::compliance::{
    Benchmark, BenchmarkEvaluationSummary, BenchmarkSummaryQuery, Control,
    GetFindingEventsRequest, GetFindingEventsResponse, GetFindingsRequest, GetFindingsResponse,
    ListResourceFindingsRequest, ListResourceFindingsResponse,
};

/// Benchmarks, controls and findings.
pub struct ComplianceApi<'a, S = AuthToken> {
    client: &'a HttpClient<S>,
}

impl<'a, S> ComplianceApi<'a, S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(client: &'a HttpClient<S>) -> Self {
        Self { client }
    }

    pub async fn list_benchmarks(&self) -> Result<Vec<Benchmark>, ApiError> {
        self.client
            .request(RequestDescriptor::get("/compliance/api/v1/benchmarks").secure(true))
            .await
    }

    pub async fn benchmark_summary(
        &self,
        benchmark_id: &str,
        query: &BenchmarkSummaryQuery,
    ) -> Result<BenchmarkEvaluationSummary, ApiError> {
        let path = format!(
            "/compliance/api/v1/benchmarks/{}/summary",
            segment(benchmark_id)
        );
        let descriptor = RequestDescriptor::get(path).query(query)?.secure(true);
        self.client.request(descriptor).await
    }

    pub async fn get_control(&self, control_id: &str) -> Result<Control, ApiError> {
        let path = format!("/compliance/api/v1/controls/{}", segment(control_id));
        self.client
            .request(RequestDescriptor::get(path).secure(true))
            .await
    }

    pub async fn get_findings(
        &self,
        body: &GetFindingsRequest,
    ) -> Result<GetFindingsResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/compliance/api/v1/findings")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn get_finding_events(
        &self,
        body: &GetFindingEventsRequest,
    ) -> Result<GetFindingEventsResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/compliance/api/v1/finding-events")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn list_resource_findings(
        &self,
        body: &ListResourceFindingsRequest,
    ) -> Result<ListResourceFindingsResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/compliance/api/v1/resource-findings")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }
}
