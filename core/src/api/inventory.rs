use crate::client::{HttpClient, RequestDescriptor};
use crate::error::ApiError;
use crate::security::AuthToken;
use crate::types::inventory::{
    ListQueriesRequest, ListQueriesResponse, ListResourceTypesQuery, ListResourceTypesResponse,
    QueryHistoryEntry, RunQueryRequest, RunQueryResponse,
};

/// Resource inventory and ad-hoc queries.
pub struct InventoryApi<'a, S = AuthToken> {
    client: &'a HttpClient<S>,
}

impl<'a, S> InventoryApi<'a, S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(client: &'a HttpClient<S>) -> Self {
        Self { client }
    }

    pub async fn run_query(&self, body: &RunQueryRequest) -> Result<RunQueryResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/inventory/api/v3/query/run")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn list_queries(
        &self,
        body: &ListQueriesRequest,
    ) -> Result<ListQueriesResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/inventory/api/v3/queries")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn query_history(&self) -> Result<Vec<QueryHistoryEntry>, ApiError> {
        self.client
            .request(RequestDescriptor::get("/inventory/api/v3/query/run/history").secure(true))
            .await
    }

    pub async fn list_resource_types(
        &self,
        query: &ListResourceTypesQuery,
    ) -> Result<ListResourceTypesResponse, ApiError> {
        let descriptor = RequestDescriptor::get("/inventory/api/v2/metadata/resourcetype")
            .query(query)?
            .secure(true);
        self.client.request(descriptor).await
    }
}
