use crate::client::{HttpClient, RequestDescriptor};
use crate::error::ApiError;
use crate::security::AuthToken;
use crate::types::onboard::{ListConnectionSummaryQuery, ListConnectionSummaryResponse};

pub struct OnboardApi<'a, S = AuthToken> {
    client: &'a HttpClient<S>,
}

impl<'a, S> OnboardApi<'a, S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(client: &'a HttpClient<S>) -> Self {
        Self { client }
    }

    pub async fn list_connection_summaries(
        &self,
        query: &ListConnectionSummaryQuery,
    ) -> Result<ListConnectionSummaryResponse, ApiError> {
        let descriptor = RequestDescriptor::get("/onboard/api/v1/connections/summary")
            .query(query)?
            .secure(true);
        self.client.request(descriptor).await
    }
}
