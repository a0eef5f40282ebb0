use crate::client::{HttpClient, RequestDescriptor};
use crate::error::ApiError;
use crate::security::AuthToken;
use crate::types::workspace::{About, WorkspaceList};

pub struct WorkspaceApi<'a, S = AuthToken> {
    client: &'a HttpClient<S>,
}

impl<'a, S> WorkspaceApi<'a, S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(client: &'a HttpClient<S>) -> Self {
        Self { client }
    }

    pub async fn list_workspaces(&self) -> Result<WorkspaceList, ApiError> {
        self.client
            .request(RequestDescriptor::get("/workspace/api/v1/workspaces").secure(true))
            .await
    }

    pub async fn about(&self) -> Result<About, ApiError> {
        self.client
            .request(RequestDescriptor::get("/workspace/api/v3/about").secure(true))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client_with, RecordingTransport};
    use crate::outcome::FetchOutcome;
    use serde_json::json;

    #[tokio::test]
    async fn empty_listing_is_empty_outcome() {
        let client = client_with(RecordingTransport::ok_json(json!([])));
        let outcome = FetchOutcome::from_result(client.workspace().list_workspaces().await);
        assert_eq!(outcome, FetchOutcome::Empty);
    }
}
