use uuid::Uuid;

use crate::client::{HttpClient, RequestDescriptor};
use crate::error::ApiError;
use crate::http::ResponseFormat;
use crate::security::AuthToken;
use crate::types::integration::{
    CreateCredentialRequest, CreateCredentialResponse, DiscoverIntegrationRequest,
    DiscoverIntegrationResponse, ListCredentialsQuery, ListCredentialsResponse,
    ListIntegrationsQuery, ListIntegrationsResponse,
};

/// Credentials and integrations.
pub struct IntegrationApi<'a, S = AuthToken> {
    client: &'a HttpClient<S>,
}

impl<'a, S> IntegrationApi<'a, S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(client: &'a HttpClient<S>) -> Self {
        Self { client }
    }

    pub async fn list_credentials(
        &self,
        query: &ListCredentialsQuery,
    ) -> Result<ListCredentialsResponse, ApiError> {
        let descriptor = RequestDescriptor::get("/integration/api/v1/credentials")
            .query(query)?
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn create_credential(
        &self,
        body: &CreateCredentialRequest,
    ) -> Result<CreateCredentialResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/integration/api/v1/credentials")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn delete_credential(&self, credential_id: Uuid) -> Result<(), ApiError> {
        let descriptor =
            RequestDescriptor::delete(format!("/integration/api/v1/credentials/{credential_id}"))
                .format(ResponseFormat::Empty)
                .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn list_integrations(
        &self,
        query: &ListIntegrationsQuery,
    ) -> Result<ListIntegrationsResponse, ApiError> {
        let descriptor = RequestDescriptor::get("/integration/api/v1/integrations")
            .query(query)?
            .secure(true);
        self.client.request(descriptor).await
    }

    /// Lists the accounts reachable with a credential without onboarding them.
    pub async fn discover(
        &self,
        body: &DiscoverIntegrationRequest,
    ) -> Result<DiscoverIntegrationResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/integration/api/v1/integrations/discover")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::json_body;
    use crate::client::tests::{client_with, RecordingTransport};
    use crate::http::HttpMethod;
    use crate::types::integration::*;
    use crate::types::ConnectorType;
    use serde_json::json;

    #[tokio::test]
    async fn list_credentials_sends_query_and_no_body() {
        let transport = RecordingTransport::ok_json(json!({"credentials": [], "totalCount": 0}));
        let client = client_with(transport.clone());

        let query = ListCredentialsQuery {
            connector: Some(ConnectorType::Aws),
            page_size: Some(10),
            page_number: Some(1),
            ..Default::default()
        };
        let page = client.integration().list_credentials(&query).await.unwrap();
        assert_eq!(page.total_count, 0);

        let req = &transport.calls()[0];
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/integration/api/v1/credentials");
        assert_eq!(
            req.query,
            vec![
                ("connector".to_string(), "AWS".to_string()),
                ("pageSize".to_string(), "10".to_string()),
                ("pageNumber".to_string(), "1".to_string()),
            ]
        );
        assert!(req.body.is_none());
        assert_eq!(req.header("Authorization"), Some("Bearer t0"));
    }

    #[tokio::test]
    async fn create_credential_strips_unset_fields() {
        let id = "6f1c2a8e-1d2b-4c3d-9e8f-0a1b2c3d4e5f";
        let transport = RecordingTransport::ok_json(json!({"id": id}));
        let client = client_with(transport.clone());

        let body = CreateCredentialRequest {
            connector_type: Some(ConnectorType::Azure),
            name: Some("prod".into()),
            description: Some(String::new()),
            ..Default::default()
        };
        let created = client.integration().create_credential(&body).await.unwrap();
        assert_eq!(created.id.to_string(), id);

        let sent = json_body(&transport.calls()[0]).unwrap();
        assert_eq!(sent, json!({"connectorType": "Azure", "name": "prod"}));
    }

    #[tokio::test]
    async fn delete_credential_accepts_empty_body() {
        let transport = RecordingTransport::respond(vec![Ok(crate::http::HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        })]);
        let client = client_with(transport.clone());
        let id = uuid::Uuid::nil();
        client.integration().delete_credential(id).await.unwrap();
        assert_eq!(
            transport.calls()[0].url,
            format!("http://localhost:8080/integration/api/v1/credentials/{id}")
        );
    }
}
