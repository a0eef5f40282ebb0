use super::segment;
use crate::client::{HttpClient, RequestDescriptor};
use crate::error::ApiError;
use crate::http::ResponseFormat;
use crate::security::AuthToken;
use crate::types::auth::{
    ApiKey, CreateApiKeyRequest, CreateApiKeyResponse, CreateUserRequest, GetMeResponse,
    ListUsersResponse,
};

/// Users and API keys.
pub struct AuthApi<'a, S = AuthToken> {
    client: &'a HttpClient<S>,
}

impl<'a, S> AuthApi<'a, S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(client: &'a HttpClient<S>) -> Self {
        Self { client }
    }

    pub async fn me(&self) -> Result<GetMeResponse, ApiError> {
        self.client
            .request(RequestDescriptor::get("/auth/api/v1/me").secure(true))
            .await
    }

    pub async fn list_users(&self) -> Result<ListUsersResponse, ApiError> {
        self.client
            .request(RequestDescriptor::get("/auth/api/v1/users").secure(true))
            .await
    }

    pub async fn create_user(&self, body: &CreateUserRequest) -> Result<(), ApiError> {
        let descriptor = RequestDescriptor::post("/auth/api/v1/user")
            .json(body)?
            .format(ResponseFormat::Empty)
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let descriptor =
            RequestDescriptor::delete(format!("/auth/api/v1/user/{}", segment(user_id)))
                .format(ResponseFormat::Empty)
                .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn list_api_keys(&self) -> Result<Vec<ApiKey>, ApiError> {
        self.client
            .request(RequestDescriptor::get("/auth/api/v1/keys").secure(true))
            .await
    }

    /// Creates a key. The response is the only place the full token appears.
    pub async fn create_api_key(
        &self,
        body: &CreateApiKeyRequest,
    ) -> Result<CreateApiKeyResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/auth/api/v1/keys")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn delete_api_key(&self, key_id: u64) -> Result<(), ApiError> {
        let descriptor = RequestDescriptor::delete(format!("/auth/api/v1/key/{key_id}/delete"))
            .format(ResponseFormat::Empty)
            .secure(true);
        self.client.request(descriptor).await
    }
}
