use super::segment;
use crate::client::{HttpClient, RequestDescriptor};
use crate::error::ApiError;
use crate::http::ResponseFormat;
use crate::security::AuthToken;
use crate::types::metadata::{
    ConfigMetadata, Filter, ListQueryParametersResponse, SetConfigMetadataRequest,
    SetQueryParametersRequest,
};

/// Platform settings, saved filters and query parameters.
pub struct MetadataApi<'a, S = AuthToken> {
    client: &'a HttpClient<S>,
}

impl<'a, S> MetadataApi<'a, S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(client: &'a HttpClient<S>) -> Self {
        Self { client }
    }

    pub async fn get_config(&self, key: &str) -> Result<ConfigMetadata, ApiError> {
        let path = format!("/metadata/api/v1/metadata/{}", segment(key));
        self.client
            .request(RequestDescriptor::get(path).secure(true))
            .await
    }

    pub async fn set_config(&self, body: &SetConfigMetadataRequest) -> Result<(), ApiError> {
        let descriptor = RequestDescriptor::post("/metadata/api/v1/metadata")
            .json(body)?
            .format(ResponseFormat::Empty)
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn list_filters(&self) -> Result<Vec<Filter>, ApiError> {
        self.client
            .request(RequestDescriptor::get("/metadata/api/v1/filter").secure(true))
            .await
    }

    pub async fn add_filter(&self, body: &Filter) -> Result<(), ApiError> {
        let descriptor = RequestDescriptor::post("/metadata/api/v1/filter")
            .json(body)?
            .format(ResponseFormat::Empty)
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn list_query_parameters(&self) -> Result<ListQueryParametersResponse, ApiError> {
        self.client
            .request(RequestDescriptor::get("/metadata/api/v1/query_parameter").secure(true))
            .await
    }

    pub async fn set_query_parameters(
        &self,
        body: &SetQueryParametersRequest,
    ) -> Result<(), ApiError> {
        let descriptor = RequestDescriptor::post("/metadata/api/v1/query_parameter")
            .json(body)?
            .format(ResponseFormat::Empty)
            .secure(true);
        self.client.request(descriptor).await
    }
}
