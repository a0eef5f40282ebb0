use crate::client::{HttpClient, RequestDescriptor};
use crate::error::ApiError;
use crate::security::AuthToken;
use crate::types::wastage::{
    Ec2InstanceWastageRequest, Ec2InstanceWastageResponse, RdsInstanceWastageRequest,
    RdsInstanceWastageResponse,
};

/// Right-sizing recommendations.
pub struct WastageApi<'a, S = AuthToken> {
    client: &'a HttpClient<S>,
}

impl<'a, S> WastageApi<'a, S>
where
    S: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(client: &'a HttpClient<S>) -> Self {
        Self { client }
    }

    pub async fn ec2_instance(
        &self,
        body: &Ec2InstanceWastageRequest,
    ) -> Result<Ec2InstanceWastageResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/wastage/api/v1/wastage/ec2-instance")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }

    pub async fn rds_instance(
        &self,
        body: &RdsInstanceWastageRequest,
    ) -> Result<RdsInstanceWastageResponse, ApiError> {
        let descriptor = RequestDescriptor::post("/wastage/api/v1/wastage/aws-rds")
            .json(body)?
            .secure(true);
        self.client.request(descriptor).await
    }
}
