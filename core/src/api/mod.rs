//! Endpoint catalog.
//!
//! One borrowed view per backend service, reached through an accessor on
//! [`HttpClient`] (`client.integration().list_credentials(..)`). Methods
//! interpolate path parameters, attach the query or body and delegate to
//! [`HttpClient::request`]. They hold no state.

mod auth;
mod compliance;
mod integration;
mod inventory;
mod metadata;
mod onboard;
mod schedule;
mod wastage;
mod workspace;

pub use auth::AuthApi;
pub use compliance::ComplianceApi;
pub use integration::IntegrationApi;
pub use inventory::InventoryApi;
pub use metadata::MetadataApi;
pub use onboard::OnboardApi;
pub use schedule::ScheduleApi;
pub use wastage::WastageApi;
pub use workspace::WorkspaceApi;

use std::borrow::Cow;

use crate::client::HttpClient;

/// Percent-encodes one path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

impl<S> HttpClient<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn auth(&self) -> AuthApi<'_, S> {
        AuthApi::new(self)
    }

    pub fn compliance(&self) -> ComplianceApi<'_, S> {
        ComplianceApi::new(self)
    }

    pub fn integration(&self) -> IntegrationApi<'_, S> {
        IntegrationApi::new(self)
    }

    pub fn inventory(&self) -> InventoryApi<'_, S> {
        InventoryApi::new(self)
    }

    pub fn metadata(&self) -> MetadataApi<'_, S> {
        MetadataApi::new(self)
    }

    pub fn onboard(&self) -> OnboardApi<'_, S> {
        OnboardApi::new(self)
    }

    pub fn schedule(&self) -> ScheduleApi<'_, S> {
        ScheduleApi::new(self)
    }

    pub fn wastage(&self) -> WastageApi<'_, S> {
        WastageApi::new(self)
    }

    pub fn workspace(&self) -> WorkspaceApi<'_, S> {
        WorkspaceApi::new(self)
    }
}
