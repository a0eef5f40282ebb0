use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::common::ConnectorType;
use crate::outcome::IsEmpty;

/// Stored secret used to reach one or more connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: Option<Uuid>,
    pub connector_type: Option<ConnectorType>,
    pub credential_type: Option<String>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub health_status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub total_connections: Option<u64>,
    pub onboard_connections: Option<u64>,
    pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListCredentialsQuery {
    pub connector: Option<ConnectorType>,
    pub health: Option<String>,
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListCredentialsResponse {
    pub credentials: Vec<Credential>,
    pub total_count: u64,
}

impl IsEmpty for ListCredentialsResponse {
    fn is_empty_payload(&self) -> bool {
        self.credentials.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCredentialRequest {
    pub connector_type: Option<ConnectorType>,
    pub name: Option<String>,
    pub credential_type: Option<String>,
    /// Provider-specific secret fields.
    pub config: Option<Value>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCredentialResponse {
    pub id: Uuid,
}

/// A cloud account, subscription or tenant known to the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub integration_id: Option<Uuid>,
    pub provider_id: Option<String>,
    pub name: Option<String>,
    pub integration_type: Option<String>,
    pub annotations: Option<Value>,
    pub labels: Option<Value>,
    pub credential_id: Option<Uuid>,
    pub state: Option<String>,
    pub last_check: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListIntegrationsQuery {
    pub integration_type: Option<String>,
    pub name_regex: Option<String>,
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListIntegrationsResponse {
    pub integrations: Vec<Integration>,
    pub total_count: u64,
}

impl IsEmpty for ListIntegrationsResponse {
    fn is_empty_payload(&self) -> bool {
        self.integrations.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscoverIntegrationRequest {
    pub integration_type: Option<String>,
    pub credential_id: Option<Uuid>,
    pub credential_type: Option<String>,
    pub credentials: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiscoverIntegrationResponse {
    pub credential_id: Option<Uuid>,
    pub integrations: Vec<Integration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_response_tolerates_missing_fields() {
        let parsed: ListCredentialsResponse = serde_json::from_value(json!({
            "credentials": [{"id": "00000000-0000-0000-0000-000000000001", "connectorType": "AWS"}]
        }))
        .unwrap();
        assert_eq!(parsed.total_count, 0);
        assert_eq!(parsed.credentials[0].connector_type, Some(ConnectorType::Aws));
        assert!(parsed.credentials[0].name.is_none());
    }

    #[test]
    fn empty_page_is_empty_payload() {
        assert!(ListCredentialsResponse::default().is_empty_payload());
    }
}
