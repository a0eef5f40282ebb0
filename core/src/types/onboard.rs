use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::ConnectorType;
use crate::outcome::IsEmpty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionLifecycleState {
    Onboard,
    Disabled,
    Discovered,
    InProgress,
    Archived,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: Option<Uuid>,
    #[serde(rename = "providerConnectionID")]
    pub provider_connection_id: Option<String>,
    pub provider_connection_name: Option<String>,
    pub connector: Option<ConnectorType>,
    pub email: Option<String>,
    pub lifecycle_state: Option<ConnectionLifecycleState>,
    #[serde(rename = "credentialID")]
    pub credential_id: Option<Uuid>,
    pub credential_name: Option<String>,
    pub health_state: Option<String>,
    pub last_health_check_time: Option<String>,
    pub onboard_date: Option<String>,
    pub resource_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListConnectionSummaryQuery {
    pub connector: Vec<ConnectorType>,
    #[serde(rename = "connectionId")]
    pub connection_ids: Vec<String>,
    pub lifecycle_state: Option<ConnectionLifecycleState>,
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
    pub need_cost: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListConnectionSummaryResponse {
    pub connection_count: u64,
    pub total_resource_count: u64,
    pub connections: Vec<Connection>,
}

impl IsEmpty for ListConnectionSummaryResponse {
    fn is_empty_payload(&self) -> bool {
        self.connections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_query;

    #[test]
    fn summary_query_repeats_list_values() {
        let query = ListConnectionSummaryQuery {
            connector: vec![ConnectorType::Aws, ConnectorType::Azure],
            page_size: Some(5),
            ..Default::default()
        };
        let pairs = encode_query(&query).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("connector".to_string(), "AWS".to_string()),
                ("connector".to_string(), "Azure".to_string()),
                ("pageSize".to_string(), "5".to_string()),
            ]
        );
    }
}
