use serde::{Deserialize, Serialize};

use crate::outcome::IsEmpty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub size: Option<String>,
    pub tier: Option<String>,
    pub owner_id: Option<String>,
    pub created_at: Option<String>,
    pub is_bootstrap_input_finished: Option<bool>,
    pub is_created: Option<bool>,
}

/// Wrapper so an empty workspace listing can be told apart from a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceList(pub Vec<Workspace>);

impl IsEmpty for WorkspaceList {
    fn is_empty_payload(&self) -> bool {
        self.0.is_empty()
    }
}

/// Deployment facts reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub app_version: Option<String>,
    pub workspace_creation_time: Option<String>,
    pub users: Option<u64>,
    pub integrations: Option<u64>,
    pub total_spent: Option<f64>,
    pub dex_connectors: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn workspace_list_is_a_bare_array() {
        let list: WorkspaceList =
            serde_json::from_value(json!([{"id": "ws-1", "name": "main"}])).unwrap();
        assert_eq!(list.0.len(), 1);
        assert!(!list.is_empty_payload());
        assert!(WorkspaceList::default().is_empty_payload());
    }
}
