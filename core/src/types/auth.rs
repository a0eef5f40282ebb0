use serde::{Deserialize, Serialize};

use crate::outcome::IsEmpty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub role: Option<Role>,
    pub connector_id: Option<String>,
    pub external_id: Option<String>,
    pub created_at: Option<String>,
    pub last_activity: Option<String>,
    pub is_active: Option<bool>,
}

/// Profile of the caller, as resolved from the bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMeResponse {
    pub id: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub member_since: Option<String>,
    pub last_login: Option<String>,
    pub color_blind_mode: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListUsersResponse {
    pub users: Vec<User>,
}

impl IsEmpty for ListUsersResponse {
    fn is_empty_payload(&self) -> bool {
        self.users.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email_address: Option<String>,
    pub role: Option<Role>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub role_name: Option<Role>,
    pub creator_user_id: Option<String>,
    pub created_at: Option<String>,
    pub active: Option<bool>,
    /// First characters of the key. The full key is only returned on creation.
    pub masked_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateApiKeyRequest {
    pub name: Option<String>,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyResponse {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub role_name: Option<Role>,
    pub created_at: Option<String>,
    pub active: Option<bool>,
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_role_does_not_fail_decoding() {
        let me: GetMeResponse =
            serde_json::from_value(json!({"email": "a@b.c", "role": "owner"})).unwrap();
        assert_eq!(me.role, Some(Role::Unknown));
    }
}
