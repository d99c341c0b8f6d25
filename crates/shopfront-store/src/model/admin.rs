//! Administrator account records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::QuerySchema;
use crate::record::{FieldValue, Record};

/// Query configuration for the admins collection.
pub const ADMIN_SCHEMA: QuerySchema = QuerySchema {
    searchable: &["id", "username", "email", "role"],
    sortable: &["id", "username", "email", "role", "createdAt"],
    default_sort: "createdAt",
};

/// Role assigned to freshly created admins when none is provided.
pub const DEFAULT_ADMIN_ROLE: &str = "Current Admin";

/// An administrator account.
///
/// The `password` field holds an argon2id hash and is never serialized; the
/// HTTP layer exposes admins through redacted response types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub profile_picture: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for inserting a new admin.
///
/// `password` must already be hashed; the store never sees plaintext
/// credentials.
#[derive(Debug, Clone, Default)]
pub struct NewAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub role: Option<String>,
    pub profile_picture: Option<String>,
}

impl From<NewAdmin> for Admin {
    fn from(new_admin: NewAdmin) -> Self {
        let now = Timestamp::now();
        Self {
            id: format!("ADMIN-{}", Uuid::new_v4()),
            username: new_admin.username.trim().to_owned(),
            email: new_admin.email.trim().to_lowercase(),
            phone_number: new_admin.phone_number.trim().to_owned(),
            role: new_admin
                .role
                .as_deref()
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .unwrap_or(DEFAULT_ADMIN_ROLE)
                .to_owned(),
            first_name: new_admin.first_name.trim().to_owned(),
            last_name: new_admin.last_name.trim().to_owned(),
            address: new_admin.address.trim().to_owned(),
            password: new_admin.password,
            profile_picture: new_admin.profile_picture.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for Admin {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "username" => Some(self.username.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "createdAt" => Some(self.created_at.into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_admin_defaults() {
        let admin = Admin::from(NewAdmin {
            username: "  jsmith  ".to_owned(),
            email: "JSmith@Example.COM".to_owned(),
            password: "$argon2id$stub".to_owned(),
            ..Default::default()
        });

        assert!(admin.id.starts_with("ADMIN-"));
        assert_eq!(admin.username, "jsmith");
        assert_eq!(admin.email, "jsmith@example.com");
        assert_eq!(admin.role, DEFAULT_ADMIN_ROLE);
        assert_eq!(admin.created_at, admin.updated_at);
    }

    #[test]
    fn password_is_never_serialized() {
        let admin = Admin::from(NewAdmin {
            username: "jsmith".to_owned(),
            email: "jsmith@example.com".to_owned(),
            password: "$argon2id$stub".to_owned(),
            ..Default::default()
        });

        let json = serde_json::to_string(&admin).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("stub"));
    }

    #[test]
    fn queryable_fields() {
        let admin = Admin::from(NewAdmin {
            username: "jsmith".to_owned(),
            email: "jsmith@example.com".to_owned(),
            ..Default::default()
        });

        assert_eq!(
            admin.field("username"),
            Some(FieldValue::from("jsmith")),
        );
        assert!(admin.field("createdAt").is_some());
        assert!(admin.field("password").is_none());
    }
}
