use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User account (stored in the `users` collection).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub name: String,

    /// Unique login identifier; donation forms resolve the donor by email.
    pub email: String,

    pub phone: String,

    /// Bcrypt hash. Persisted with the document; API responses go through
    /// [`UserInfo`], which has no password field.
    #[serde(default)]
    pub password: String,

    #[serde(default = "default_role")]
    pub role: String,

    /// Ordered back-references to donated Food records. Weak ownership: every
    /// id here must point at an existing Food whose `donor` is this user.
    #[serde(default)]
    pub food: Vec<ObjectId>,
}

fn default_role() -> String {
    "donor".to_string()
}

/// Public view of a user (ids as hex, no password).
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        UserInfo {
            id: user.id.to_hex(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role.clone(),
        }
    }
}
