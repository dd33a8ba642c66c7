use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    /// Identifier of the restaurant this client belongs to, if any.
    pub restaurant_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
}

impl NewClient {
    #[must_use]
    pub fn new(name: String, email: String, phone: String, age: i32) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            phone: phone.trim().to_string(),
            age,
        }
    }
}

/// Partial patch applied over a loaded client. Absent fields keep the
/// stored value; the membership reference is never touched here.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        age: Option<i32>,
    ) -> Self {
        Self {
            name: name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            age,
        }
    }
}
