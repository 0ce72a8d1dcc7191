use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Post entity - the single resource served by the API.
///
/// Carries exactly the six projected columns; anything else the store
/// keeps on the row is never deserialized into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

/// A validated post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post stamped with the current time.
    pub fn new(title: String, body: String, user_id: i64) -> Self {
        let now = Utc::now();
        Self {
            title,
            body,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the id assigned by the store.
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
