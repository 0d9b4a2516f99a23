use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::accounts::dto::PublicUser;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,                  // autoincrement primary key
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,    // argon2 PHC string, not exposed
}

impl User {
    pub fn into_public(self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }
}
