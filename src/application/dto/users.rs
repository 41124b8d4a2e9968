use crate::domain::{
    search::UserWithCursor,
    user::User,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.encode(),
            email: user.email.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// A user paired with its pagination cursor, as returned by create, update
/// and search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithCursorDto {
    pub user: UserDto,
    pub cursor: String,
}

impl From<UserWithCursor> for UserWithCursorDto {
    fn from(entry: UserWithCursor) -> Self {
        Self {
            user: entry.user.into(),
            cursor: entry.cursor,
        }
    }
}

impl UserWithCursorDto {
    pub fn from_user(user: User) -> Self {
        let cursor = user.id.encode();
        Self {
            user: user.into(),
            cursor,
        }
    }
}
