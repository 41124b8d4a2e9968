// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(id: UserId, email: Email, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub email: Option<Email>,
    pub updated_at: DateTime<Utc>,
}

impl UserUpdate {
    pub fn new(id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: None,
            updated_at,
        }
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }
}
