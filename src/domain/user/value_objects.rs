// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

/// Native identifier of a stored user document.
///
/// Backed by a 128-bit UUID so identifiers are fixed-width and strictly
/// ordered by byte comparison. The opaque cursor exposed to callers is the
/// lowercase 32-character hex encoding of those bytes; because hex preserves
/// byte order, `decode(a) < decode(b)` agrees with the lexicographic order of
/// the cursors themselves and with the backing store's identifier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Mint a fresh identifier for a new document.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Encode the identifier as an opaque cursor string. Total: every valid
    /// identifier has an encoding.
    pub fn encode(&self) -> String {
        self.0.simple().to_string()
    }

    /// Decode a cursor string back into an identifier. Rejects anything that
    /// is not exactly 32 lowercase hex characters, so every accepted cursor
    /// is in the canonical form `encode` emits.
    pub fn decode(cursor: &str) -> DomainResult<Self> {
        if cursor.len() != 32
            || !cursor
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return Err(DomainError::MalformedCursor {
                value: cursor.to_string(),
            });
        }

        Uuid::try_parse(cursor)
            .map(Self)
            .map_err(|_| DomainError::MalformedCursor {
                value: cursor.to_string(),
            })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }

        let mut parts = trimmed.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(DomainError::Validation(format!(
                "'{trimmed}' is not a valid email address"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
