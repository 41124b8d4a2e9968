// src/domain/search/sort.rs
use crate::domain::errors::DomainError;
use crate::domain::user::User;
use std::{cmp::Ordering, fmt, str::FromStr};

/// Sortable fields of the user document. Keeping this closed keeps the store
/// implementations free of caller-supplied column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Email,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Email => "email",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "email" => Ok(SortField::Email),
            "created_at" => Ok(SortField::CreatedAt),
            "updated_at" => Ok(SortField::UpdatedAt),
            other => Err(DomainError::Validation(format!(
                "unknown sort field '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

/// Resolved multi-key sort specification, input order preserved. Empty means
/// the store's natural order (id ascending for the bundled stores). No
/// implicit tie-break is appended; ties fall through to the store's default
/// order.
#[derive(Debug, Clone, Default)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    pub fn resolve(keys: &[SortKey]) -> Self {
        Self { keys: keys.to_vec() }
    }

    pub fn is_natural(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Comparator form of the specification, used by stores that sort
    /// materialized documents. Equal rows compare `Equal`, leaving their
    /// relative order to the store (stable sorts keep natural order).
    pub fn compare(&self, a: &User, b: &User) -> Ordering {
        for key in &self.keys {
            let ordering = match key.field {
                SortField::Id => a.id.cmp(&b.id),
                SortField::Email => a.email.as_str().cmp(b.email.as_str()),
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            };
            let ordering = match key.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}
