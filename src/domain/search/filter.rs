// src/domain/search/filter.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::search::request::SearchRequest;
use crate::domain::user::UserId;
use std::collections::BTreeSet;

/// Store predicate built from a search request: an optional identifier
/// allow-list plus strict `after`/`before` bounds. Both bounds may be present
/// at once, forming a range.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    ids: Option<BTreeSet<UserId>>,
    after: Option<UserId>,
    before: Option<UserId>,
}

impl SearchFilter {
    /// Decode the raw request into a typed predicate. Any id-filter entry
    /// that fails to decode aborts the build with `InvalidFilter` naming the
    /// offending value; malformed `after`/`before` cursors surface as
    /// `MalformedCursor`.
    pub fn from_request(request: &SearchRequest) -> DomainResult<Self> {
        let ids = if request.id_filter.is_empty() {
            None
        } else {
            let mut set = BTreeSet::new();
            for raw in &request.id_filter {
                let id = UserId::decode(raw).map_err(|err| DomainError::InvalidFilter {
                    value: raw.clone(),
                    source: Box::new(err),
                })?;
                set.insert(id);
            }
            Some(set)
        };

        let after = request
            .pagination
            .after
            .as_deref()
            .map(UserId::decode)
            .transpose()?;
        let before = request
            .pagination
            .before
            .as_deref()
            .map(UserId::decode)
            .transpose()?;

        Ok(Self { ids, after, before })
    }

    /// The same predicate with the cursor bounds dropped. Totals are
    /// computed over the id filter alone; `after`/`before` only scope the
    /// fetch.
    pub fn unbounded(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            after: None,
            before: None,
        }
    }

    pub fn ids(&self) -> Option<&BTreeSet<UserId>> {
        self.ids.as_ref()
    }

    pub fn after(&self) -> Option<UserId> {
        self.after
    }

    pub fn before(&self) -> Option<UserId> {
        self.before
    }

    /// Predicate evaluation for stores that hold materialized documents.
    pub fn matches(&self, id: UserId) -> bool {
        if let Some(ids) = &self.ids {
            if !ids.contains(&id) {
                return false;
            }
        }
        if let Some(after) = self.after {
            if id <= after {
                return false;
            }
        }
        if let Some(before) = self.before {
            if id >= before {
                return false;
            }
        }
        true
    }
}
