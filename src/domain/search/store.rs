use crate::domain::errors::DomainResult;
use crate::domain::search::{filter::SearchFilter, sort::SortSpec};
use crate::domain::user::User;
use async_trait::async_trait;

/// Boundary to the backing document store. Any store qualifies that has
/// strictly ordered native identifiers, range predicates over them and a
/// multi-key sort. Implementations decode their raw rows into `User`s and
/// report a `Decode` error for any row that will not decode; partial results
/// are never returned.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Number of documents matching the predicate, ignoring any limit.
    async fn count(&self, filter: &SearchFilter) -> DomainResult<u64>;

    /// Matching documents in the requested order, at most `limit` of them
    /// (unbounded when `None`). An empty `sort` means the store's natural
    /// order, which must be stable run-to-run.
    async fn fetch(
        &self,
        filter: &SearchFilter,
        sort: &SortSpec,
        limit: Option<u64>,
    ) -> DomainResult<Vec<User>>;
}
