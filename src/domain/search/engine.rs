// src/domain/search/engine.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::search::{
    filter::SearchFilter,
    page::{self, SearchResult, UserWithCursor},
    request::SearchRequest,
    sort::SortSpec,
    store::UserStore,
};
use std::{future::Future, sync::Arc};
use tokio_util::sync::CancellationToken;

/// Orchestrates a single search: predicate + sort resolution, the count
/// query, the bounded fetch, cursor minting and page-flag derivation.
///
/// The engine owns no state beyond the store handle; concurrent calls do not
/// interfere. Each call is two sequential store operations, with the fetch
/// skipped entirely when the count is zero. No retries happen here; retry
/// policy belongs to the store client.
pub struct SearchEngine {
    store: Arc<dyn UserStore>,
}

impl SearchEngine {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn search(&self, request: &SearchRequest) -> DomainResult<SearchResult> {
        self.search_with_cancellation(request, &CancellationToken::new())
            .await
    }

    /// Search with cooperative cancellation. The token is raced against both
    /// store calls; a cancellation arriving between them suppresses the fetch
    /// and surfaces `Cancelled` instead of a partial page.
    pub async fn search_with_cancellation(
        &self,
        request: &SearchRequest,
        cancel: &CancellationToken,
    ) -> DomainResult<SearchResult> {
        let filter = SearchFilter::from_request(request)?;
        let sort = SortSpec::resolve(&request.sort_keys);

        // The total counts id-filter matches only; the cursor bounds scope
        // the fetch, never the count.
        let total_count = guarded(cancel, self.store.count(&filter.unbounded()))
            .await
            .map_err(wrap_store_error)?;

        if total_count == 0 {
            return Ok(SearchResult::default());
        }

        if cancel.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        let limit = request.pagination.first.or(request.pagination.last);
        let users = guarded(cancel, self.store.fetch(&filter, &sort, limit))
            .await
            .map_err(wrap_store_error)?;

        let users = users
            .into_iter()
            .map(|user| {
                let cursor = user.id.encode();
                UserWithCursor { user, cursor }
            })
            .collect();

        Ok(SearchResult {
            users,
            page_info: page::page_info(&request.pagination, total_count),
            total_count,
        })
    }
}

/// Race a store operation against cancellation. Polls the cancellation side
/// first so an already-cancelled token never issues the operation.
async fn guarded<T, F>(cancel: &CancellationToken, operation: F) -> DomainResult<T>
where
    F: Future<Output = DomainResult<T>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(DomainError::Cancelled),
        result = operation => result,
    }
}

/// Store-level failures are wrapped so callers can tell "the search broke"
/// apart from request-shape errors; everything already classified
/// (malformed cursors, decode failures, cancellation) passes through.
fn wrap_store_error(err: DomainError) -> DomainError {
    match err {
        DomainError::StoreUnavailable(_) => DomainError::SearchFailed {
            source: Box::new(err),
        },
        other => other,
    }
}
