mod support;

use std::sync::Arc;

use support::{CancelOnCountStore, CountingStore, cursor_of, seed_users};
use tokio_util::sync::CancellationToken;
use userhub::{
    domain::{
        errors::DomainError,
        search::{
            Pagination, SearchEngine, SearchRequest, SortField, SortKey, UserStore,
        },
        user::UserId,
    },
    infrastructure::repositories::InMemoryUserRepository,
};

fn engine_over(count: u128) -> SearchEngine {
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::seeded(seed_users(count)));
    SearchEngine::new(store)
}

fn request(pagination: Pagination, sort_keys: Vec<SortKey>) -> SearchRequest {
    SearchRequest {
        id_filter: Vec::new(),
        pagination,
        sort_keys,
    }
}

#[tokio::test]
async fn repeated_searches_return_identical_pages() {
    let engine = engine_over(10);
    let request = request(
        Pagination {
            first: Some(4),
            ..Pagination::default()
        },
        vec![SortKey::ascending(SortField::Email)],
    );

    let first_run = engine.search(&request).await.unwrap();
    let second_run = engine.search(&request).await.unwrap();

    let cursors = |result: &userhub::domain::search::SearchResult| {
        result
            .users
            .iter()
            .map(|entry| entry.cursor.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(cursors(&first_run), cursors(&second_run));
    assert_eq!(first_run.total_count, second_run.total_count);
    assert_eq!(first_run.page_info, second_run.page_info);
}

#[tokio::test]
async fn every_returned_cursor_decodes_to_its_user() {
    let engine = engine_over(6);
    let result = engine
        .search(&request(Pagination::default(), Vec::new()))
        .await
        .unwrap();

    assert_eq!(result.users.len(), 6);
    for entry in &result.users {
        let decoded = UserId::decode(&entry.cursor).unwrap();
        assert_eq!(decoded, entry.user.id);
    }
}

#[tokio::test]
async fn natural_order_yields_lexicographically_ascending_cursors() {
    let engine = engine_over(8);
    let result = engine
        .search(&request(Pagination::default(), Vec::new()))
        .await
        .unwrap();

    let cursors: Vec<&str> = result.users.iter().map(|e| e.cursor.as_str()).collect();
    let mut sorted = cursors.clone();
    sorted.sort();
    assert_eq!(cursors, sorted);
}

#[tokio::test]
async fn empty_store_short_circuits_without_fetching() {
    let inner: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
    let store = Arc::new(CountingStore::new(inner));
    let engine = SearchEngine::new(store.clone());

    let result = engine
        .search(&request(
            Pagination {
                first: Some(5),
                ..Pagination::default()
            },
            Vec::new(),
        ))
        .await
        .unwrap();

    assert!(result.users.is_empty());
    assert_eq!(result.total_count, 0);
    assert_eq!(result.page_info, Default::default());
    assert_eq!(store.count_calls(), 1);
    assert_eq!(store.fetch_calls(), 0);
}

#[tokio::test]
async fn forward_window_truncates_and_reports_next_page() {
    let engine = engine_over(10);
    let result = engine
        .search(&request(
            Pagination {
                first: Some(5),
                ..Pagination::default()
            },
            Vec::new(),
        ))
        .await
        .unwrap();

    assert_eq!(result.users.len(), 5);
    assert_eq!(result.total_count, 10);
    assert!(result.page_info.has_next_page);
    assert!(!result.page_info.has_previous_page);
    // The window is the head of the natural order.
    assert_eq!(result.users[0].cursor, cursor_of(1));
    assert_eq!(result.users[4].cursor, cursor_of(5));
}

#[tokio::test]
async fn after_cursor_with_truncating_window_reports_both_pages() {
    let engine = engine_over(20);
    let result = engine
        .search(&request(
            Pagination {
                after: Some(cursor_of(5)),
                first: Some(9),
                ..Pagination::default()
            },
            Vec::new(),
        ))
        .await
        .unwrap();

    // 15 users sit strictly after seed 5 and the window keeps the first 9,
    // but the total still counts the whole collection.
    assert_eq!(result.total_count, 20);
    assert_eq!(result.users.len(), 9);
    assert_eq!(result.users[0].cursor, cursor_of(6));
    assert_eq!(result.users[8].cursor, cursor_of(14));
    assert!(result.page_info.has_next_page);
    assert!(result.page_info.has_previous_page);
}

#[tokio::test]
async fn total_count_ignores_the_cursor_bounds() {
    let engine = engine_over(10);
    let result = engine
        .search(&request(
            Pagination {
                after: Some(cursor_of(1)),
                first: Some(9),
                ..Pagination::default()
            },
            Vec::new(),
        ))
        .await
        .unwrap();

    // Nine users remain after the cursor, yet the total reports all ten.
    assert_eq!(result.total_count, 10);
    assert_eq!(result.users.len(), 9);
    assert_eq!(result.users[0].cursor, cursor_of(2));
    assert_eq!(result.users[8].cursor, cursor_of(10));
    assert!(result.page_info.has_next_page);
    assert!(result.page_info.has_previous_page);
}

#[tokio::test]
async fn descending_sort_reverses_ascending_order() {
    let engine = engine_over(7);

    let ascending = engine
        .search(&request(
            Pagination::default(),
            vec![SortKey::ascending(SortField::Email)],
        ))
        .await
        .unwrap();
    let descending = engine
        .search(&request(
            Pagination::default(),
            vec![SortKey::descending(SortField::Email)],
        ))
        .await
        .unwrap();

    let forward: Vec<String> = ascending.users.iter().map(|e| e.cursor.clone()).collect();
    let mut backward: Vec<String> = descending.users.iter().map(|e| e.cursor.clone()).collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[tokio::test]
async fn malformed_id_filter_entry_fails_before_any_store_call() {
    let inner: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::seeded(seed_users(3)));
    let store = Arc::new(CountingStore::new(inner));
    let engine = SearchEngine::new(store.clone());

    let bad_request = SearchRequest {
        id_filter: vec![cursor_of(1), "not-a-cursor".into()],
        pagination: Pagination::default(),
        sort_keys: Vec::new(),
    };

    let err = engine.search(&bad_request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidFilter { value, .. } if value == "not-a-cursor"
    ));
    assert_eq!(store.count_calls(), 0);
    assert_eq!(store.fetch_calls(), 0);
}

#[tokio::test]
async fn cancellation_between_count_and_fetch_suppresses_the_fetch() {
    let inner: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::seeded(seed_users(5)));
    let token = CancellationToken::new();
    let store = Arc::new(CancelOnCountStore::new(inner, token.clone()));
    let engine = SearchEngine::new(store.clone());

    let err = engine
        .search_with_cancellation(
            &request(
                Pagination {
                    first: Some(3),
                    ..Pagination::default()
                },
                Vec::new(),
            ),
            &token,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Cancelled));
    assert_eq!(store.fetch_calls(), 0);
}

#[tokio::test]
async fn id_filter_restricts_the_result_and_the_total() {
    let engine = engine_over(10);
    let result = engine
        .search(&SearchRequest {
            id_filter: vec![cursor_of(2), cursor_of(7), cursor_of(2)],
            pagination: Pagination::default(),
            sort_keys: Vec::new(),
        })
        .await
        .unwrap();

    // Duplicate entries collapse; the total reflects the filtered set.
    assert_eq!(result.total_count, 2);
    let cursors: Vec<String> = result.users.iter().map(|e| e.cursor.clone()).collect();
    assert_eq!(cursors, vec![cursor_of(2), cursor_of(7)]);
}

#[tokio::test]
async fn malformed_after_cursor_is_rejected_as_such() {
    let engine = engine_over(3);
    let err = engine
        .search(&request(
            Pagination {
                after: Some("xyz".into()),
                first: Some(2),
                ..Pagination::default()
            },
            Vec::new(),
        ))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::MalformedCursor { value } if value == "xyz"
    ));
}

#[tokio::test]
async fn store_failure_is_wrapped_as_search_failure() {
    struct FailingStore;

    #[async_trait::async_trait]
    impl UserStore for FailingStore {
        async fn count(
            &self,
            _filter: &userhub::domain::search::SearchFilter,
        ) -> userhub::domain::errors::DomainResult<u64> {
            Err(DomainError::StoreUnavailable("connection refused".into()))
        }

        async fn fetch(
            &self,
            _filter: &userhub::domain::search::SearchFilter,
            _sort: &userhub::domain::search::SortSpec,
            _limit: Option<u64>,
        ) -> userhub::domain::errors::DomainResult<Vec<userhub::domain::user::User>> {
            unreachable!("count already failed")
        }
    }

    let engine = SearchEngine::new(Arc::new(FailingStore));
    let err = engine
        .search(&request(Pagination::default(), Vec::new()))
        .await
        .unwrap_err();

    match err {
        DomainError::SearchFailed { source } => {
            assert!(matches!(*source, DomainError::StoreUnavailable(_)));
        }
        other => panic!("expected SearchFailed, got {other:?}"),
    }
}
