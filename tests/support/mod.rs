#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio_util::sync::CancellationToken;
use userhub::{
    application::ports::time::Clock,
    domain::{
        errors::DomainResult,
        search::{SearchFilter, SortSpec, UserStore},
        user::{Email, User, UserId},
    },
};
use uuid::Uuid;

/// Deterministic user fixture. The numeric seed becomes both the identifier
/// and the email, so assertions can name users by seed.
pub fn user(seed: u128, created_secs: i64) -> User {
    let created_at = Utc.timestamp_opt(created_secs, 0).unwrap();
    User {
        id: UserId::from_uuid(Uuid::from_u128(seed)),
        email: Email::new(format!("user{seed:03}@example.com")).unwrap(),
        created_at,
        updated_at: created_at,
    }
}

/// `count` users with seeds 1..=count, creation times spaced one minute
/// apart.
pub fn seed_users(count: u128) -> Vec<User> {
    (1..=count).map(|n| user(n, n as i64 * 60)).collect()
}

pub fn cursor_of(seed: u128) -> String {
    UserId::from_uuid(Uuid::from_u128(seed)).encode()
}

/// Store decorator that counts calls, used to assert which store operations
/// a search actually issued.
pub struct CountingStore {
    inner: Arc<dyn UserStore>,
    count_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: Arc<dyn UserStore>) -> Self {
        Self {
            inner,
            count_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for CountingStore {
    async fn count(&self, filter: &SearchFilter) -> DomainResult<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.count(filter).await
    }

    async fn fetch(
        &self,
        filter: &SearchFilter,
        sort: &SortSpec,
        limit: Option<u64>,
    ) -> DomainResult<Vec<User>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(filter, sort, limit).await
    }
}

/// Store decorator that cancels the given token as a side effect of `count`
/// completing, simulating a caller that gives up between the count and the
/// fetch.
pub struct CancelOnCountStore {
    inner: Arc<dyn UserStore>,
    token: CancellationToken,
    fetch_calls: AtomicUsize,
}

impl CancelOnCountStore {
    pub fn new(inner: Arc<dyn UserStore>, token: CancellationToken) -> Self {
        Self {
            inner,
            token,
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for CancelOnCountStore {
    async fn count(&self, filter: &SearchFilter) -> DomainResult<u64> {
        let result = self.inner.count(filter).await;
        self.token.cancel();
        result
    }

    async fn fetch(
        &self,
        filter: &SearchFilter,
        sort: &SortSpec,
        limit: Option<u64>,
    ) -> DomainResult<Vec<User>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(filter, sort, limit).await
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(secs: i64) -> Self {
        Self(Utc.timestamp_opt(secs, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
