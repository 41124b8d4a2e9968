// src/infrastructure/repositories/memory.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::search::{SearchFilter, SortSpec, UserStore};
use crate::domain::user::{Email, NewUser, User, UserId, UserRepository, UserUpdate};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Map-backed store used by the test suites and local experiments. Iteration
/// order of the map is id-ascending, which doubles as the store's natural
/// order; the multi-key sort is stable, so equal rows keep that order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: Mutex<BTreeMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(users: impl IntoIterator<Item = User>) -> Self {
        let inner = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            inner: Mutex::new(inner),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        if map
            .values()
            .any(|user| user.email.as_str() == new_user.email.as_str())
        {
            return Err(DomainError::AlreadyExists("email already registered".into()));
        }

        let user = User {
            id: new_user.id,
            email: new_user.email,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        map.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|user| user.email.as_str() == email.as_str())
            .cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        let user = map
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound(update.id.encode()))?;

        if let Some(email) = update.email {
            user.email = email;
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(id.encode()))
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn count(&self, filter: &SearchFilter) -> DomainResult<u64> {
        let map = self.inner.lock().unwrap();
        Ok(map.keys().filter(|id| filter.matches(**id)).count() as u64)
    }

    async fn fetch(
        &self,
        filter: &SearchFilter,
        sort: &SortSpec,
        limit: Option<u64>,
    ) -> DomainResult<Vec<User>> {
        let map = self.inner.lock().unwrap();
        let mut users: Vec<User> = map
            .values()
            .filter(|user| filter.matches(user.id))
            .cloned()
            .collect();

        if !sort.is_natural() {
            users.sort_by(|a, b| sort.compare(a, b));
        }

        if let Some(limit) = limit {
            users.truncate(limit as usize);
        }

        Ok(users)
    }
}
