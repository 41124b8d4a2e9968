// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::search::{SearchFilter, SortDirection, SortSpec, UserStore};
use crate::domain::user::{
    Email, NewUser, User, UserId, UserRepository, UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = UserId::from_uuid(row.id);
        let email = Email::new(row.email).map_err(|err| DomainError::Decode {
            id: Some(id.encode()),
            message: err.to_string(),
        })?;

        Ok(User {
            id,
            email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            id,
            email,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (id, email, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING id, email, created_at, updated_at",
        )
        .bind(id.as_uuid())
        .bind(email.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate {
            id,
            email,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE users SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(email) = email {
            let email_str: String = email.into();
            builder.push(", email = ");
            builder.push_bind(email_str);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_uuid());
        builder.push(" RETURNING id, email, created_at, updated_at");

        let maybe_row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound(id.encode()))?;
        User::try_from(row)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(id.encode()));
        }
        Ok(())
    }
}

impl PostgresUserRepository {
    fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a SearchFilter) {
        let mut has_where = false;

        if let Some(ids) = filter.ids() {
            let ids: Vec<Uuid> = ids.iter().map(UserId::as_uuid).collect();
            builder.push(" WHERE id = ANY(");
            builder.push_bind(ids);
            builder.push(")");
            has_where = true;
        }

        if let Some(after) = filter.after() {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("id > ");
            builder.push_bind(after.as_uuid());
            has_where = true;
        }

        if let Some(before) = filter.before() {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("id < ");
            builder.push_bind(before.as_uuid());
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: &SortSpec) {
        if sort.is_natural() {
            // Natural order has to be stable run-to-run for paging to work.
            builder.push(" ORDER BY id ASC");
            return;
        }

        for (index, key) in sort.keys().iter().enumerate() {
            builder.push(if index == 0 { " ORDER BY " } else { ", " });
            builder.push(key.field.column());
            builder.push(match key.direction {
                SortDirection::Ascending => " ASC",
                SortDirection::Descending => " DESC",
            });
        }
    }
}

#[async_trait]
impl UserStore for PostgresUserRepository {
    async fn count(&self, filter: &SearchFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(1) FROM users");
        Self::apply_conditions(&mut builder, filter);

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn fetch(
        &self,
        filter: &SearchFilter,
        sort: &SortSpec,
        limit: Option<u64>,
    ) -> DomainResult<Vec<User>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, email, created_at, updated_at FROM users");
        Self::apply_conditions(&mut builder, filter);
        Self::apply_ordering(&mut builder, sort);

        if let Some(limit) = limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit as i64);
        }

        let rows = builder
            .build_query_as::<UserRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
