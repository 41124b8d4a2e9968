// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_user;

pub use error::map_sqlx;
pub use memory::InMemoryUserRepository;
pub use postgres_user::PostgresUserRepository;
