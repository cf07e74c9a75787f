//! PostgreSQL repository implementations.
//!
//! - [`PgUrlRepository`] - Key lookups against the `urls` table

pub mod pg_url_repository;

pub use pg_url_repository::PgUrlRepository;
