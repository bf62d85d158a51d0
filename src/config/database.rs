//! Database configuration and connection pool initialization.
//!
//! The pool is created once at startup and cloned into the application
//! state; request handlers acquire and release connections through it.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//!
//! # Panics
//!
//! [`init_db_pool`] panics if `DATABASE_URL` is not set or the database
//! cannot be reached. Configuration failures at startup are fatal.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;

/// Initializes the PostgreSQL connection pool.
///
/// Should be called once during application startup. The returned pool
/// is cheaply cloneable and shared across request handlers via
/// [`crate::state::AppState`].
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database")
}
