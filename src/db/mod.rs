//! Database module: schema, row models and the per-concern stores.
//!
//! Layout:
//! - `schema.rs`: SQL DDL plus idempotent bootstrap/seed logic
//! - `models.rs`: Rust structs mirroring DB rows and API projections
//! - `users.rs` / `catalog.rs` / `valuations.rs`: pool-injected stores
//!
//! The pool is created once at startup and handed to each store; no
//! store owns a global handle.

pub mod catalog;
pub mod models;
pub mod schema;
pub mod users;
pub mod valuations;

use crate::error::RealtyError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub use catalog::CatalogStore;
pub use schema::ensure_schema;
pub use users::UserStore;
pub use valuations::ValuationStore;

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if missing) the SQLite database at `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, RealtyError> {
    // sqlx turns the foreign_keys pragma on by default; the schema's
    // foreign keys are declarative only and must not be enforced.
    let connect_opts = SqliteConnectOptions::from_str(database_url)
        .map_err(RealtyError::Database)?
        .create_if_missing(true)
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    Ok(pool)
}
