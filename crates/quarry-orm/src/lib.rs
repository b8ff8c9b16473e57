//! # quarry-orm
//!
//! A Django-like ORM on top of `quarry-core`. Every statement is built as a
//! core AST and compiled for the dialect of the connected database.
//!
//! This crate provides:
//! - `Model` trait for database models
//! - `Manager` for database access patterns
//! - `QuerySet` for lazy, chainable queries
//! - `Q` objects for complex filter expressions
//! - `Database` and `DatabaseConfig` for connections
//!
//! ## Quick Start
//!
//! ```ignore
//! use quarry_orm::{Database, DatabaseConfig, Model, Q};
//!
//! #[derive(sqlx::FromRow)]
//! struct User {
//!     id: i64,
//!     username: String,
//!     is_active: bool,
//! }
//!
//! impl Model for User {
//!     const TABLE: &'static str = "users";
//!     const COLUMNS: &'static [&'static str] = &["id", "username", "is_active"];
//!     type PrimaryKey = i64;
//!
//!     fn pk(&self) -> i64 {
//!         self.id
//!     }
//! }
//!
//! async fn example() -> quarry_orm::Result<()> {
//!     let db = Database::connect(&DatabaseConfig::from_env()?).await?;
//!
//!     // Get all active users
//!     let users = User::objects()
//!         .filter(Q::eq("is_active", true))
//!         .order_by("-id")
//!         .execute(&db)
//!         .await?;
//!
//!     // Get a specific user
//!     let user = User::objects().get(&db, 1).await?;
//!
//!     // Count users
//!     let count = User::objects().all().count(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Complex Filters with Q Objects
//!
//! ```rust
//! use quarry_orm::Q;
//! use quarry_core::dialect::PostgresCompiler;
//!
//! let filter = Q::eq("status", "active")
//!     .and(Q::gt("age", 18).or(Q::eq("verified", true)));
//!
//! let (sql, params) = filter.to_sql(&PostgresCompiler).unwrap();
//! assert_eq!(sql, r#""status" = ? AND ("age" > ? OR "verified" = ?)"#);
//! assert_eq!(params.len(), 3);
//! ```

mod config;
mod database;
mod error;
mod manager;
mod model;
pub mod query;
mod queryset;

pub use config::DatabaseConfig;
pub use database::{Database, Executor};
pub use error::{OrmError, Result};
pub use manager::Manager;
pub use model::Model;
pub use query::{avg, count, count_all, count_distinct, max, min, sum, Aggregate, Q};
pub use queryset::{OrderBy, QuerySet};

// Re-export commonly used types from quarry-core
pub use quarry_core::ast::OrderDirection;
pub use quarry_core::{CompiledQuery, DialectKind, SqlValue, ToSqlValue};
