//! # quarry-core
//!
//! A fluent SQL query builder with dialect-specific compilation.
//!
//! This crate provides:
//! - Fluent builders producing immutable statement values
//! - A [`Compiler`] per backend (ANSI, MySQL, PostgreSQL, SQLite, SQL Server,
//!   Oracle, DB2, Firebird, NuoDB) with LIMIT/OFFSET emulation
//! - Protection against SQL injection: every value becomes a `?` parameter
//!
//! ## Building and compiling
//!
//! ```rust
//! use quarry_core::builder::{col, Select};
//! use quarry_core::dialect::DialectKind;
//! use quarry_core::SqlValue;
//!
//! let stmt = Select::new()
//!     .from("users")
//!     .where_clause(col("age").between(18, 21))
//!     .build();
//!
//! let query = DialectKind::Ansi.compiler().compile_select(&stmt).unwrap();
//! assert_eq!(query.sql, r#"SELECT * FROM "users" WHERE "age" BETWEEN ? AND ?"#);
//! assert_eq!(query.params, vec![SqlValue::Int(18), SqlValue::Int(21)]);
//! ```
//!
//! ## Pagination across dialects
//!
//! ```rust
//! use quarry_core::builder::Select;
//! use quarry_core::dialect::DialectKind;
//!
//! let stmt = Select::new().from("users").limit(10).build();
//!
//! let mssql = DialectKind::from_driver("sqlsrv").compiler();
//! assert_eq!(mssql.compile_select(&stmt).unwrap().sql, "SELECT TOP 10 * FROM [users]");
//!
//! let mysql = DialectKind::from_driver("mysql").compiler();
//! assert_eq!(mysql.compile_select(&stmt).unwrap().sql, "SELECT * FROM `users` LIMIT 10");
//! ```

pub mod ast;
pub mod builder;
pub mod compiler;
pub mod dialect;

pub use ast::{Condition, Expression, Operand, Predicate, Statement};
pub use builder::{col, Delete, Insert, Select, SqlValue, ToSqlValue, Update};
pub use compiler::{CompileError, CompiledQuery, Compiler, Result};
pub use dialect::DialectKind;
