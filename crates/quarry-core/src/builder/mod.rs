//! Fluent statement builders.
//!
//! Builders consume `self` on every call and `build()` freezes the result
//! into a plain statement value. Rendering happens later, in a
//! [`Compiler`](crate::compiler::Compiler).
//!
//! # Example
//!
//! ```rust
//! use quarry_core::builder::{col, Select};
//! use quarry_core::dialect::DialectKind;
//!
//! let stmt = Select::new()
//!     .columns(&["id", "name"])
//!     .from("users")
//!     .where_clause(col("active").eq(true))
//!     .build();
//!
//! let query = DialectKind::Ansi.compiler().compile_select(&stmt).unwrap();
//! assert_eq!(query.sql, r#"SELECT "id", "name" FROM "users" WHERE "active" = ?"#);
//! ```

mod delete;
mod expr;
mod insert;
mod select;
mod update;
pub mod value;

pub use delete::Delete;
pub use expr::{
    avg, col, count, count_all, count_distinct, exists, expr, func, max, min, not_exists, sum,
};
pub use insert::Insert;
pub use select::Select;
pub use update::Update;
pub use value::{SqlValue, ToSqlValue};
